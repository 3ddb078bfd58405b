#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Missing required configuration: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error(
        "Missing required configuration: {}; invalid configuration: {}",
        .missing.join(", "),
        .invalid.join("; ")
    )]
    MissingAndInvalid {
        missing: Vec<String>,
        invalid: Vec<String>,
    },
}

impl ConfigError {
    /// Folds every collected problem into one error, or `None` when clean.
    pub(crate) fn from_problems(missing: Vec<String>, invalid: Vec<String>) -> Option<Self> {
        match (missing.is_empty(), invalid.is_empty()) {
            (true, true) => None,
            (false, true) => Some(Self::Missing(missing)),
            (true, false) => Some(Self::Invalid(invalid)),
            (false, false) => Some(Self::MissingAndInvalid { missing, invalid }),
        }
    }

    /// Names of required settings that were absent.
    pub fn missing(&self) -> &[String] {
        match self {
            Self::Missing(missing) | Self::MissingAndInvalid { missing, .. } => missing,
            _ => &[],
        }
    }

    pub fn invalid(&self) -> &[String] {
        match self {
            Self::Invalid(invalid) | Self::MissingAndInvalid { invalid, .. } => invalid,
            _ => &[],
        }
    }
}
