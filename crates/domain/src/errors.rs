use crate::backend::Backend;
use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Connection to {backend} failed: {message}")]
    Connection { backend: Backend, message: String },

    #[error("Query against {backend} failed: {message}")]
    Query { backend: Backend, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn connection(backend: Backend, message: impl Into<String>) -> Self {
        Self::Connection {
            backend,
            message: message.into(),
        }
    }

    pub fn query(backend: Backend, message: impl Into<String>) -> Self {
        Self::Query {
            backend,
            message: message.into(),
        }
    }

    /// Backend the failure originated from, if any.
    pub fn backend(&self) -> Option<Backend> {
        match self {
            Self::Connection { backend, .. } | Self::Query { backend, .. } => Some(*backend),
            Self::Configuration(_) => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query { .. })
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
