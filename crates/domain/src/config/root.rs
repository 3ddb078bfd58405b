use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::retention::RetentionConfig;
use super::sources::{PartialConfig, Problems};
use crate::retention::RetentionPolicy;

const LOCAL_CONFIG_PATH: &str = "logsweep.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/logsweep/config.toml";

/// Main configuration structure for Logsweep
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Relational store holding the `logs` table
    pub postgres: DatabaseConfig,

    /// Columnar store holding the `logs` table
    pub clickhouse: DatabaseConfig,

    /// Retention window
    pub retention: RetentionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Layers, lowest priority first:
    /// 1. Explicitly provided file, else logsweep.toml, else /etc/logsweep/config.toml
    /// 2. Environment variables (`POSTGRES_*`, `CLICKHOUSE_*`, `LOG_RETENTION_DAYS`, ...)
    /// 3. Command-line overrides
    ///
    /// Every missing or invalid setting is reported in a single error.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = path.map(str::to_string).or_else(Self::get_config_path);
        Self::load_with(path.as_deref(), cli_overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the process environment
    pub fn load_with<F>(
        path: Option<&str>,
        cli_overrides: CliOverrides,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let partial = match path {
            Some(path) => PartialConfig::from_file(path)?,
            None => PartialConfig::default(),
        };
        Self::resolve(partial, cli_overrides, lookup)
    }

    /// Load configuration from TOML text layered under `lookup`
    pub fn from_toml_with<F>(
        contents: &str,
        cli_overrides: CliOverrides,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(PartialConfig::from_toml(contents)?, cli_overrides, lookup)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None, CliOverrides::default())
    }

    fn resolve<F>(
        mut partial: PartialConfig,
        cli_overrides: CliOverrides,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Problems::default();
        partial.apply_env(&lookup, &mut problems);
        cli_overrides.apply(&mut partial);

        let built = partial.build(&mut problems);
        if let Some(err) = problems.into_error() {
            return Err(err);
        }

        let (postgres, clickhouse, retention, logging) = built.ok_or_else(|| {
            ConfigError::Invalid(vec!["configuration could not be assembled".to_string()])
        })?;

        Ok(Self {
            postgres,
            clickhouse,
            retention,
            logging,
        })
    }

    pub fn retention_policy(&self) -> RetentionPolicy {
        self.retention.policy()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub retention_days: Option<u32>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl CliOverrides {
    fn apply(self, partial: &mut PartialConfig) {
        if let Some(days) = self.retention_days {
            partial.retention.days = Some(days);
        }
        if let Some(level) = self.log_level {
            partial.logging.level = Some(level);
        }
        if let Some(format) = self.log_format {
            partial.logging.format = Some(format);
        }
    }
}
