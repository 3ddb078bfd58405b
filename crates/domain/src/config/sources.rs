use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::retention::RetentionConfig;
use crate::retention::MAX_RETENTION_DAYS;
use serde::Deserialize;

pub(crate) struct EnvKeys {
    pub host: &'static str,
    pub port: &'static str,
    pub database: &'static str,
    pub user: &'static str,
    pub password: &'static str,
}

pub(crate) const POSTGRES_ENV: EnvKeys = EnvKeys {
    host: "POSTGRES_HOST",
    port: "POSTGRES_PORT",
    database: "POSTGRES_DB",
    user: "POSTGRES_USER",
    password: "POSTGRES_PASSWORD",
};

pub(crate) const CLICKHOUSE_ENV: EnvKeys = EnvKeys {
    host: "CLICKHOUSE_HOST",
    port: "CLICKHOUSE_PORT",
    database: "CLICKHOUSE_DB",
    user: "CLICKHOUSE_USER",
    password: "CLICKHOUSE_PASSWORD",
};

pub(crate) const RETENTION_DAYS_ENV: &str = "LOG_RETENTION_DAYS";
pub(crate) const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub(crate) const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Problems collected across every source so they can be reported together.
#[derive(Debug, Default)]
pub(crate) struct Problems {
    missing: Vec<String>,
    invalid: Vec<String>,
    flagged: Vec<&'static str>,
}

impl Problems {
    fn reject(&mut self, key: &'static str, reason: String) {
        self.flagged.push(key);
        self.invalid.push(format!("{}: {}", key, reason));
    }

    fn require<T>(&mut self, value: Option<T>, key: &'static str) -> Option<T> {
        if value.is_none() && !self.flagged.contains(&key) {
            self.missing.push(key.to_string());
        }
        value
    }

    fn require_non_empty(&mut self, value: Option<String>, key: &'static str) -> Option<String> {
        match self.require(value, key) {
            Some(v) if v.trim().is_empty() => {
                self.reject(key, "must not be empty".to_string());
                None
            }
            other => other,
        }
    }

    pub(crate) fn into_error(self) -> Option<ConfigError> {
        ConfigError::from_problems(self.missing, self.invalid)
    }
}

/// Configuration as read from one layer; every field may still be unset.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PartialConfig {
    pub postgres: PartialDatabase,
    pub clickhouse: PartialDatabase,
    pub retention: PartialRetention,
    pub logging: PartialLogging,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PartialDatabase {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PartialRetention {
    pub days: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PartialLogging {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl PartialConfig {
    pub(crate) fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub(crate) fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Environment values win over file values.
    pub(crate) fn apply_env<F>(&mut self, lookup: &F, problems: &mut Problems)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.postgres.apply_env(&POSTGRES_ENV, lookup, problems);
        self.clickhouse.apply_env(&CLICKHOUSE_ENV, lookup, problems);

        if let Some(raw) = lookup(RETENTION_DAYS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(days) => self.retention.days = Some(days),
                Err(_) => problems.reject(
                    RETENTION_DAYS_ENV,
                    format!("expected a non-negative whole number of days, got '{}'", raw),
                ),
            }
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.logging.level = Some(level);
        }
        if let Some(raw) = lookup(LOG_FORMAT_ENV) {
            match raw.parse::<LogFormat>() {
                Ok(format) => self.logging.format = Some(format),
                Err(e) => problems.reject(LOG_FORMAT_ENV, e),
            }
        }
    }

    pub(crate) fn build(
        self,
        problems: &mut Problems,
    ) -> Option<(DatabaseConfig, DatabaseConfig, RetentionConfig, LoggingConfig)> {
        let postgres = self.postgres.build(&POSTGRES_ENV, problems);
        let clickhouse = self.clickhouse.build(&CLICKHOUSE_ENV, problems);

        // Checked after all layers are merged.
        let retention = match self.retention.days {
            Some(days) if days > MAX_RETENTION_DAYS => {
                problems.reject(
                    RETENTION_DAYS_ENV,
                    format!("{} days exceeds the maximum of {}", days, MAX_RETENTION_DAYS),
                );
                None
            }
            Some(days) => Some(RetentionConfig { days }),
            None => Some(RetentionConfig::default()),
        };

        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: self.logging.level.unwrap_or(defaults.level),
            format: self.logging.format.unwrap_or(defaults.format),
        };

        Some((postgres?, clickhouse?, retention?, logging))
    }
}

impl PartialDatabase {
    fn apply_env<F>(&mut self, keys: &EnvKeys, lookup: &F, problems: &mut Problems)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(keys.host) {
            self.host = Some(host);
        }
        if let Some(raw) = lookup(keys.port) {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.port = Some(port),
                Err(_) => problems.reject(
                    keys.port,
                    format!("expected a port number, got '{}'", raw),
                ),
            }
        }
        if let Some(database) = lookup(keys.database) {
            self.database = Some(database);
        }
        if let Some(user) = lookup(keys.user) {
            self.user = Some(user);
        }
        if let Some(password) = lookup(keys.password) {
            self.password = Some(password);
        }
    }

    fn build(self, keys: &EnvKeys, problems: &mut Problems) -> Option<DatabaseConfig> {
        let host = problems.require_non_empty(self.host, keys.host);
        let port = match problems.require(self.port, keys.port) {
            Some(0) => {
                problems.reject(keys.port, "port cannot be 0".to_string());
                None
            }
            other => other,
        };
        let database = problems.require_non_empty(self.database, keys.database);
        let user = problems.require_non_empty(self.user, keys.user);
        let password = problems.require(self.password, keys.password);

        Some(DatabaseConfig {
            host: host?,
            port: port?,
            database: database?,
            user: user?,
            password: password?,
        })
    }
}
