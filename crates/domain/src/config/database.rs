use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for one log store.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    /// May be empty; ClickHouse's `default` user ships without a password.
    pub password: String,
}

impl DatabaseConfig {
    /// Endpoint without credentials, for log fields.
    pub fn endpoint(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
