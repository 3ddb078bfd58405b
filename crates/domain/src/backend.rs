use serde::{Deserialize, Serialize};
use std::fmt;

/// The two log stores a sweep touches, in the order they are cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Row-oriented transactional store.
    Postgres,
    /// Analytical store, deleted via asynchronous mutation.
    ClickHouse,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Postgres => "postgres",
            Backend::ClickHouse => "clickhouse",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
