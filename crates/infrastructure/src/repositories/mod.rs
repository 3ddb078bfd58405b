pub mod clickhouse_log_repository;
pub mod postgres_log_repository;

pub use clickhouse_log_repository::{ClickHouseLogConnector, ClickHouseLogStore};
pub use postgres_log_repository::{PgLogConnector, PgLogStore};

/// Table swept on both backends.
pub(crate) const LOG_TABLE: &str = "logs";
