pub mod clickhouse;
pub mod postgres;

pub use clickhouse::{ClickHouseClient, ClickHouseError, QueryResponse};
pub use postgres::{connect_postgres, pg_connect_options};
