use super::LOG_TABLE;
use crate::database::{connect_postgres, pg_connect_options};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logsweep_application::ports::{RelationalConnector, RelationalLogStore};
use logsweep_domain::{config::DatabaseConfig, Backend, DomainError};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::{error, instrument};

fn query_error(context: &str, e: sqlx::Error) -> DomainError {
    error!(error = %e, "{}", context);
    DomainError::query(Backend::Postgres, format!("{}: {}", context, e))
}

/// Opens one fresh PostgreSQL connection per cleanup.
pub struct PgLogConnector {
    options: PgConnectOptions,
}

impl PgLogConnector {
    pub fn new(cfg: &DatabaseConfig) -> Self {
        Self::from_options(pg_connect_options(cfg))
    }

    pub fn from_options(options: PgConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl RelationalConnector for PgLogConnector {
    async fn connect(&self) -> Result<Box<dyn RelationalLogStore>, DomainError> {
        let conn = connect_postgres(&self.options)
            .await
            .map_err(|e| DomainError::connection(Backend::Postgres, e.to_string()))?;
        Ok(Box::new(PgLogStore::new(conn)))
    }
}

pub struct PgLogStore {
    conn: PgConnection,
}

impl PgLogStore {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl RelationalLogStore for PgLogStore {
    #[instrument(skip(self))]
    async fn delete_logs_before(&mut self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let sql = format!("DELETE FROM {} WHERE created_at < $1", LOG_TABLE);

        // Dropping the transaction on an early return rolls it back.
        let mut tx = self
            .conn
            .begin()
            .await
            .map_err(|e| query_error("Failed to begin transaction", e))?;

        let result = sqlx::query(&sql)
            .bind(cutoff)
            .execute(&mut *tx)
            .await
            .map_err(|e| query_error("Failed to delete old logs", e))?;

        tx.commit()
            .await
            .map_err(|e| query_error("Failed to commit log deletion", e))?;

        Ok(result.rows_affected())
    }

    async fn close(self: Box<Self>) -> Result<(), DomainError> {
        let store = *self;
        store
            .conn
            .close()
            .await
            .map_err(|e| DomainError::connection(Backend::Postgres, e.to_string()))
    }
}
