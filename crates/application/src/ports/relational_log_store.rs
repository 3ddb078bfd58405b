use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logsweep_domain::DomainError;

/// An open connection to the relational store, owned by one cleaner call.
#[async_trait]
pub trait RelationalLogStore: Send {
    /// Deletes every row with `created_at < cutoff` in one committed
    /// statement and returns the number of rows affected.
    async fn delete_logs_before(&mut self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Releases the connection. Called on success and failure paths alike.
    async fn close(self: Box<Self>) -> Result<(), DomainError>;
}

#[async_trait]
pub trait RelationalConnector: Send + Sync {
    /// Single connect attempt; no retry, no pooling.
    async fn connect(&self) -> Result<Box<dyn RelationalLogStore>, DomainError>;
}
