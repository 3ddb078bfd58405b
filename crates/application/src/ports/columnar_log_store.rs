use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logsweep_domain::{DomainError, MutationAck};

/// A live client to the columnar store, owned by one cleaner call.
#[async_trait]
pub trait ColumnarLogStore: Send + Sync {
    /// Submits a delete mutation for rows with `created_at < cutoff`.
    ///
    /// The server applies the mutation asynchronously; only its raw
    /// acknowledgment is returned.
    async fn delete_logs_before(&self, cutoff: DateTime<Utc>) -> Result<MutationAck, DomainError>;
}

#[async_trait]
pub trait ColumnarConnector: Send + Sync {
    /// Single authenticated connect attempt; no retry.
    async fn connect(&self) -> Result<Box<dyn ColumnarLogStore>, DomainError>;
}
