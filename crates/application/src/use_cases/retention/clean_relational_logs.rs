use crate::ports::RelationalConnector;
use logsweep_domain::{Backend, DomainError, RetentionPolicy};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Use case: Delete expired rows from the relational `logs` table
pub struct CleanRelationalLogsUseCase {
    connector: Arc<dyn RelationalConnector>,
}

impl CleanRelationalLogsUseCase {
    pub fn new(connector: Arc<dyn RelationalConnector>) -> Self {
        Self { connector }
    }

    pub async fn execute(&self, policy: RetentionPolicy) -> Result<u64, DomainError> {
        let mut store = self.connector.connect().await?;

        let cutoff = policy.cutoff();
        let outcome = store.delete_logs_before(cutoff).await;

        // The connection is released whether or not the delete succeeded.
        if let Err(e) = store.close().await {
            warn!(
                backend = %Backend::Postgres,
                error = %e,
                "Failed to close connection after cleanup"
            );
        }

        match outcome {
            Ok(deleted) => {
                info!(
                    deleted,
                    retention_days = policy.days(),
                    cutoff = %cutoff,
                    "Old logs deleted from PostgreSQL"
                );
                Ok(deleted)
            }
            Err(e) => {
                error!(
                    backend = %Backend::Postgres,
                    error = %e,
                    "Error cleaning PostgreSQL logs"
                );
                Err(e)
            }
        }
    }
}
