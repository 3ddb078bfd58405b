use super::{CleanColumnarLogsUseCase, CleanRelationalLogsUseCase};
use logsweep_domain::{CleanupSummary, DomainError, RetentionPolicy};
use std::sync::Arc;
use tracing::{error, info};

/// Use case: One full sweep, PostgreSQL first and ClickHouse second
///
/// Fails fast: a relational failure means the columnar store is never
/// touched. A columnar failure after a successful relational delete fails
/// the sweep, and the relational rows stay deleted.
pub struct RunLogRetentionUseCase {
    relational: Arc<CleanRelationalLogsUseCase>,
    columnar: Arc<CleanColumnarLogsUseCase>,
}

impl RunLogRetentionUseCase {
    pub fn new(
        relational: Arc<CleanRelationalLogsUseCase>,
        columnar: Arc<CleanColumnarLogsUseCase>,
    ) -> Self {
        Self {
            relational,
            columnar,
        }
    }

    pub async fn execute(&self, policy: RetentionPolicy) -> Result<CleanupSummary, DomainError> {
        let summary = self.sweep(policy).await.map_err(|e| {
            error!(error = %e, "Log retention sweep failed");
            e
        })?;

        info!(
            relational_deleted = summary.relational_deleted,
            columnar_cleaned = summary.columnar_cleaned,
            "Log retention sweep completed"
        );
        Ok(summary)
    }

    async fn sweep(&self, policy: RetentionPolicy) -> Result<CleanupSummary, DomainError> {
        let relational_deleted = self.relational.execute(policy).await?;
        self.columnar.execute(policy).await?;

        Ok(CleanupSummary {
            relational_deleted,
            columnar_cleaned: true,
        })
    }
}
