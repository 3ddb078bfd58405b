use crate::ports::ColumnarConnector;
use logsweep_domain::{Backend, DomainError, MutationAck, RetentionPolicy};
use std::sync::Arc;
use tracing::{error, info};

/// Use case: Submit a delete mutation for expired rows in the columnar `logs` table
pub struct CleanColumnarLogsUseCase {
    connector: Arc<dyn ColumnarConnector>,
}

impl CleanColumnarLogsUseCase {
    pub fn new(connector: Arc<dyn ColumnarConnector>) -> Self {
        Self { connector }
    }

    pub async fn execute(&self, policy: RetentionPolicy) -> Result<MutationAck, DomainError> {
        let store = self.connector.connect().await?;

        let cutoff = policy.cutoff();
        match store.delete_logs_before(cutoff).await {
            Ok(ack) => {
                info!(
                    retention_days = policy.days(),
                    cutoff = %cutoff,
                    query_id = ack.query_id.as_deref().unwrap_or("-"),
                    "Old logs delete mutation submitted to ClickHouse"
                );
                Ok(ack)
            }
            Err(e) => {
                error!(
                    backend = %Backend::ClickHouse,
                    error = %e,
                    "Error cleaning ClickHouse logs"
                );
                Err(e)
            }
        }
    }
}
