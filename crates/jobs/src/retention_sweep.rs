use logsweep_application::use_cases::{HandleInvocationUseCase, InvocationContext};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Runs a full log retention sweep on a fixed interval.
///
/// The first sweep starts immediately. A failed sweep is logged and the next
/// tick runs as usual; ticks never overlap because each one awaits its sweep.
pub struct RetentionSweepJob {
    handler: Arc<HandleInvocationUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RetentionSweepJob {
    pub fn new(handler: Arc<HandleInvocationUseCase>) -> Self {
        Self {
            handler,
            interval_secs: 86400,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            retention_days = self.handler.policy().days(),
            interval_secs = self.interval_secs,
            "Starting log retention sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            let event = serde_json::Value::Null;
            let context = InvocationContext::default();
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RetentionSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.handler.execute(&event, &context).await {
                            Ok(response) => {
                                info!(
                                    relational_deleted = response.body.relational_deleted,
                                    columnar_cleaned = response.body.columnar_cleaned,
                                    "Scheduled log retention sweep completed"
                                );
                            }
                            Err(e) => {
                                error!(error = %e, "Scheduled log retention sweep failed");
                            }
                        }
                    }
                }
            }
        })
    }
}
