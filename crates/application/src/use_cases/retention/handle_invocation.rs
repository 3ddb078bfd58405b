use super::RunLogRetentionUseCase;
use logsweep_domain::{DomainError, InvocationResponse, RetentionPolicy};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Runtime-supplied metadata about one invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvocationContext {
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Use case: Entry point for one scheduled or on-demand invocation
///
/// The event payload and context do not influence the sweep; the context's
/// request id is only attached to the invocation's log span.
pub struct HandleInvocationUseCase {
    run: Arc<RunLogRetentionUseCase>,
    policy: RetentionPolicy,
}

impl HandleInvocationUseCase {
    pub fn new(run: Arc<RunLogRetentionUseCase>, policy: RetentionPolicy) -> Self {
        Self { run, policy }
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    pub async fn execute(
        &self,
        _event: &serde_json::Value,
        context: &InvocationContext,
    ) -> Result<InvocationResponse, DomainError> {
        let span = info_span!(
            "log_retention",
            run_id = %Uuid::new_v4(),
            request_id = context.request_id.as_deref().unwrap_or("-"),
            retention_days = self.policy.days(),
        );

        let summary = self.run.execute(self.policy).instrument(span).await?;
        Ok(InvocationResponse::ok(summary))
    }
}
