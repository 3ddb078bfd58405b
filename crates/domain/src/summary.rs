use serde::{Deserialize, Serialize};

/// Raw acknowledgment returned by the columnar store for a delete mutation.
///
/// The mutation is applied asynchronously by the server, so no affected-row
/// count is available when the statement returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationAck {
    pub query_id: Option<String>,
    pub raw: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupSummary {
    pub relational_deleted: u64,
    pub columnar_cleaned: bool,
}

/// Result of a successful invocation, shaped for the scheduler runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: CleanupSummary,
}

impl InvocationResponse {
    pub fn ok(body: CleanupSummary) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}
