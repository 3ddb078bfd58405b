pub mod clean_columnar_logs;
pub mod clean_relational_logs;
pub mod handle_invocation;
pub mod run_log_retention;

pub use clean_columnar_logs::CleanColumnarLogsUseCase;
pub use clean_relational_logs::CleanRelationalLogsUseCase;
pub use handle_invocation::{HandleInvocationUseCase, InvocationContext};
pub use run_log_retention::RunLogRetentionUseCase;
