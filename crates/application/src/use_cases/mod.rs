pub mod retention;

pub use retention::{
    CleanColumnarLogsUseCase, CleanRelationalLogsUseCase, HandleInvocationUseCase,
    InvocationContext, RunLogRetentionUseCase,
};
