//! Logsweep Domain Layer
pub mod backend;
pub mod config;
pub mod errors;
pub mod retention;
pub mod summary;

pub use backend::Backend;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use retention::{RetentionPolicy, DEFAULT_RETENTION_DAYS, MAX_RETENTION_DAYS};
pub use summary::{CleanupSummary, InvocationResponse, MutationAck};
