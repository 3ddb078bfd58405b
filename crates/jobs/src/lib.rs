pub mod retention_sweep;

pub use retention_sweep::RetentionSweepJob;
