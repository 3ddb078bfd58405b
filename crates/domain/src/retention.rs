use chrono::{DateTime, TimeDelta, Utc};

pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Largest accepted window. Keeps the cutoff well inside the range both
/// backends can bind (PostgreSQL `timestamptz` ends at 4713 BC).
pub const MAX_RETENTION_DAYS: u32 = 1_000_000;

// 0001-01-01T00:00:00Z
const EARLIEST_CUTOFF_SECS: i64 = -62_135_596_800;

/// How long log rows are kept before a sweep may delete them.
///
/// The cutoff is derived from the clock on every call and never cached, so
/// two cleaners invoked moments apart may use slightly different cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    days: u32,
}

impl RetentionPolicy {
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Rows with `created_at` strictly before this instant are eligible.
    ///
    /// Never earlier than 0001-01-01 UTC, so a window reaching past that
    /// makes the sweep a no-op instead of binding an out-of-range timestamp.
    pub fn cutoff_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let earliest = earliest_cutoff();
        TimeDelta::try_days(i64::from(self.days))
            .and_then(|window| now.checked_sub_signed(window))
            .map_or(earliest, |cutoff| cutoff.max(earliest))
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff_at(Utc::now())
    }

    pub fn is_expired_at(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        created_at < self.cutoff_at(now)
    }
}

pub fn earliest_cutoff() -> DateTime<Utc> {
    DateTime::from_timestamp(EARLIEST_CUTOFF_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_DAYS)
    }
}
