#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use logsweep_application::ports::{
    ColumnarConnector, ColumnarLogStore, RelationalConnector, RelationalLogStore,
};
use logsweep_domain::{Backend, DomainError, MutationAck};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory `logs` table holding only `created_at` values.
#[derive(Clone, Default)]
pub struct MockLogTable {
    rows: Arc<RwLock<Vec<DateTime<Utc>>>>,
}

impl MockLogTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_recent_log(&self) {
        self.rows.write().await.push(Utc::now());
    }

    pub async fn add_old_log(&self, days_ago: i64) {
        self.rows
            .write()
            .await
            .push(Utc::now() - Duration::days(days_ago));
    }

    pub async fn add_logs(&self, count: usize, days_ago: i64) {
        for _ in 0..count {
            self.add_old_log(days_ago).await;
        }
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }

    async fn delete_before(&self, cutoff: DateTime<Utc>) -> u64 {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|created_at| *created_at >= cutoff);
        (before - rows.len()) as u64
    }
}

#[derive(Clone)]
pub struct MockRelationalConnector {
    table: MockLogTable,
    fail_connect: Arc<AtomicBool>,
    fail_delete: Arc<AtomicBool>,
    fail_close: Arc<AtomicBool>,
    connects: Arc<AtomicU64>,
    closes: Arc<AtomicU64>,
}

impl MockRelationalConnector {
    pub fn new(table: MockLogTable) -> Self {
        Self {
            table,
            fail_connect: Arc::new(AtomicBool::new(false)),
            fail_delete: Arc::new(AtomicBool::new(false)),
            fail_close: Arc::new(AtomicBool::new(false)),
            connects: Arc::new(AtomicU64::new(0)),
            closes: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn set_fail_connect(&self, fail: bool) {
        self.fail_connect.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_close(&self, fail: bool) {
        self.fail_close.store(fail, Ordering::SeqCst);
    }

    pub fn connect_count(&self) -> u64 {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> u64 {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RelationalConnector for MockRelationalConnector {
    async fn connect(&self) -> Result<Box<dyn RelationalLogStore>, DomainError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(DomainError::connection(
                Backend::Postgres,
                "connection refused",
            ));
        }
        Ok(Box::new(MockRelationalStore {
            table: self.table.clone(),
            fail_delete: self.fail_delete.load(Ordering::SeqCst),
            fail_close: self.fail_close.load(Ordering::SeqCst),
            closes: self.closes.clone(),
        }))
    }
}

struct MockRelationalStore {
    table: MockLogTable,
    fail_delete: bool,
    fail_close: bool,
    closes: Arc<AtomicU64>,
}

#[async_trait]
impl RelationalLogStore for MockRelationalStore {
    async fn delete_logs_before(&mut self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        if self.fail_delete {
            return Err(DomainError::query(
                Backend::Postgres,
                "relation \"logs\" does not exist",
            ));
        }
        Ok(self.table.delete_before(cutoff).await)
    }

    async fn close(self: Box<Self>) -> Result<(), DomainError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(DomainError::connection(
                Backend::Postgres,
                "connection reset by peer",
            ));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockColumnarConnector {
    table: MockLogTable,
    fail_connect: Arc<AtomicBool>,
    fail_delete: Arc<AtomicBool>,
    connects: Arc<AtomicU64>,
    mutations: Arc<AtomicU64>,
}

impl MockColumnarConnector {
    pub fn new(table: MockLogTable) -> Self {
        Self {
            table,
            fail_connect: Arc::new(AtomicBool::new(false)),
            fail_delete: Arc::new(AtomicBool::new(false)),
            connects: Arc::new(AtomicU64::new(0)),
            mutations: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn set_fail_connect(&self, fail: bool) {
        self.fail_connect.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn connect_count(&self) -> u64 {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn mutation_count(&self) -> u64 {
        self.mutations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ColumnarConnector for MockColumnarConnector {
    async fn connect(&self) -> Result<Box<dyn ColumnarLogStore>, DomainError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(DomainError::connection(
                Backend::ClickHouse,
                "Authentication failed",
            ));
        }
        Ok(Box::new(MockColumnarStore {
            table: self.table.clone(),
            fail_delete: self.fail_delete.load(Ordering::SeqCst),
            mutations: self.mutations.clone(),
        }))
    }
}

struct MockColumnarStore {
    table: MockLogTable,
    fail_delete: bool,
    mutations: Arc<AtomicU64>,
}

#[async_trait]
impl ColumnarLogStore for MockColumnarStore {
    async fn delete_logs_before(&self, cutoff: DateTime<Utc>) -> Result<MutationAck, DomainError> {
        if self.fail_delete {
            return Err(DomainError::query(
                Backend::ClickHouse,
                "Code: 60. DB::Exception: Table default.logs does not exist",
            ));
        }
        let n = self.mutations.fetch_add(1, Ordering::SeqCst) + 1;
        // Applied immediately; the real server applies it in the background.
        self.table.delete_before(cutoff).await;
        Ok(MutationAck {
            query_id: Some(format!("mock-mutation-{}", n)),
            raw: String::new(),
        })
    }
}
