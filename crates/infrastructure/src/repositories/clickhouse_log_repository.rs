use super::LOG_TABLE;
use crate::database::{ClickHouseClient, ClickHouseError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logsweep_application::ports::{ColumnarConnector, ColumnarLogStore};
use logsweep_domain::{config::DatabaseConfig, Backend, DomainError, MutationAck};
use tracing::{error, instrument};

/// Format ClickHouse accepts for a `DateTime` query parameter.
pub const CUTOFF_PARAM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds an authenticated ClickHouse client per cleanup.
pub struct ClickHouseLogConnector {
    cfg: DatabaseConfig,
}

impl ClickHouseLogConnector {
    pub fn new(cfg: &DatabaseConfig) -> Self {
        Self { cfg: cfg.clone() }
    }
}

#[async_trait]
impl ColumnarConnector for ClickHouseLogConnector {
    async fn connect(&self) -> Result<Box<dyn ColumnarLogStore>, DomainError> {
        let connected = async {
            let client = ClickHouseClient::new(&self.cfg)?;
            client.ping().await?;
            Ok::<_, ClickHouseError>(client)
        }
        .await;

        match connected {
            Ok(client) => Ok(Box::new(ClickHouseLogStore::new(client))),
            Err(e) => {
                error!(
                    endpoint = %self.cfg.endpoint(),
                    auth_failure = e.is_auth(),
                    error = %e,
                    "Error connecting to ClickHouse"
                );
                Err(DomainError::connection(Backend::ClickHouse, e.to_string()))
            }
        }
    }
}

pub struct ClickHouseLogStore {
    client: ClickHouseClient,
}

impl ClickHouseLogStore {
    pub fn new(client: ClickHouseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ColumnarLogStore for ClickHouseLogStore {
    #[instrument(skip(self))]
    async fn delete_logs_before(&self, cutoff: DateTime<Utc>) -> Result<MutationAck, DomainError> {
        let sql = format!(
            "ALTER TABLE {} DELETE WHERE created_at < {{cutoff:DateTime('UTC')}}",
            LOG_TABLE
        );
        // `DateTime` starts at the Unix epoch; nothing older can be stored.
        let cutoff = cutoff
            .max(DateTime::<Utc>::UNIX_EPOCH)
            .format(CUTOFF_PARAM_FORMAT)
            .to_string();

        let response = self
            .client
            .execute(&sql, &[("cutoff", cutoff)])
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to submit delete mutation");
                DomainError::query(Backend::ClickHouse, e.to_string())
            })?;

        Ok(MutationAck {
            query_id: response.query_id,
            raw: response.body,
        })
    }
}
