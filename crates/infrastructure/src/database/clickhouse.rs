use logsweep_domain::config::DatabaseConfig;
use reqwest::StatusCode;
use tracing::debug;

const USER_HEADER: &str = "X-ClickHouse-User";
const KEY_HEADER: &str = "X-ClickHouse-Key";
const QUERY_ID_HEADER: &str = "X-ClickHouse-Query-Id";

#[derive(Debug, thiserror::Error)]
pub enum ClickHouseError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned {status}: {message}")]
    Server { status: StatusCode, message: String },
}

impl ClickHouseError {
    /// Authentication and authorization failures.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Server { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        ) || matches!(self, Self::Server { message, .. } if message.contains("Code: 516"))
    }
}

/// Raw result of one statement sent over the HTTP interface.
#[derive(Debug, Clone, Default)]
pub struct QueryResponse {
    pub query_id: Option<String>,
    pub body: String,
}

/// Thin client for the ClickHouse HTTP interface.
///
/// Statements go in the request body; values are bound server-side through
/// `param_<name>` query parameters so they are never spliced into SQL.
#[derive(Clone)]
pub struct ClickHouseClient {
    http: reqwest::Client,
    base_url: String,
    database: String,
    user: String,
    password: String,
}

impl ClickHouseClient {
    pub fn new(cfg: &DatabaseConfig) -> Result<Self, ClickHouseError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClickHouseError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url(&cfg.host, cfg.port),
            database: cfg.database.clone(),
            user: cfg.user.clone(),
            password: cfg.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verifies the server is reachable and accepts the credentials.
    pub async fn ping(&self) -> Result<(), ClickHouseError> {
        self.execute("SELECT 1", &[]).await.map(|_| ())
    }

    pub async fn execute(
        &self,
        sql: &str,
        params: &[(&str, String)],
    ) -> Result<QueryResponse, ClickHouseError> {
        let mut query: Vec<(String, &str)> = Vec::with_capacity(params.len() + 1);
        query.push(("database".to_string(), self.database.as_str()));
        for (name, value) in params {
            query.push((format!("param_{}", name), value.as_str()));
        }

        let response = self
            .http
            .post(format!("{}/", self.base_url))
            .query(&query)
            .header(USER_HEADER, &self.user)
            .header(KEY_HEADER, &self.password)
            .body(sql.to_string())
            .send()
            .await
            .map_err(|e| ClickHouseError::Transport(e.to_string()))?;

        let status = response.status();
        let query_id = response
            .headers()
            .get(QUERY_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| ClickHouseError::Transport(e.to_string()))?;

        if !status.is_success() {
            debug!(status = %status, query_id = ?query_id, "ClickHouse rejected statement");
            return Err(ClickHouseError::Server {
                status,
                message: body.trim().to_string(),
            });
        }

        debug!(query_id = ?query_id, bytes = body.len(), "ClickHouse statement completed");
        Ok(QueryResponse { query_id, body })
    }
}

fn base_url(host: &str, port: u16) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{}:{}", host, port)
    } else {
        format!("http://{}:{}", host, port)
    }
}
