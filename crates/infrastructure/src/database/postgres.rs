use logsweep_domain::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::{debug, error};

pub fn pg_connect_options(cfg: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .database(&cfg.database)
        .username(&cfg.user)
        .password(&cfg.password)
        .application_name("logsweep")
}

/// Opens a single connection; no pool, one attempt.
pub async fn connect_postgres(options: &PgConnectOptions) -> Result<PgConnection, sqlx::Error> {
    match PgConnection::connect_with(options).await {
        Ok(conn) => {
            debug!(
                host = options.get_host(),
                port = options.get_port(),
                "Connected to PostgreSQL"
            );
            Ok(conn)
        }
        Err(e) => {
            error!(error = %e, "Error connecting to PostgreSQL");
            Err(e)
        }
    }
}
