use logsweep_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    Ok(config)
}

pub fn log_config(config: &Config) {
    info!(
        postgres = %config.postgres.endpoint(),
        clickhouse = %config.clickhouse.endpoint(),
        retention_days = config.retention.days,
        "Configuration loaded"
    );
}
