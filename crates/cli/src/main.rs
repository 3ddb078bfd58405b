use clap::{Parser, Subcommand};
use logsweep_application::use_cases::InvocationContext;
use logsweep_domain::config::{LogFormat, LoggingConfig};
use logsweep_domain::CliOverrides;
use logsweep_jobs::RetentionSweepJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "logsweep")]
#[command(version)]
#[command(about = "Logsweep - Deletes expired log rows from PostgreSQL and ClickHouse")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Retention window in days (overrides LOG_RETENTION_DAYS)
    #[arg(long)]
    retention_days: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one sweep and print the invocation response as JSON (default)
    Run {
        /// Event payload passed to the handler; accepted but unused
        #[arg(long, value_name = "JSON")]
        event: Option<String>,

        /// Request id attached to the invocation's log span
        #[arg(long)]
        request_id: Option<String>,
    },

    /// Sweep on a fixed interval until interrupted
    Schedule {
        /// Seconds between sweeps
        #[arg(long, default_value_t = 86400)]
        interval_secs: u64,
    },
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        retention_days: cli.retention_days,
        log_level: cli.log_level.clone(),
        log_format: cli.log_format,
    };

    let config = match bootstrap::load_config(cli.config.as_deref(), cli_overrides) {
        Ok(config) => config,
        Err(e) => {
            bootstrap::init_logging(&LoggingConfig::default());
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    bootstrap::init_logging(&config.logging);
    info!("Starting Logsweep v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config(&config);

    let use_cases = di::UseCases::new(&config);

    let command = cli.command.unwrap_or(Command::Run {
        event: None,
        request_id: None,
    });

    match command {
        Command::Run { event, request_id } => {
            let event = match event {
                Some(raw) => serde_json::from_str(&raw)?,
                None => serde_json::json!({}),
            };
            let context = InvocationContext { request_id };

            let response = use_cases
                .handle_invocation
                .execute(&event, &context)
                .await?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Schedule { interval_secs } => {
            let shutdown = CancellationToken::new();
            let job = Arc::new(
                RetentionSweepJob::new(use_cases.handle_invocation.clone())
                    .with_interval(interval_secs)
                    .with_cancellation(shutdown.clone()),
            );
            let handle = job.start().await;

            tokio::signal::ctrl_c().await?;
            info!("Shutdown signal received");
            shutdown.cancel();
            handle.await?;
        }
    }

    info!("Logsweep finished");
    Ok(())
}
