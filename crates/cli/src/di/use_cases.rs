use logsweep_application::use_cases::{
    CleanColumnarLogsUseCase, CleanRelationalLogsUseCase, HandleInvocationUseCase,
    RunLogRetentionUseCase,
};
use logsweep_domain::Config;
use logsweep_infrastructure::repositories::{ClickHouseLogConnector, PgLogConnector};
use std::sync::Arc;

pub struct UseCases {
    pub handle_invocation: Arc<HandleInvocationUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let postgres = Arc::new(PgLogConnector::new(&config.postgres));
        let clickhouse = Arc::new(ClickHouseLogConnector::new(&config.clickhouse));

        let run = Arc::new(RunLogRetentionUseCase::new(
            Arc::new(CleanRelationalLogsUseCase::new(postgres)),
            Arc::new(CleanColumnarLogsUseCase::new(clickhouse)),
        ));

        Self {
            handle_invocation: Arc::new(HandleInvocationUseCase::new(
                run,
                config.retention_policy(),
            )),
        }
    }
}
