use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::KeywordStatsUseCase;
use crate::domain::error::Result;
use crate::infrastructure::config::ConfigService;
use crate::interfaces::http::{start_server, HttpState};

/// Load configuration, install logging and serve until shutdown.
pub async fn run() -> Result<()> {
    let config = ConfigService::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    info!(
        host = %config.server.host,
        port = config.server.port,
        top_k = config.analysis.top_k,
        max_features = config.analysis.max_features,
        strict_columns = config.analysis.require_column_in_every_row,
        "Starting keyword statistics API"
    );

    let state = HttpState::new(KeywordStatsUseCase::new(config.analysis.clone()));
    start_server(&config.server, state)?.await?;

    info!("Keyword statistics API stopped");
    Ok(())
}
