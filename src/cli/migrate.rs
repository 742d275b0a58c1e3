//! Migrate command - applies pending database migrations

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{self, PostgresConfig};

/// Apply all pending migrations and exit
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections)
        .with_min_connections(config.database.min_connections)
        .with_connect_timeout(config.database.connect_timeout_secs)
        .with_idle_timeout(config.database.idle_timeout_secs);

    let pool = storage::connect(&pg_config).await?;
    storage::run_migrations(&pool).await?;

    info!("Migrations applied");
    Ok(())
}
