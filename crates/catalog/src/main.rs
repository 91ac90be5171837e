use anyhow::{Context, Result};
use catalog::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{config::ConnectionManager, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("catalog", config.is_dev, config.enable_file_log);

    info!("🚀 Starting catalog service initialization...");

    let pool = ConnectionManager::new_pool(&config.database)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(pool, &config);

    AppRouter::serve(config.http_port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Catalog service shutdown complete.");

    Ok(())
}
