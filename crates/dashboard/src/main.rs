//! IPL Season Dashboard - Main Entry Point

use anyhow::Context;
use dashboard::{init_logging, run_server, DashboardConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load().context("Failed to load configuration")?;
    init_logging(&config.log_level)?;

    info!("=== IPL Season Dashboard v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Matches: {}, deliveries: {}",
        config.matches_path.display(),
        config.deliveries_path.display()
    );

    run_server(config).await
}
