mod config;
mod error;
mod github;
mod inputs;
mod runner;

use anyhow::Result;
use config::ReporterConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ReporterConfig::from_env()?;
    tracing_subscriber::fmt::init();
    info!("Starting the benchmark report generation...");
    runner::run(config).await?;
    info!("Finished the benchmark report generation.");
    Ok(())
}
