use clap::Parser;

use uniclip_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use uniclip_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    init_tracing_subscriber()?;

    let config = bootstrap::resolve_config(&cli)?;
    bootstrap::run_app(config).await
}
