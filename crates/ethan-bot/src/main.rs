//! ETHAN MODE bot - Main entry point.

use ethan_bot::{launch, Config};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Reads .env first, so LOG_LEVEL may come from there too
    let config = Config::load();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(&level);

    info!("Starting ETHAN MODE bot...");
    if let Err(e) = launch(config).await {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
