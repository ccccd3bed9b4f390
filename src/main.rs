//! redis-facade - run single Redis commands through the facade

use clap::Parser;
use redis_facade::cli::{self, Cli};
use redis_facade::utils::logging::init_logging;
use redis_facade::{RedisService, Result};
use std::process::ExitCode;
use tracing::info;

async fn execute(cli: Cli) -> Result<String> {
    let config = cli.load_config().await?;
    init_logging(&config.logging)?;

    info!("Starting redis-facade {}", redis_facade::VERSION);
    match &cli.config {
        Some(path) => info!("Configuration loaded from {:?}", path),
        None => info!("Configuration loaded from environment"),
    }
    let service = RedisService::connect(&config.redis).await?;
    let output = cli::run(&service, &cli.command).await;
    service.pool().close().await?;
    output
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match execute(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
