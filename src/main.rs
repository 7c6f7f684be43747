//! JobHands - group/name addressed job management service.
//!
//! Main entry point for the JobHands CLI and server.

mod cli;
mod server;

use std::path::Path;

use clap::Parser;
use tracing::info;

use jobhands_config::{Config, ConfigLoader};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ConfigLoader::load_or_default(&cli.config)?;

    match cli.command {
        Some(Commands::CheckConfig) => {
            let warnings = server::validate(&config)?;
            for warning in &warnings {
                println!("warning: {}: {}", warning.path, warning.message);
            }
            println!("Configuration OK: {}", cli.config.display());
            Ok(())
        }
        Some(Commands::Run { host, port }) => run(&cli.config, config, host, port).await,
        None => run(&cli.config, config, None, None).await,
    }
}

/// Apply CLI overrides, start logging and serve.
async fn run(
    config_path: &Path,
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    server::apply_overrides(&mut config, host, port);
    server::init_tracing(&config.logging)?;
    info!("Loaded configuration from {}", config_path.display());
    server::run_server(config).await
}
