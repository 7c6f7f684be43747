//! CLI definitions for JobHands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// JobHands CLI.
#[derive(Parser)]
#[command(name = "jobhands")]
#[command(about = "Group/name addressed job management over a scheduling engine")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = jobhands_config::DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the API server in foreground (default)
    Run {
        /// Server host (overrides `server.host`)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides `server.port`)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then exit
    CheckConfig,
}
