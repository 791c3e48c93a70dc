// ABOUTME: Entry point for the rollout CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use rollout::config::{self, Config};
use rollout::error::Result;
use rollout::output::{Output, OutputMode};
use rollout::types::ServiceName;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mut output = Output::new(OutputMode::from_flags(cli.quiet, cli.json));

    if let Err(e) = run(cli, &mut output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<()> {
    match cli.command {
        Commands::Init { endpoint, force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, endpoint.as_deref(), force)
        }
        Commands::Deploy { service } => {
            let service = ServiceName::new(&service)?;
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            commands::deploy(&config, service, output).await
        }
        Commands::Status { service } => {
            let service = ServiceName::new(&service)?;
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            commands::status(&config, service, output).await
        }
    }
}
