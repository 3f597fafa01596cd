//! Pkgsnap - Installed Package Snapshots
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use pkgsnap::cli::{Cli, Commands};
use pkgsnap::config::ConfigManager;
use pkgsnap::error::PkgsnapResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PkgsnapResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn (status lines only), 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("pkgsnap=warn"),
        1 => EnvFilter::new("pkgsnap=info"),
        _ => EnvFilter::new("pkgsnap=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let config = config_manager.load().await?;

    match cli.command {
        Commands::Export(args) => pkgsnap::cli::commands::export(args, &config).await,
        Commands::Status => pkgsnap::cli::commands::status(&config).await,
        Commands::Cache(args) => pkgsnap::cli::commands::cache(args, &config).await,
        Commands::Config(args) => {
            pkgsnap::cli::commands::config(args, &config_manager, &config).await
        }
    }
}
