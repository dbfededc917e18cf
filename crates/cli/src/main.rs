use clap::Parser;
use crate::cli::{Cli, Command};
use tracing::info;

mod bootstrap;
mod cli;
mod commands;
mod di;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let common = cli.command.common();
    let config = bootstrap::load_config(common.config.as_deref(), cli.command.cli_overrides())?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting Querylens v{}", env!("CARGO_PKG_VERSION"));

    let log_path = bootstrap::log_path(&config)?;
    if let Some(source) = &config.source_path {
        println!("\nUsing config : {}", source.display());
    }
    println!(
        "Reading log  : {}  (this may take a moment for large files)\u{2026}",
        log_path.display()
    );

    // Dependency Injection - Build all dependencies
    let use_cases = di::UseCases::new(&config, &log_path)?;

    match &cli.command {
        Command::Activity(args) => commands::run_activity(args, &config, &use_cases).await?,
        Command::TopDomains(args) => commands::run_top_domains(args, &config, &use_cases).await?,
    }

    Ok(())
}
