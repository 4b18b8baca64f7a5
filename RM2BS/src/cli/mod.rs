//! RM2BS CLI - Command-line interface for RaceMenu → BodySlide preset conversion

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rm2bs")]
#[command(version, about = "RM2BS: convert RaceMenu presets to BodySlide slider presets", long_about = None)]
struct Cli {
    /// Defaults to `batch` in the current directory
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Run the RM2BS CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    cli.command.unwrap_or_default().execute()?;

    Ok(())
}
