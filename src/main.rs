//! Time-travel tic-tac-toe - command-line entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use time_travel_tictactoe::{GameReport, Position, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Play => {
            init_file_logging(&settings)?;
            tui::run_tui(&settings)
        }
        Command::Replay { moves, jump, format } => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&settings))
                .with_writer(std::io::stderr)
                .init();
            run_replay(&settings, moves, jump, format)
        }
    }
}

/// Builds the log filter from `RUST_LOG`, or the configured directive.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log().filter()))
}

/// Logs to the configured file so output does not interfere with the TUI.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let path = settings.log().file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Apply moves, optionally jump, and print the report.
#[instrument(skip(settings, moves), fields(moves = moves.len()))]
fn run_replay(
    settings: &Settings,
    moves: Vec<Position>,
    jump: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    info!("Replaying moves");

    let report = GameReport::replay(&moves, jump, settings.display())
        .context("Invalid --jump step")?;
    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => {
            println!("{}", report.to_json().context("Failed to serialize report")?);
        }
    }

    Ok(())
}
