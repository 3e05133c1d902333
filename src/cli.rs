//! Command-line interface for time_travel_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use time_travel_tictactoe::{DEFAULT_CONFIG_FILE, Position};

/// Tic-tac-toe with move-history time travel
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Tic-tac-toe with move-history time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal UI
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Comma-separated cells: indices 0-8 or labels such as "center"
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<Position>,

        /// History step to jump to after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The report as JSON
    Json,
}
