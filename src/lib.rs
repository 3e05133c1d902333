//! Time-travel tic-tac-toe.
//!
//! A tic-tac-toe engine that keeps every board snapshot, so play can jump
//! back to any earlier step and branch from there.
//!
//! # Architecture
//!
//! - **Games**: the engine ([`Game`]), pure rule checks, invariants and
//!   move contracts
//! - **Report**: serializable snapshot of a game for text and JSON output
//! - **Config**: TOML settings for display and logging
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{Game, GameStatus, Player, Position, WinningLine};
//!
//! let mut game = Game::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.play(Position::from_index(cell).unwrap());
//! }
//! assert_eq!(
//!     game.status(),
//!     GameStatus::Won { winner: Player::X, line: WinningLine::TopRow }
//! );
//!
//! // Go back two moves and branch.
//! game.jump_to(3).unwrap();
//! game.play(Position::BottomRight);
//! assert_eq!(game.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, DisplaySettings, LogSettings, Settings};

// Crate-level exports - Reporting
pub use report::{GameReport, MoveListEntry};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Coordinates, Game, GameStatus, HistoryEntry, HistoryError, IgnoreReason, MoveOutcome,
    Outcome, ParsePositionError, Player, Position, Square, Win, WinningLine,
};

// Crate-level exports - Invariants and contracts
pub use games::tictactoe::{
    ActiveStepInvariant, Contract, GameInvariants, HistoryConsistentInvariant,
    InitialEntryInvariant, Invariant, InvariantSet, InvariantViolation, MoveContract,
};
