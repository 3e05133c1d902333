//! Results of player actions on a game.
//!
//! Illegal moves are not errors: they leave the game untouched and come
//! back as [`MoveOutcome::Ignored`] with the reason attached.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// What happened when a move was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new history entry.
    Applied {
        /// Step of the new entry.
        step: usize,
        /// Player who moved.
        player: Player,
        /// Cell that was filled.
        position: Position,
    },
    /// The move was a no-op.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the active step is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

/// Error navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}
