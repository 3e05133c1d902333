//! Tic-tac-toe with move-history time travel.

mod action;
mod contracts;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{HistoryError, IgnoreReason, MoveOutcome};
pub use contracts::{Contract, GameNotOver, MoveContract, SquareIsEmpty};
pub use game::Game;
pub use history::HistoryEntry;
pub use invariants::{
    ActiveStepInvariant, GameInvariants, HistoryConsistentInvariant, InitialEntryInvariant,
    Invariant, InvariantSet, InvariantViolation,
};
pub use position::{Coordinates, ParsePositionError, Position};
pub use rules::{Win, WinningLine};
pub use status::{GameStatus, Outcome};
pub use types::{Board, Player, Square};
