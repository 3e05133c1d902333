//! Game status derived from the board at the active step.

use super::rules::{WinningLine, detect_win, is_full};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Where the game stands at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; `next` moves.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full with no winner.
    Draw,
}

impl GameStatus {
    /// Classifies a board, with `next` as the player to move if play continues.
    pub fn of_board(board: &Board, next: Player) -> Self {
        if let Some(win) = detect_win(board) {
            GameStatus::Won {
                winner: win.winner,
                line: win.line,
            }
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// The terminal outcome, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress { .. } => None,
            GameStatus::Won { winner, .. } => Some(Outcome::Winner(*winner)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
