//! History entries: one board snapshot per step.

use super::position::{Coordinates, Position};
use super::types::Board;
use serde::{Deserialize, Serialize};

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub(crate) board: Board,
    /// Cell of the move, `None` for the initial entry.
    pub(crate) coordinates: Option<Coordinates>,
}

impl HistoryEntry {
    /// The empty board at step 0.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            coordinates: None,
        }
    }

    /// An entry recording a move at `position` that produced `board`.
    pub fn after_move(board: Board, position: Position) -> Self {
        Self {
            board,
            coordinates: Some(position.coordinates()),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the coordinates of the move, if any.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns the position of the move, if any.
    pub fn position(&self) -> Option<Position> {
        self.coordinates.and_then(Coordinates::position)
    }

    /// Label of the control that jumps to this entry.
    ///
    /// Step 0 reads "Go to game start"; later steps read
    /// "Go to move #n (row, col)".
    pub fn jump_label(&self, step: usize, show_coordinates: bool) -> String {
        match (step, self.coordinates) {
            (0, _) | (_, None) => "Go to game start".to_string(),
            (n, Some(coords)) if show_coordinates => format!("Go to move #{} {}", n, coords),
            (n, Some(_)) => format!("Go to move #{}", n),
        }
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}
