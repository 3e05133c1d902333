//! Game engine: history of board snapshots with time travel.
//!
//! A [`Game`] owns an append-only list of [`HistoryEntry`] values and an
//! active step. Moves branch from the active step, discarding any entries
//! after it; jumps only move the active step.

use super::action::{HistoryError, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::history::HistoryEntry;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use super::status::GameStatus;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with move history.
///
/// Deserialization rejects any history that breaks [`GameInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) active_step: usize,
}

/// Unchecked wire form of a [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    history: Vec<HistoryEntry>,
    active_step: usize,
}

impl TryFrom<GameRecord> for Game {
    type Error = InvariantViolation;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            active_step: record.active_step,
        };
        GameInvariants::check_all(&game)
            .map_err(|violations| InvariantViolation::combine(&violations))?;
        Ok(game)
    }
}

impl Game {
    /// Creates a new game: one empty entry, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            active_step: 0,
        }
    }

    /// Plays the given positions in order, skipping ignored moves.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut game = Self::new();
        for position in positions {
            game.play(position);
        }
        game
    }

    /// Returns every recorded entry, including those after the active step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the entry being viewed.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Returns the entry at the active step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.active_step]
    }

    /// Returns the board at the active step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move at the active step: X on even steps, O on odd.
    pub fn current_player(&self) -> Player {
        Player::for_step(self.active_step)
    }

    /// Status of the board at the active step.
    pub fn status(&self) -> GameStatus {
        GameStatus::of_board(self.board(), self.current_player())
    }

    /// Returns the winner at the active step, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status().outcome().and_then(|outcome| outcome.winner())
    }

    /// Returns true if the board at the active step is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Places the current player's mark at `position`.
    ///
    /// Ignored (no state change) when the active board is already won or
    /// drawn, or the square is occupied. Otherwise history after the active
    /// step is discarded, the new snapshot is appended, and it becomes the
    /// active step.
    #[instrument(skip(self), fields(active_step = self.active_step))]
    pub fn play(&mut self, position: Position) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "Ignoring move");
            return MoveOutcome::Ignored(reason);
        }

        let before = cfg!(debug_assertions).then(|| self.clone());

        let player = self.current_player();
        let mut board = self.board().clone();
        board.set(position, Square::Occupied(player));

        let discarded = self.history.len() - (self.active_step + 1);
        self.history.truncate(self.active_step + 1);
        self.history.push(HistoryEntry::after_move(board, position));
        self.active_step = self.history.len() - 1;

        if let Some(before) = &before {
            let post = MoveContract::post(before, self);
            debug_assert!(post.is_ok(), "move postcondition failed: {:?}", post);
        }

        info!(
            %player,
            %position,
            step = self.active_step,
            discarded,
            status = %self.status(),
            "Move applied"
        );

        MoveOutcome::Applied {
            step: self.active_step,
            player,
            position,
        }
    }

    /// Makes `step` the active step without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no entry exists at `step`.
    #[instrument(skip(self), fields(from = self.active_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.active_step = step;
        debug!(next = %self.current_player(), "Jumped to step");
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self), fields(entries = self.history.len()))]
    pub fn reset(&mut self) {
        self.history = vec![HistoryEntry::initial()];
        self.active_step = 0;
        info!("Game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
