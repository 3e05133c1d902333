//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. A failed precondition turns a move into a no-op; a
//! failed postcondition is a bug in the engine.

use super::action::IgnoreReason;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{Game, Position};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Why a precondition can reject the action.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// Precondition: the board at the active step is neither won nor drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a finished board.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), IgnoreReason> {
        match game.status().outcome() {
            Some(outcome) => Err(IgnoreReason::GameOver(outcome)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), IgnoreReason> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(position))
        }
    }
}

/// Contract for placing the current player's mark.
///
/// Preconditions:
/// - Game at the active step is not over
/// - Square must be empty
///
/// Postconditions:
/// - History branches from the previous active step and the new entry is active
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    type Rejection = IgnoreReason;

    fn pre(game: &Game, position: &Position) -> Result<(), IgnoreReason> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(*position, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), InvariantViolation> {
        let expected_len = before.active_step() + 2;
        if after.history().len() != expected_len || after.active_step() != expected_len - 1 {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                active_step = after.active_step(),
                "Move did not branch from the active step"
            );
            return Err(InvariantViolation::new(
                "Move appends exactly one entry after the active step and activates it",
            ));
        }

        if before.history()[..=before.active_step()] != after.history()[..=before.active_step()] {
            return Err(InvariantViolation::new("Move keeps history up to the active step"));
        }

        GameInvariants::check_all(after)
            .map_err(|violations| InvariantViolation::combine(&violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Outcome, Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = Game::replay([Position::Center]);
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(IgnoreReason::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let game = Game::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ]);
        assert_eq!(
            MoveContract::pre(&game, &Position::BottomLeft),
            Err(IgnoreReason::GameOver(Outcome::Winner(Player::X)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.play(Position::Center);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        after.play(Position::Center);
        after.history[1].board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_truncation() {
        let mut before = Game::replay([Position::Center, Position::TopLeft]);
        before.jump_to(0).unwrap();
        // History kept both old entries instead of branching from step 0.
        let after = Game::replay([Position::Center, Position::TopLeft]);
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
