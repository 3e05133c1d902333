//! Initial entry invariant: step 0 is the empty board.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: `history[0]` exists, holds the empty board and records no move.
pub struct InitialEntryInvariant;

impl Invariant<Game> for InitialEntryInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .first()
            .is_some_and(|entry| *entry.board() == Board::new() && entry.coordinates().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(InitialEntryInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_reset_restores() {
        let mut game = Game::replay([Position::Center, Position::TopLeft]);
        game.reset();
        assert!(InitialEntryInvariant::holds(&game));
    }

    #[test]
    fn test_marked_initial_board_violates() {
        let mut game = Game::new();
        game.history[0].board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!InitialEntryInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = Game::new();
        game.history.clear();
        assert!(!InitialEntryInvariant::holds(&game));
    }
}
