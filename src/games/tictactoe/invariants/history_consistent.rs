//! History consistency invariant: each entry is its predecessor plus one move.

use super::super::rules::check_winner;
use super::super::{Game, HistoryEntry, Player, Square};
use super::Invariant;

/// Invariant: every entry after the first adds exactly one mark.
///
/// The added mark sits at the entry's recorded coordinates, belongs to X on
/// odd steps and O on even steps, and is never played on a board that
/// already has a winner.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    fn step_holds(step: usize, prev: &HistoryEntry, entry: &HistoryEntry) -> bool {
        if check_winner(prev.board()).is_some() {
            return false;
        }

        let Some(position) = entry.position() else {
            return false;
        };

        // Mover at step n is the player to move at step n - 1.
        let mover = Player::for_step(step - 1);
        prev.board().diff(entry.board()) == [position]
            && prev.board().get(position) == Square::Empty
            && entry.board().get(position) == Square::Occupied(mover)
    }
}

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| Self::step_holds(i + 1, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history entry adds one alternating mark at its recorded cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_full_drawn_game_holds() {
        // X O X / X O O / O X X
        let game = Game::replay([
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert_eq!(game.history().len(), 10);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = Game::replay([Position::Center]);
        game.history[1].board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_coordinates_violate() {
        let mut game = Game::replay([Position::Center]);
        game.history[1].coordinates = Some(Position::TopLeft.coordinates());
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut game = Game::replay([Position::Center]);
        game.history[1].board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = Game::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ]);
        let mut board = game.board().clone();
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        game.history
            .push(HistoryEntry::after_move(board, Position::BottomLeft));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
