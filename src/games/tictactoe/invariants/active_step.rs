//! Active step invariant: the active step indexes an existing entry.

use super::super::Game;
use super::Invariant;

/// Invariant: `active_step` lies in `[0, history.len() - 1]`.
pub struct ActiveStepInvariant;

impl Invariant<Game> for ActiveStepInvariant {
    fn holds(game: &Game) -> bool {
        game.active_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Active step points at an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_holds_after_jumps() {
        let mut game = Game::replay([Position::Center, Position::TopLeft, Position::BottomRight]);
        for step in [0, 3, 1, 2] {
            game.jump_to(step).unwrap();
            assert!(ActiveStepInvariant::holds(&game));
        }
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut game = Game::new();
        game.active_step = 1;
        assert!(!ActiveStepInvariant::holds(&game));
    }
}
