//! Tests for move contracts and game invariants through the public API.

use time_travel_tictactoe::{
    Contract, Game, GameInvariants, IgnoreReason, InvariantSet, MoveContract, Outcome, Player,
    Position,
};

#[test]
fn test_precondition_accepts_empty_square() {
    assert!(MoveContract::pre(&Game::new(), &Position::Center).is_ok());
}

#[test]
fn test_precondition_rejects_occupied_square() {
    let game = Game::replay([Position::Center]);
    assert_eq!(
        MoveContract::pre(&game, &Position::Center),
        Err(IgnoreReason::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_precondition_rejects_drawn_board() {
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
    assert_eq!(
        MoveContract::pre(&game, &Position::Center),
        Err(IgnoreReason::GameOver(Outcome::Draw))
    );
}

#[test]
fn test_postcondition_holds_across_a_session() {
    let mut game = Game::new();
    let script: [(Option<usize>, Position); 6] = [
        (None, Position::Center),
        (None, Position::TopLeft),
        (None, Position::BottomRight),
        (Some(1), Position::TopRight),
        (None, Position::BottomLeft),
        (Some(0), Position::TopLeft),
    ];

    for (jump, position) in script {
        if let Some(step) = jump {
            game.jump_to(step).unwrap();
        }
        let before = game.clone();
        assert!(game.play(position).is_applied());
        assert!(MoveContract::post(&before, &game).is_ok());
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_player(), Player::O);
}
