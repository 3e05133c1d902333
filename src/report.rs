//! Serializable snapshot of a game for text and JSON output.

use crate::config::DisplaySettings;
use crate::games::tictactoe::{Coordinates, Game, HistoryError, MoveOutcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Jump control label.
    pub label: String,
    /// Cell of the move, `None` at step 0.
    pub coordinates: Option<Coordinates>,
    /// Whether this is the active step.
    pub active: bool,
}

/// Everything a front end shows about a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Board rows at the active step, e.g. `"XO."`.
    pub rows: Vec<String>,
    /// Status line, e.g. `"Next player: O"`.
    pub status: String,
    /// Player to move, if the game is ongoing.
    pub next_player: Option<Player>,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Board indices of the winning line, empty if none.
    pub winning_cells: Vec<usize>,
    /// Active history step.
    pub active_step: usize,
    /// Jump controls for every history entry.
    pub moves: Vec<MoveListEntry>,
    /// Moves that were ignored while building the game, one line each.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl GameReport {
    /// Builds a report of the game at its active step.
    #[instrument(skip_all, fields(active_step = game.active_step()))]
    pub fn new(game: &Game, display: &DisplaySettings) -> Self {
        let status = game.status();
        let moves = game
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry {
                step,
                label: entry.jump_label(step, *display.show_coordinates()),
                coordinates: entry.coordinates(),
                active: step == game.active_step(),
            })
            .collect();

        Self {
            rows: game.board().rows(),
            status: status.to_string(),
            next_player: (!game.is_over()).then(|| game.current_player()),
            winner: game.winner(),
            winning_cells: status
                .winning_line()
                .map(|line| line.indices().to_vec())
                .unwrap_or_default(),
            active_step: game.active_step(),
            moves,
            warnings: Vec::new(),
        }
    }

    /// Plays `moves` from a fresh game, optionally jumps to `jump`, and
    /// reports the result.
    ///
    /// Ignored moves are numbered from 1 and kept in
    /// [`warnings`](Self::warnings).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `jump` names no entry.
    #[instrument(skip(moves, display), fields(moves = moves.len()))]
    pub fn replay(
        moves: &[Position],
        jump: Option<usize>,
        display: &DisplaySettings,
    ) -> Result<Self, HistoryError> {
        let mut game = Game::new();
        let mut warnings = Vec::new();
        for (move_number, position) in (1..).zip(moves.iter().copied()) {
            if let MoveOutcome::Ignored(reason) = game.play(position) {
                warn!(move_number, %position, %reason, "Move ignored");
                warnings.push(format!("move {} ({}) ignored: {}", move_number, position, reason));
            }
        }

        if let Some(step) = jump {
            game.jump_to(step)?;
        }

        Ok(Self {
            warnings,
            ..Self::new(&game, display)
        })
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for GameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for warning in &self.warnings {
            writeln!(f, "warning: {}", warning)?;
        }
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for entry in &self.moves {
            let marker = if entry.active { ">" } else { " " };
            writeln!(f, "{} {}. {}", marker, entry.step, entry.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_report_of_won_game() {
        let game = Game::replay([0, 4, 1, 5, 2].map(|i| Position::from_index(i).unwrap()));
        let report = GameReport::new(&game, &DisplaySettings::default());
        assert_eq!(report.rows, vec!["XXX", ".OO", "..."]);
        assert_eq!(report.status, "Winner: X");
        assert_eq!(report.winner, Some(Player::X));
        assert_eq!(report.next_player, None);
        assert_eq!(report.winning_cells, vec![0, 1, 2]);
        assert_eq!(report.moves.len(), 6);
        assert_eq!(report.moves[5].label, "Go to move #5 (0, 2)");
        assert!(report.moves[5].active);
    }

    #[test]
    fn test_report_text_marks_active_step() {
        let mut game = Game::replay([Position::Center, Position::TopLeft]);
        game.jump_to(1).unwrap();
        let text = GameReport::new(&game, &DisplaySettings::new(false, true)).to_string();
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> 1. Go to move #1\n"));
        assert!(text.contains("  2. Go to move #2\n"));
    }

    #[test]
    fn test_report_json_fields() {
        let report = GameReport::new(&Game::new(), &DisplaySettings::default());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["status"], "Next player: X");
        assert_eq!(value["next_player"], "X");
        assert_eq!(value["moves"][0]["label"], "Go to game start");
        assert_eq!(value["warnings"], serde_json::json!([]));
    }

    #[test]
    fn test_replay_reports_ignored_moves() {
        let moves = [Position::Center, Position::Center, Position::TopLeft];
        let report = GameReport::replay(&moves, None, &DisplaySettings::default()).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("move 2 (Center) ignored:"));
        assert_eq!(report.rows, vec!["O..", ".X.", "..."]);

        let text = report.to_string();
        assert!(text.starts_with("warning: move 2 (Center) ignored:"));

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        let warnings = value["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].as_str().unwrap().contains("ignored"));
    }

    #[test]
    fn test_replay_ignores_moves_after_win() {
        let moves = [0, 4, 1, 5, 2, 8].map(|i| Position::from_index(i).unwrap());
        let report = GameReport::replay(&moves, None, &DisplaySettings::default()).unwrap();
        assert_eq!(report.winner, Some(Player::X));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("move 6 (Bottom-right) ignored:"));
    }

    #[test]
    fn test_replay_with_jump() {
        let moves = [Position::Center, Position::TopLeft, Position::BottomRight];
        let report = GameReport::replay(&moves, Some(1), &DisplaySettings::default()).unwrap();
        assert!(report.warnings.is_empty());
        assert_eq!(report.active_step, 1);
        assert_eq!(report.next_player, Some(Player::O));
        assert_eq!(report.rows, vec!["...", ".X.", "..."]);
        assert_eq!(report.moves.len(), 4);
        assert!(report.moves[1].active);

        let text = report.to_string();
        assert!(text.contains("> 1. Go to move #1 (1, 1)\n"));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["active_step"], 1);
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        let result = GameReport::replay(&[Position::Center], Some(5), &DisplaySettings::default());
        assert_eq!(result, Err(HistoryError::StepOutOfRange { step: 5, len: 2 }));
    }
}
