//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use time_travel_tictactoe::{DisplaySettings, Game, GameReport, MoveOutcome, Position};
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys select a history entry.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    display: DisplaySettings,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(display: DisplaySettings) -> Self {
        Self {
            game: Game::new(),
            display,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "X moves first.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the display settings.
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the last feedback message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot of the game for rendering.
    pub fn report(&self) -> GameReport {
        GameReport::new(&self.game, &self.display)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match (self.focus, key) {
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => {
                debug!("User quit");
                self.should_quit = true;
            }
            (_, KeyCode::Char('r')) => self.reset(),
            (_, KeyCode::Tab) => self.toggle_focus(),
            (Focus::Board, KeyCode::Enter) | (Focus::Board, KeyCode::Char(' ')) => {
                self.play(self.cursor)
            }
            (Focus::History, KeyCode::Enter) | (Focus::History, KeyCode::Char(' ')) => {
                self.jump(self.selected)
            }
            (_, KeyCode::Char(c)) => {
                if let Some(position) = digit_position(c) {
                    self.play(position);
                }
            }
            (Focus::Board, arrow) => self.cursor = move_cursor(self.cursor, arrow),
            (Focus::History, KeyCode::Up) => self.selected = self.selected.saturating_sub(1),
            (Focus::History, KeyCode::Down) => {
                self.selected = (self.selected + 1).min(self.game.history().len() - 1)
            }
            (Focus::History, _) => {}
        }
    }

    /// Plays the current player's mark at `position`.
    pub fn play(&mut self, position: Position) {
        self.message = match self.game.play(position) {
            MoveOutcome::Applied { player, position, .. } => {
                format!("{} played {}.", player, position)
            }
            MoveOutcome::Ignored(reason) => reason.to_string(),
        };
        self.selected = self.game.active_step();
    }

    /// Jumps to a history step.
    pub fn jump(&mut self, step: usize) {
        self.message = match self.game.jump_to(step) {
            Ok(()) if step == 0 => "Back to game start.".to_string(),
            Ok(()) => format!("Viewing move #{}.", step),
            Err(e) => e.to_string(),
        };
        self.selected = self.game.active_step();
    }

    /// Starts a new game.
    pub fn reset(&mut self) {
        self.game.reset();
        self.selected = 0;
        self.focus = Focus::Board;
        self.message = "Game reset. X moves first.".to_string();
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.game.active_step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }
}
