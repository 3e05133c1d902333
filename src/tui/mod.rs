//! Terminal UI for interactive play.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use time_travel_tictactoe::Settings;
use tracing::{error, info};

use app::App;

/// Run the TUI until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    install_panic_hook(restore_terminal);
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.display());
    let res = run_app(&mut terminal, &mut app);

    restore_terminal()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    info!(steps = app.game().history().len(), "Terminal UI closed");
    res
}

/// Draw, read one key, apply it; repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Leave raw mode and the alternate screen.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Chain a panic hook that runs `restore` before the existing hook prints.
fn install_panic_hook(restore: fn() -> io::Result<()>) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(err) = restore() {
            error!(error = %err, "Failed to restore terminal after panic");
        }
        previous(info);
    }));
}
