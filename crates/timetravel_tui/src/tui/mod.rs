//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
pub mod ui;

pub use app::{App, Flow, Focus};

use crate::config::TuiConfig;
use crate::logging::init_file_logging;
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

/// Runs the interactive game until the player quits.
#[instrument(skip_all, fields(log_file = %config.log_file().display()))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    init_file_logging(config.log_file(), config.log_filter())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    info!("Starting time-travel tic-tac-toe TUI");

    let mut terminal = ratatui::init();
    let res = run_app(&mut terminal, App::new(config));
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, wait for a key, repeat.
fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) == Flow::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
