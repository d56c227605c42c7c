//! Application state and key handling.

use super::input::{move_cursor, move_selection};
use crate::config::TuiConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};
use timetravel_tictactoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// Which panel receives the arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move history list.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Whether the event loop keeps running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the single `GameState` and replaces it after every move or jump.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    status_message: String,
    show_hints: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: *config.start_focus(),
            selected_step: 0,
            status_message: "Player X's turn.".to_string(),
            show_hints: *config.show_hints(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether empty cells show their number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.current_step();
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('u') => self.step_back(),
            KeyCode::Char('n') => self.step_forward(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(position) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = position;
                    self.play(position);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.selected_step),
            },
            code => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::History => {
                    self.selected_step =
                        move_selection(self.selected_step, self.game.history().len(), code)
                }
            },
        }
        Flow::Continue
    }

    /// Plays the next player's mark at `position`.
    ///
    /// Rejected moves leave the game unchanged and show the reason.
    pub fn play(&mut self, position: Position) {
        let player = self.game.next_player();
        match self.game.try_apply_move(position) {
            Ok(next) => {
                debug!(%player, ?position, "Move applied to UI state");
                self.game = next;
                self.selected_step = self.game.current_step();
                self.status_message = format!("{} played {}", player, position.label());
            }
            Err(e) => {
                debug!(%e, "Move rejected");
                self.status_message = format!("Move error: {}", e);
            }
        }
    }

    /// Views the board after `step` moves.
    pub fn jump(&mut self, step: usize) {
        match self.game.try_jump_to(step) {
            Ok(next) => {
                self.game = next;
                self.selected_step = step;
                self.status_message = if step == 0 {
                    "Viewing game start.".to_string()
                } else {
                    format!("Viewing move #{}.", step)
                };
            }
            Err(e) => {
                self.status_message = format!("Jump error: {}", e);
            }
        }
    }

    /// Views the previous step, if any.
    pub fn step_back(&mut self) {
        if let Some(step) = self.game.current_step().checked_sub(1) {
            self.jump(step);
        }
    }

    /// Views the next step on the current branch, if any.
    pub fn step_forward(&mut self) {
        let step = self.game.current_step() + 1;
        if step < self.game.history().len() {
            self.jump(step);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.selected_step = 0;
        self.status_message = "Game restarted. Player X's turn.".to_string();
    }
}
