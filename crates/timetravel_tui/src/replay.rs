//! Headless replay of a move list.

use derive_more::{Display, Error, From};
use timetravel_tictactoe::{GameState, History, Position};
use tracing::{debug, instrument, warn};

/// Output format for `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReplayFormat {
    /// Board, status and move list as plain text.
    Text,
    /// The full game state as JSON.
    Json,
}

/// Errors from parsing or rendering a replay.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A token in the move list is not a cell index or label.
    #[display("Invalid move '{}' (expected 0-8 or a cell label)", _0)]
    #[from(skip)]
    InvalidMove(#[error(not(source))] String),

    /// Serializing the game state failed.
    #[display("Failed to serialize game state: {}", _0)]
    Json(#[error(source)] serde_json::Error),
}

/// Parses a comma-separated list of positions.
///
/// Accepts indices (`0`-`8`) and labels (`center`). Blank input is an
/// empty list.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ReplayError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| ReplayError::InvalidMove(token.to_string()))
        })
        .collect()
}

/// Plays `moves` from a new game, then optionally views step `jump`.
///
/// Illegal moves and out-of-range jumps are skipped, as in the
/// interactive game.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>) -> GameState {
    let mut game = GameState::new();
    for &position in moves {
        match game.try_apply_move(position) {
            Ok(next) => game = next,
            Err(err) => warn!(%err, ?position, "Skipping move"),
        }
    }
    if let Some(step) = jump {
        match game.try_jump_to(step) {
            Ok(next) => game = next,
            Err(err) => warn!(%err, "Skipping jump"),
        }
    }
    debug!(step = game.current_step(), "Replay finished");
    game
}

/// Renders a game in the requested format.
pub fn render(game: &GameState, format: ReplayFormat) -> Result<String, ReplayError> {
    match format {
        ReplayFormat::Json => Ok(serde_json::to_string_pretty(game)?),
        ReplayFormat::Text => Ok(render_text(game)),
    }
}

fn render_text(game: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&game.current_board().display());
    out.push_str("\n\n");
    out.push_str(&game.status_line());
    out.push('\n');

    let history = game.history();
    for step in 0..history.len() {
        let marker = if step == game.current_step() { '>' } else { ' ' };
        out.push_str(&format!("{} {}", marker, History::describe(step)));
        if let Some(mov) = history.move_at(step) {
            out.push_str(&format!(" ({})", mov));
        }
        out.push('\n');
    }
    out
}
