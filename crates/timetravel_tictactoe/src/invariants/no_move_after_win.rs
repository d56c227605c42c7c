//! Terminal invariant: nothing is played after a line is completed.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: only the last snapshot of a branch may hold a winner.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let boards = game.history().boards();
        boards
            .iter()
            .take(boards.len().saturating_sub(1))
            .all(|board| rules::check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}
