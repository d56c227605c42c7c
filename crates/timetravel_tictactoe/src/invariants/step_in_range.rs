//! Step invariant: the viewed step exists and step 0 is the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: `current_step` indexes into history, which starts empty.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        game.current_step() < history.len() && history.get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "Current step is a valid history index and step 0 is the empty board"
    }
}
