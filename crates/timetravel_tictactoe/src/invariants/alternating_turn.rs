//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the mark placed at step `k` belongs to the player whose
/// turn it was after `k - 1` moves, never the one to move after `k`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        (1..history.len()).all(|step| match history.move_at(step) {
            // Step k is played by the opponent of whoever moves after it.
            Some(mov) => mov.player == Player::for_step(step).opponent(),
            // Shape problems belong to the monotonic invariant.
            None => true,
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
