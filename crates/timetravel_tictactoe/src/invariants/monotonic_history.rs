//! Monotonic history invariant: marks are never overwritten.

use super::super::GameState;
use super::Invariant;

/// Invariant: each snapshot adds exactly one mark to an empty square.
///
/// Once a square is occupied on a branch, every later snapshot on that
/// branch keeps it unchanged.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        (1..history.len()).all(|step| history.move_at(step).is_some())
    }

    fn description() -> &'static str {
        "History is monotonic (each step places one mark, none overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::BottomRight);
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::new()
            .apply_move(Position::Center)
            .apply_move(Position::TopLeft);
        // Step 2 now also flips X's center to O.
        game.history.boards[2].set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut game = GameState::new().apply_move(Position::Center);
        game.history.boards[1].set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
