//! Game state with move history and time travel.
//!
//! `GameState` is a value: every operation returns a new state and leaves
//! the receiver untouched, so a host can keep, compare or discard
//! snapshots freely.

use super::action::{Move, MoveError};
use super::history::History;
use super::invariants::{self, GameInvariants, InvariantSet};
use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board history plus the step currently being viewed.
///
/// `current_step` is always a valid index into `history`. The player to
/// move is derived from it: X on even steps, O on odd ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
}

impl GameState {
    /// Creates a new game: one empty board, X to move.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    /// Returns the board history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history.boards()[self.current_step]
    }

    /// Returns the player whose turn it is at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the winner of `board`, if any line is complete.
    pub fn calculate_winner(board: &Board) -> Option<Player> {
        rules::check_winner(board)
    }

    /// Returns the winner of the current board.
    pub fn winner(&self) -> Option<Player> {
        Self::calculate_winner(self.current_board())
    }

    /// Returns the status of the current board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Status text for the current step.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(winner) => format!("Winner: {}", winner),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Positions a move may be played at, empty once the game is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// The move that produced the current board, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.move_at(self.current_step)
    }

    /// Plays the next player's mark at `position`.
    ///
    /// Any steps after the current one are discarded first, so playing
    /// from a rewound step starts a new branch.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the current board already has a winner.
    /// - `MoveError::SquareOccupied` if `position` is taken.
    /// - `MoveError::InvariantViolation` if the result breaks a game
    ///   invariant (checked in debug builds only).
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&self, position: Position) -> Result<GameState, MoveError> {
        let board = self.current_board();

        if Self::calculate_winner(board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mut next_board = board.clone();
        next_board.set(position, Square::Occupied(self.next_player()));

        let next = GameState {
            history: self.history.branch(self.current_step, next_board),
            current_step: self.current_step + 1,
        };

        #[cfg(debug_assertions)]
        GameInvariants::check_all(&next).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                invariants::describe(&violations)
            ))
        })?;

        debug!(step = next.current_step, "Move applied");
        Ok(next)
    }

    /// Plays at `position`, or returns an unchanged copy if the move is
    /// not allowed.
    pub fn apply_move(&self, position: Position) -> GameState {
        self.try_apply_move(position).unwrap_or_else(|err| {
            debug!(%err, ?position, "Move ignored");
            self.clone()
        })
    }

    /// Views the board after `step` moves.
    ///
    /// History is kept intact; later steps are only discarded by the next
    /// move.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::StepOutOfRange` if `step` is not in history.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn try_jump_to(&self, step: usize) -> Result<GameState, MoveError> {
        let len = self.history.len();
        if step >= len {
            return Err(MoveError::StepOutOfRange { step, len });
        }
        debug!(step, "Jumped");
        Ok(GameState {
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// Views the board after `step` moves, or returns an unchanged copy if
    /// the step does not exist.
    pub fn jump_to(&self, step: usize) -> GameState {
        self.try_jump_to(step).unwrap_or_else(|err| {
            debug!(%err, "Jump ignored");
            self.clone()
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRepr {
    history: History,
    current_step: usize,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = MoveError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = GameState {
            history: repr.history,
            current_step: repr.current_step,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            MoveError::InvariantViolation(invariants::describe(&violations))
        })?;
        Ok(state)
    }
}
