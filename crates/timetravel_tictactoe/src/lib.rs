//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: `Board`, `Square`, `Player` and `Position`
//! - **Rules**: win and draw detection over a single board
//! - **History**: one board snapshot per move, plus the empty start
//! - **GameState**: history plus the viewed step; moves and jumps return
//!   new states
//! - **Invariants**: properties every reachable state satisfies
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, Player, Position};
//!
//! let game = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center)
//!     .apply_move(Position::BottomRight);
//!
//! let rewound = game.jump_to(1);
//! assert_eq!(rewound.next_player(), Player::O);
//!
//! // Playing from a rewound step discards the old future.
//! let branched = rewound.apply_move(Position::MiddleLeft);
//! assert_eq!(branched.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use history::{EmptyHistory, History};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicHistoryInvariant, NoMoveAfterWinInvariant, StepInRangeInvariant,
};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
