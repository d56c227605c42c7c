//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. They know nothing about history
//! or turn order.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
