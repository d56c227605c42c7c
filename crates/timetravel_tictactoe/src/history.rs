//! Ordered board snapshots, one per move plus the initial empty board.

use super::action::Move;
use super::{Board, Position, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Returned when deserializing a history with no boards.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("history must contain at least the initial board")]
pub struct EmptyHistory;

/// Board snapshots indexed by step.
///
/// Step 0 is always present. Snapshots are never edited in place; a new
/// branch is a new `History` sharing the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    pub(crate) boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of stored boards (moves played plus one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Board after `step` moves.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// The most recent board on this branch.
    pub fn last(&self) -> &Board {
        // Never empty: constructed with one board and only ever extended
        // past a kept prefix of at least one.
        &self.boards[self.boards.len() - 1]
    }

    /// All boards in step order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Iterates over boards in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    /// Keeps steps `0..=step`, drops the rest, then appends `board`.
    #[instrument(skip(self, board), fields(len = self.boards.len()))]
    pub fn branch(&self, step: usize, board: Board) -> Self {
        let keep = (step + 1).min(self.boards.len());
        let mut boards = Vec::with_capacity(keep + 1);
        boards.extend_from_slice(&self.boards[..keep]);
        boards.push(board);
        Self { boards }
    }

    /// The move that produced `step`, recovered by diffing with the
    /// previous board.
    ///
    /// Returns `None` for step 0, for missing steps, and when the two
    /// boards do not differ by exactly one newly placed mark.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 {
            return None;
        }
        let before = self.boards.get(step - 1)?;
        let after = self.boards.get(step)?;
        placed_mark(before, after)
    }

    /// Every move on this branch, in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.boards.len())
            .filter_map(|step| self.move_at(step))
            .collect()
    }

    /// Label for the history entry at `step`.
    pub fn describe(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = EmptyHistory;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        if boards.is_empty() {
            Err(EmptyHistory)
        } else {
            Ok(Self { boards })
        }
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.iter()
    }
}

/// The single mark added between two boards, if that is all that changed.
fn placed_mark(before: &Board, after: &Board) -> Option<Move> {
    let mut changed = Position::ALL
        .iter()
        .copied()
        .filter(|pos| before.get(*pos) != after.get(*pos));

    let position = changed.next()?;
    if changed.next().is_some() {
        return None;
    }

    match (before.get(position), after.get(position)) {
        (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, position)),
        _ => None,
    }
}
