//! Overall board evaluation.

use super::{Line, is_full, winning_line};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
///
/// A closed set of outcomes: callers must handle the ongoing case
/// explicitly rather than checking for a missing winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No line is complete and at least one cell is empty.
    Ongoing,
    /// A line is complete.
    Win {
        /// Owner of the completed line.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Every cell is filled and no line is complete.
    Draw,
}

impl Status {
    /// Returns true if no more moves can be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Win { player, .. } => Some(*player),
            Status::Ongoing | Status::Draw => None,
        }
    }

    /// Cells to emphasize: the winning line, or nothing.
    pub fn highlighted(&self) -> &[usize] {
        match self {
            Status::Win { line, .. } => line.as_slice(),
            Status::Ongoing | Status::Draw => &[],
        }
    }
}

/// Evaluates a board. Pure and total over every 9-cell board.
#[instrument]
pub fn evaluate(board: &Board) -> Status {
    if let Some((player, line)) = winning_line(board) {
        return Status::Win { player, line };
    }
    if is_full(board) {
        return Status::Draw;
    }
    Status::Ongoing
}
