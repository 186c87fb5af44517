//! Monotonic board invariant: each move fills exactly one empty cell.

use super::Invariant;
use crate::{Cell, HistoryStore};

/// Invariant: snapshot `k` equals snapshot `k - 1` except for the recorded
/// cell, which changes from empty to the moving player's mark.
pub struct MonotonicBoardInvariant;

impl Invariant<HistoryStore> for MonotonicBoardInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(mv) = after.last_move() else {
                return false;
            };
            (0..9).all(|i| {
                let (old, new) = (before.board().get(i), after.board().get(i));
                if i == mv.index {
                    old == Some(Cell::Empty) && new == Some(Cell::Occupied(mv.player))
                } else {
                    old == new
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly the recorded empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_single_mark_holds() {
        let mut store = HistoryStore::new();
        let board = Board::new().with_mark(4, Player::X).unwrap();
        store.play(board, 4, Player::X);
        assert!(MonotonicBoardInvariant::holds(&store));
    }

    #[test]
    fn test_wrong_recorded_cell_violates() {
        let mut store = HistoryStore::new();
        let board = Board::new().with_mark(4, Player::X).unwrap();
        store.play(board, 3, Player::X);
        assert!(!MonotonicBoardInvariant::holds(&store));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut store = HistoryStore::new();
        let first = Board::new().with_mark(4, Player::X).unwrap();
        store.play(first, 4, Player::X);
        let second = first.with_mark(4, Player::O).unwrap();
        store.play(second, 4, Player::O);
        assert!(!MonotonicBoardInvariant::holds(&store));
    }
}
