//! Move count invariant: snapshot k has exactly k marks.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: the board at history position `k` has exactly `k` occupied cells.
pub struct MoveCountInvariant;

impl Invariant<HistoryStore> for MoveCountInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store
            .snapshots()
            .iter()
            .enumerate()
            .all(|(k, snapshot)| snapshot.board().occupied_count() == k)
    }

    fn description() -> &'static str {
        "Snapshot k has exactly k occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_empty_history_holds() {
        assert!(MoveCountInvariant::holds(&HistoryStore::new()));
    }

    #[test]
    fn test_unchanged_board_violates() {
        let mut store = HistoryStore::new();
        store.play(Board::new(), 4, Player::X);
        assert!(!MoveCountInvariant::holds(&store));
    }
}
