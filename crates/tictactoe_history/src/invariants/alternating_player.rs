//! Alternating player invariant: X, O, X, O, ...

use super::Invariant;
use crate::{HistoryStore, Player};

/// Invariant: the initial snapshot records no move, X makes the first
/// move, and every later move is made by the opponent of the one before.
pub struct AlternatingPlayerInvariant;

impl Invariant<HistoryStore> for AlternatingPlayerInvariant {
    fn holds(store: &HistoryStore) -> bool {
        let snapshots = store.snapshots();
        let Some((first, rest)) = snapshots.split_first() else {
            return false;
        };
        if first.moving_player().is_some() {
            return false;
        }
        let mut expected = Some(Player::X);
        for snapshot in rest {
            if snapshot.moving_player() != expected {
                return false;
            }
            expected = snapshot.moving_player().map(Player::opponent);
        }
        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
