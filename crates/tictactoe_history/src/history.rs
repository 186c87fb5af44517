//! Move history with a navigable cursor.
//!
//! The history is an append/branch log: playing from a past cursor
//! discards every snapshot after it before appending the new one.

use crate::error::HistoryError;
use crate::{Board, Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One historical board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// The move that produced this board; `None` only for the game start.
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty-board snapshot every history starts with.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Creates a snapshot recording `player`'s move at `index`.
    pub fn after_move(board: Board, index: usize, player: Player) -> Self {
        Self {
            board,
            last_move: Some(Move::new(index, player)),
        }
    }

    /// Cell index of the move that produced this snapshot.
    pub fn last_move_index(&self) -> Option<usize> {
        self.last_move.map(|m| m.index)
    }

    /// Player who made the move that produced this snapshot.
    pub fn moving_player(&self) -> Option<Player> {
        self.last_move.map(|m| m.player)
    }
}

/// Ordered snapshots plus the cursor selecting the active one.
///
/// History is never empty and always begins with [`Snapshot::initial`].
/// The cursor is always a valid index. Both are only changed through
/// [`HistoryStore::play`] and [`HistoryStore::jump_to`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStore {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl HistoryStore {
    /// Creates a history holding only the initial snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Returns the active snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Records a move made from the active snapshot.
    ///
    /// Snapshots after the cursor are discarded, the new snapshot is
    /// appended and the cursor moves onto it. No legality check is made;
    /// callers validate with [`crate::is_legal_move`] first.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn play(&mut self, board: Board, move_index: usize, player: Player) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after cursor");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots
            .push(Snapshot::after_move(board, move_index, player));
        self.cursor = self.snapshots.len() - 1;
        info!(cursor = self.cursor, "Move recorded");
    }

    /// Moves the cursor to an existing snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index` is not a valid
    /// snapshot index. State is unchanged on error.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        info!("Jumped to move");
        Ok(())
    }

    /// Player whose turn it is at the cursor: X on even cursors, O on odd.
    pub fn next_player(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Index of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in move order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
