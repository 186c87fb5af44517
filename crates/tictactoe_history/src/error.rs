//! Error types for board construction and history navigation.

use derive_more::{Display, Error};

/// Error returned by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested snapshot does not exist.
    #[display("Move #{index} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested snapshot index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Error returned when building a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Cell index outside 0-8.
    #[display("Cell index {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// Offending index.
        index: usize,
    },

    /// Board text could not be parsed.
    #[display("Invalid board: {_0}")]
    Parse(#[error(not(source))] String),
}
