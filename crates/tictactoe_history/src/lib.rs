//! Tic-tac-toe with move history and time-travel navigation.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`] and [`Move`] - immutable values
//! - **Rules**: pure functions over a board ([`evaluate`], [`is_legal_move`])
//! - **History**: [`HistoryStore`] - an append/branch log of [`Snapshot`]s plus a cursor
//! - **View**: derived presentation data ([`GameView`], [`MoveEntry`], [`SortOrder`])
//! - **Session**: [`Session`] - turns front-end intents into history operations
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Session, Status, Player};
//!
//! let mut session = Session::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     session.request_play(cell);
//! }
//!
//! let view = session.view();
//! assert_eq!(view.status_text(), "Winner: X");
//! assert_eq!(view.highlighted(), &[0, 1, 2]);
//! assert!(matches!(view.status(), Status::Win { player: Player::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
pub mod rules;
mod session;
mod types;
mod view;

pub use error::{BoardError, HistoryError};
pub use history::{HistoryStore, Snapshot};
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use rules::{LINES, Line, Status, evaluate, is_legal_move};
pub use session::{IgnoreReason, Intent, PlayOutcome, Session};
pub use types::{Board, Cell, Mark, Move, Player, Position};
pub use view::{GameView, MoveEntry, SortOrder, move_label, status_text};
