//! A single game session: one history plus the move list sort order.
//!
//! The session is the boundary a front end talks to. Intents go in, a
//! [`GameView`] comes out. Operations on one session must be serialized;
//! concurrent front ends hold one session each.

use crate::error::HistoryError;
use crate::{GameView, HistoryStore, SortOrder, Status, evaluate, is_legal_move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Input from a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place the next player's mark at a cell (0-8).
    Play(usize),
    /// Move the cursor to a history index.
    Jump(usize),
    /// Flip the move list between ascending and descending order.
    ToggleSortOrder,
}

/// Why a play request had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// Cell index outside 0-8.
    #[display("cell is off the board")]
    OutOfBounds,
    /// Cell already holds a mark.
    #[display("cell is occupied")]
    Occupied,
    /// A line has already been completed.
    #[display("game is over")]
    GameOver,
}

/// Result of a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The move was recorded.
    Accepted,
    /// The request was a no-op.
    Ignored(IgnoreReason),
}

impl PlayOutcome {
    /// Returns true if the move was recorded.
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlayOutcome::Accepted)
    }
}

/// Game session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: HistoryStore,
    order: SortOrder,
}

impl Session {
    /// Creates a session at the game start with ascending move order.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with an initial move list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: HistoryStore::new(),
            order,
        }
    }

    /// Read-only access to the history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Current move list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Plays the next player's mark at `index` if the move is legal.
    ///
    /// Illegal requests leave the session unchanged.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn request_play(&mut self, index: usize) -> PlayOutcome {
        let player = self.history.next_player();
        let board = *self.history.current_snapshot().board();

        if !is_legal_move(&board, index, player) {
            let reason = if index >= 9 {
                IgnoreReason::OutOfBounds
            } else if matches!(evaluate(&board), Status::Win { .. }) {
                IgnoreReason::GameOver
            } else {
                IgnoreReason::Occupied
            };
            debug!(%reason, "Ignoring play request");
            return PlayOutcome::Ignored(reason);
        }

        // A legal move is always in bounds, so placement cannot fail.
        let Ok(next) = board.with_mark(index, player) else {
            debug_assert!(false, "legal move at {index} could not be placed");
            return PlayOutcome::Ignored(IgnoreReason::OutOfBounds);
        };
        self.history.play(next, index, player);
        info!(%player, index, "Play accepted");

        #[cfg(debug_assertions)]
        if let Err(violations) = crate::invariants::check_history(&self.history) {
            for violation in violations {
                tracing::warn!(%violation, "History invariant violated");
            }
        }

        PlayOutcome::Accepted
    }

    /// Moves the cursor to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if there is no such snapshot;
    /// the session is unchanged.
    #[instrument(skip(self))]
    pub fn request_jump(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    /// Flips the move list order. History and cursor are untouched.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Sort order toggled");
    }

    /// Dispatches an intent.
    ///
    /// Ignored plays are not errors; only an out-of-range jump fails.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) -> Result<(), HistoryError> {
        match intent {
            Intent::Play(index) => {
                self.request_play(index);
                Ok(())
            }
            Intent::Jump(index) => self.request_jump(index),
            Intent::ToggleSortOrder => {
                self.toggle_sort_order();
                Ok(())
            }
        }
    }

    /// Builds the view for the current state.
    pub fn view(&self) -> GameView {
        GameView::build(&self.history, self.order)
    }
}
