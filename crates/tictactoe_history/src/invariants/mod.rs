//! First-class invariants over the move history.
//!
//! [`HistoryStore::play`](crate::HistoryStore::play) appends whatever it is
//! given, so these properties hold only as long as every play goes through
//! the rules. They are testable independently and checked by
//! [`Session`](crate::Session) in debug builds.

pub mod alternating_player;
pub mod monotonic_board;
pub mod move_count;

pub use alternating_player::AlternatingPlayerInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use move_count::MoveCountInvariant;

use crate::HistoryStore;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    MoveCountInvariant,
    AlternatingPlayerInvariant,
    MonotonicBoardInvariant,
);

/// Checks [`HistoryInvariants`] against a store.
pub fn check_history(store: &HistoryStore) -> Result<(), Vec<InvariantViolation>> {
    HistoryInvariants::check_all(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Session};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(check_history(&HistoryStore::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut session = Session::new();
        for cell in [0, 4, 8, 2] {
            session.request_play(cell);
        }
        session.request_jump(2).unwrap();
        session.request_play(6);
        assert!(check_history(session.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut store = HistoryStore::new();
        // Two marks in one move, placed by O.
        let board: Board = "OO./.../...".parse().unwrap();
        store.play(board, 0, crate::Player::O);

        let violations = check_history(&store).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MoveCountInvariant, AlternatingPlayerInvariant);
        assert!(TwoInvariants::check_all(&HistoryStore::new()).is_ok());
    }
}
