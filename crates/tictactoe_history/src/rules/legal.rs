//! Move legality.

use super::status::{Status, evaluate};
use crate::{Board, Mark};
use tracing::instrument;

/// Returns true if `mark` may be placed at `index`.
///
/// A move is legal when the index is on the board, the cell is empty and
/// no line has been completed yet. Turn order is not checked here: the
/// caller always places the mark of the player whose turn it is.
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, index: usize, mark: Mark) -> bool {
    board.is_empty(index) && !matches!(evaluate(board), Status::Win { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_cell_is_legal() {
        assert!(is_legal_move(&Board::new(), 4, Player::X));
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board: Board = ".../X../...".parse().unwrap();
        assert!(!is_legal_move(&board, 3, Player::O));
    }

    #[test]
    fn test_out_of_bounds_is_illegal() {
        assert!(!is_legal_move(&Board::new(), 9, Player::X));
        assert!(!is_legal_move(&Board::new(), usize::MAX, Player::O));
    }

    #[test]
    fn test_no_moves_after_win() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        for index in 0..9 {
            assert!(!is_legal_move(&board, index, Player::O));
            assert!(!is_legal_move(&board, index, Player::X));
        }
    }

    #[test]
    fn test_legal_moves_can_be_placed() {
        let boards: [Board; 3] = [
            Board::new(),
            "XO./.X./O..".parse().unwrap(),
            "XOX/XOO/OX.".parse().unwrap(),
        ];
        for board in &boards {
            for index in 0..12 {
                if is_legal_move(board, index, Player::X) {
                    assert!(board.with_mark(index, Player::X).is_ok());
                }
            }
        }
    }

    #[test]
    fn test_same_mark_twice_is_not_rejected() {
        // Turn order is the caller's job.
        let board: Board = "X../.../...".parse().unwrap();
        assert!(is_legal_move(&board, 1, Player::X));
    }
}
