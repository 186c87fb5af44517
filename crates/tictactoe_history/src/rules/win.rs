//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};
use tracing::instrument;

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// The eight winning lines, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Finds the first completed line on the board.
///
/// Returns the owning player and the line, or `None` if no line is complete.
/// When several lines are complete the first one in [`LINES`] order wins.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Some(Cell::Occupied(player)) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some((player, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(
            winning_line(&board("XXX/OO./...")),
            Some((Player::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(
            winning_line(&board(".OX/.OX/..X")),
            Some((Player::X, [2, 5, 8]))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(
            winning_line(&board("X.O/XO./O..")),
            Some((Player::O, [2, 4, 6]))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winning_line(&board("XX./O../...")), None);
    }

    #[test]
    fn test_first_line_wins_on_contrived_board() {
        // Both the top row and the first column are complete.
        assert_eq!(
            winning_line(&board("XXX/X../X..")),
            Some((Player::X, [0, 1, 2]))
        );
        // Two complete rows: the upper one is reported.
        assert_eq!(
            winning_line(&board("OOO/XXX/...")),
            Some((Player::O, [0, 1, 2]))
        );
        assert_eq!(
            winning_line(&board(".../XXX/OOO")),
            Some((Player::X, [3, 4, 5]))
        );
    }
}
