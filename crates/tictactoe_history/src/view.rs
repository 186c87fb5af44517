//! Derived, read-only presentation data for a front end.
//!
//! Nothing here mutates history: sort order is applied to a freshly built
//! entry list, and each entry keeps its history index whatever its row.

use crate::{Board, HistoryStore, Move, Player, Status, evaluate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction in which the move list is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for a control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }

    /// Reorders an ascending entry list for presentation.
    pub fn apply<T>(self, mut entries: Vec<T>) -> Vec<T> {
        if self == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

/// Formats a move's one-based coordinates as `"(row, col)"`.
///
/// The game start has no move and an empty label.
pub fn move_label(last_move: Option<Move>) -> String {
    last_move.map(|mv| mv.to_string()).unwrap_or_default()
}

/// Status line text for a board status.
pub fn status_text(status: &Status, next_player: Player) -> String {
    match status {
        Status::Win { player, .. } => format!("Winner: {player}"),
        Status::Draw => "It's a draw!".to_string(),
        Status::Ongoing => format!("Next player: {next_player}"),
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Position in history; the jump target for this entry.
    index: usize,
    /// Move that produced the snapshot, absent for the game start.
    last_move: Option<Move>,
    /// True if the cursor is on this entry.
    is_current: bool,
}

impl MoveEntry {
    /// Coordinate label, e.g. `"(2, 3)"`.
    pub fn label(&self) -> String {
        move_label(self.last_move)
    }

    /// Full description for a move list row.
    pub fn description(&self) -> String {
        let player = self
            .last_move
            .map(|mv| format!(" - {}", mv.player))
            .unwrap_or_default();
        if self.is_current {
            let text = format!("You are at move #{} {}{}", self.index, self.label(), player);
            text.trim_end().to_string()
        } else if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{} {}{}", self.index, self.label(), player)
        }
    }
}

/// Everything a front end needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the cursor.
    board: Board,
    /// Evaluation of that board.
    status: Status,
    /// Status line, e.g. `"Next player: X"`.
    status_text: String,
    /// Player to move at the cursor.
    next_player: Player,
    /// Cells to emphasize: the winning line or nothing.
    highlighted: Vec<usize>,
    /// Move list in presentation order.
    moves: Vec<MoveEntry>,
    /// Presentation order of `moves`.
    order: SortOrder,
    /// History index of the active snapshot.
    cursor: usize,
}

impl GameView {
    /// Builds the view for a history in the given order.
    #[instrument(skip(store), fields(cursor = store.cursor(), len = store.len()))]
    pub fn build(store: &HistoryStore, order: SortOrder) -> Self {
        let board = *store.current_snapshot().board();
        let status = evaluate(&board);
        let next_player = store.next_player();
        let cursor = store.cursor();

        let entries = store
            .snapshots()
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveEntry {
                index,
                last_move: *snapshot.last_move(),
                is_current: index == cursor,
            })
            .collect();

        Self {
            board,
            status_text: status_text(&status, next_player),
            highlighted: status.highlighted().to_vec(),
            status,
            next_player,
            moves: order.apply(entries),
            order,
            cursor,
        }
    }

    /// Whether a cell is part of the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_after(cells: &[usize]) -> HistoryStore {
        let mut store = HistoryStore::new();
        for &index in cells {
            let player = store.next_player();
            let board = store.current_snapshot().board().with_mark(index, player).unwrap();
            store.play(board, index, player);
        }
        store
    }

    #[test]
    fn test_move_label() {
        assert_eq!(move_label(Some(Move::new(5, Player::X))), "(2, 3)");
        assert_eq!(move_label(Some(Move::new(6, Player::O))), "(3, 1)");
        assert_eq!(move_label(None), "");
        let mv = Move::new(7, Player::X);
        assert_eq!(move_label(Some(mv)), mv.to_string());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(&Status::Ongoing, Player::O), "Next player: O");
        assert_eq!(status_text(&Status::Draw, Player::X), "It's a draw!");
        let win = Status::Win {
            player: Player::X,
            line: [0, 1, 2],
        };
        assert_eq!(status_text(&win, Player::O), "Winner: X");
    }

    #[test]
    fn test_descriptions() {
        let store = store_after(&[4, 5]);
        let view = GameView::build(&store, SortOrder::Ascending);
        let descriptions: Vec<String> = view.moves().iter().map(|m| m.description()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Go to game start".to_string(),
                "Go to move #1 (2, 2) - X".to_string(),
                "You are at move #2 (2, 3) - O".to_string(),
            ]
        );
    }

    #[test]
    fn test_current_start_description() {
        let view = GameView::build(&HistoryStore::new(), SortOrder::Ascending);
        assert_eq!(view.moves()[0].description(), "You are at move #0");
    }

    #[test]
    fn test_descending_keeps_indices() {
        let store = store_after(&[0, 4, 8]);
        let ascending = GameView::build(&store, SortOrder::Ascending);
        let descending = GameView::build(&store, SortOrder::Descending);

        let asc: Vec<usize> = ascending.moves().iter().map(|m| *m.index()).collect();
        let desc: Vec<usize> = descending.moves().iter().map(|m| *m.index()).collect();
        assert_eq!(asc, vec![0, 1, 2, 3]);
        assert_eq!(desc, vec![3, 2, 1, 0]);
        assert_eq!(descending.moves()[0].label(), "(3, 3)");
        assert_eq!(ascending.cursor(), descending.cursor());
        assert_eq!(ascending.board(), descending.board());
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle().toggle_label(), "Sort Descending");
    }

    #[test]
    fn test_highlight_only_on_win() {
        let ongoing = GameView::build(&store_after(&[0, 4]), SortOrder::Ascending);
        assert!(ongoing.highlighted().is_empty());

        let won = GameView::build(&store_after(&[0, 4, 1, 5, 2]), SortOrder::Ascending);
        assert_eq!(won.highlighted(), &vec![0, 1, 2]);
        assert!(won.is_highlighted(1));
        assert!(!won.is_highlighted(4));
    }
}
