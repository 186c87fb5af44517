//! Headless replay: apply plays, optionally jump, and print the view.

use anyhow::{Context, Result};
use tictactoe_history::{GameView, PlayOutcome, Session, SortOrder};
use tracing::{info, instrument, warn};

/// Plays `moves` in order, then jumps to `jump` if given, and renders the
/// resulting view as text or JSON.
///
/// Illegal plays are skipped, as they would be in the interactive UI.
/// An out-of-range jump is an error.
#[instrument]
pub fn run(moves: &[usize], jump: Option<usize>, order: SortOrder, json: bool) -> Result<String> {
    let mut session = Session::with_order(order);

    for &cell in moves {
        if let PlayOutcome::Ignored(reason) = session.request_play(cell) {
            warn!(cell, %reason, "Skipping play");
        }
    }

    if let Some(index) = jump {
        session
            .request_jump(index)
            .with_context(|| format!("Cannot jump to move #{index}"))?;
    }

    let view = session.view();
    info!(status = %view.status_text(), cursor = view.cursor(), "Replay finished");

    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(render_text(&view))
    }
}

/// Plain-text rendering of a view.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&view.board().display());
    out.push_str("\n\n");
    out.push_str(view.status_text());
    out.push_str("\n\nMoves:\n");
    for entry in view.moves() {
        out.push_str("  ");
        out.push_str(&entry.description());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_replay_win() {
        let out = run(&[0, 4, 1, 5, 2], None, SortOrder::Ascending, false).unwrap();
        assert!(out.starts_with("X|X|X\n-+-+-\n4|O|O"));
        assert!(out.contains("Winner: X"));
        assert!(out.contains("  You are at move #5 (1, 3) - X\n"));
    }

    #[test]
    fn test_illegal_plays_are_skipped() {
        let out = run(&[4, 4, 12], None, SortOrder::Ascending, false).unwrap();
        assert!(out.contains("Next player: O"));
        assert!(out.contains("You are at move #1 (2, 2) - X"));
    }

    #[test]
    fn test_jump_and_descending() {
        let out = run(&[0, 4, 8], Some(1), SortOrder::Descending, false).unwrap();
        let moves: Vec<&str> = out.lines().skip_while(|l| *l != "Moves:").skip(1).collect();
        assert_eq!(
            moves,
            vec![
                "  Go to move #3 (3, 3) - X",
                "  Go to move #2 (2, 2) - O",
                "  You are at move #1 (1, 1) - X",
                "  Go to game start",
            ]
        );
    }

    #[test]
    fn test_out_of_range_jump_fails() {
        let err = run(&[0], Some(2), SortOrder::Ascending, false).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }

    #[test]
    fn test_json_replay() {
        let out = run(&[4], None, SortOrder::Ascending, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status_text"], "Next player: O");
        assert_eq!(value["highlighted"], serde_json::json!([]));
    }
}
