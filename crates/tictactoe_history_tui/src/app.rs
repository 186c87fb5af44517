//! Application state and key handling.
//!
//! The app owns one [`Session`] and turns key presses into intents.
//! Everything it renders comes from [`Session::view`].

use crossterm::event::KeyCode;
use tictactoe_history::{GameView, Intent, PlayOutcome, Position, Session, SortOrder};
use tracing::{debug, instrument, warn};

use crate::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board grid.
    Board,
    /// The move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Exit the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    focus: Focus,
    /// History index of the selected move list entry.
    selected: usize,
}

impl App {
    /// Creates a new application.
    pub fn new(order: SortOrder) -> Self {
        Self {
            session: Session::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// Current view of the session.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History index of the selected move list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if let Some(cell) = digit_cell(key) {
            self.play(cell);
            return AppAction::Continue;
        }
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char('s') => self.dispatch(Intent::ToggleSortOrder),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Intent::Jump(self.selected)),
            _ => {}
        }
    }

    /// Moves the selection one row in presentation order.
    fn move_selection(&mut self, delta: isize) {
        let view = self.session.view();
        let rows: Vec<usize> = view.moves().iter().map(|m| *m.index()).collect();
        let row = rows.iter().position(|i| *i == self.selected).unwrap_or(0);
        let target = row.saturating_add_signed(delta).min(rows.len().saturating_sub(1));
        if let Some(index) = rows.get(target) {
            self.selected = *index;
        }
    }

    fn play(&mut self, cell: usize) {
        match self.session.request_play(cell) {
            PlayOutcome::Accepted => {
                self.selected = self.session.history().cursor();
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
            }
            PlayOutcome::Ignored(reason) => debug!(cell, %reason, "Play had no effect"),
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        if let Err(e) = self.session.handle(intent) {
            warn!(error = %e, ?intent, "Intent rejected");
        }
    }
}
