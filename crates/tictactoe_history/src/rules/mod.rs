//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from history storage so the history log never has to know
//! whether a board is legal.

pub mod draw;
pub mod legal;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use legal::is_legal_move;
pub use status::{Status, evaluate};
pub use win::{LINES, Line, winning_line};
