//! TUI widgets for termfolio
//!
//! Reusable UI components for the terminal interface.

pub mod id_card;
pub mod terminal_pane;

pub use id_card::IdCard;
pub use terminal_pane::TerminalPane;
