//! TUI (Text User Interface) module for termfolio
//!
//! Terminal-based UI components using ratatui/crossterm: the boot screen,
//! the scrollable terminal pane, the ID card and the event loop.

pub mod app;
pub mod shell_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use shell_app::{InputResult, ShellApp, ShellOptions, ShellState};
pub use theme::{Theme, ThemeName};
