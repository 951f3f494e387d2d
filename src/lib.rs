//! termfolio - a terminal-themed personal portfolio
//!
//! The library holds the shell state machine, the content model and renderer,
//! the TUI, and the ambient config/logging/CLI plumbing used by the binary.

pub mod batch;
pub mod cli;
pub mod config;
pub mod content;
pub mod logging;
pub mod shell;
pub mod tui;

pub use config::{Config, ConfigError};
pub use content::{Profile, ProfileError};
pub use shell::{Command, Session};
