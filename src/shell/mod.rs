//! Command interpreter core
//!
//! Everything here is plain data and pure functions; no terminal I/O.
//!
//! - `command`: the closed set of canonical commands
//! - `alias`: static alias table and its validation
//! - `resolver`: input normalization and lookup
//! - `transcript`: append-only log of command/response pairs
//! - `history`: recall list with up/down cursor
//! - `completion`: tab completion over canonical names
//! - `boot`: three-step boot sequence
//! - `session`: the state machine tying the above together

pub mod alias;
pub mod boot;
pub mod command;
pub mod completion;
pub mod history;
pub mod resolver;
pub mod session;
pub mod transcript;

pub use alias::{AliasError, AliasTable};
pub use boot::{BootSequence, BootState};
pub use command::Command;
pub use completion::{complete, Completion};
pub use history::CommandHistory;
pub use resolver::{normalize, resolve, Resolution, Resolver};
pub use session::{Outcome, Session};
pub use transcript::{Response, Transcript, TranscriptEntry};
