//! Session state: boot progress, transcript, recall history and input line.
//!
//! All mutation happens through the event methods below; rendering reads the
//! resulting data and never writes back.

use tracing::debug;

use super::boot::{BootSequence, BootState};
use super::completion::{complete, Completion};
use super::history::CommandHistory;
use super::resolver::{normalize, Resolution, Resolver};
use super::transcript::{Response, Transcript};

/// What a submission did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing happened.
    Ignored,
    /// One entry was appended.
    Appended,
    /// The transcript was emptied.
    Cleared,
}

/// Full interactive state of one visitor session.
#[derive(Debug, Clone)]
pub struct Session {
    resolver: Resolver,
    boot: BootSequence,
    transcript: Transcript,
    history: CommandHistory,
    input: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session at the start of its boot sequence.
    pub fn new() -> Self {
        Self {
            resolver: Resolver::default(),
            boot: BootSequence::new(),
            transcript: Transcript::new(),
            history: CommandHistory::new(),
            input: String::new(),
        }
    }

    /// A session that skipped the boot sequence and shows the welcome entry.
    pub fn booted() -> Self {
        let mut session = Self::new();
        session.boot = BootSequence::finished();
        session.transcript.append("", Response::Welcome);
        session
    }

    /// A ready session with an empty transcript.
    pub fn headless() -> Self {
        let mut session = Self::new();
        session.boot = BootSequence::finished();
        session
    }

    pub fn boot(&self) -> &BootSequence {
        &self.boot
    }

    pub fn is_ready(&self) -> bool {
        self.boot.is_ready()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Advance the boot sequence by one step. Appends the welcome entry on
    /// reaching ready.
    pub fn tick_boot(&mut self) -> BootState {
        if self.boot.is_ready() {
            return BootState::Ready;
        }
        let state = self.boot.advance();
        debug!(?state, "boot step");
        if state == BootState::Ready {
            self.transcript.append("", Response::Welcome);
        }
        state
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Execute the current input line and clear it.
    pub fn submit(&mut self) -> Outcome {
        let line = std::mem::take(&mut self.input);
        self.execute(&line)
    }

    /// Execute `raw` as if it had been typed and submitted.
    pub fn execute(&mut self, raw: &str) -> Outcome {
        let normalized = normalize(raw);
        if !normalized.is_empty() {
            self.history.record_if_new(&normalized);
        }
        self.history.reset_cursor();

        match self.resolver.resolve(raw) {
            Resolution::Empty => Outcome::Ignored,
            Resolution::Command(command) => match Response::for_command(command) {
                Some(response) => {
                    debug!(%command, input = raw, "command resolved");
                    self.transcript.append(raw, response);
                    Outcome::Appended
                }
                None => {
                    debug!(entries = self.transcript.len(), "clearing transcript");
                    self.transcript.clear();
                    Outcome::Cleared
                }
            },
            Resolution::Unrecognized => {
                debug!(input = raw, "unrecognized command");
                self.transcript.append(
                    raw,
                    Response::Unrecognized {
                        input: raw.to_string(),
                    },
                );
                Outcome::Appended
            }
        }
    }

    /// Replace the input with the previous (older) history entry.
    pub fn recall_previous(&mut self) {
        if let Some(command) = self.history.recall_previous() {
            self.input = command.to_string();
        }
    }

    /// Replace the input with the next (newer) history entry, or clear it.
    pub fn recall_next(&mut self) {
        if let Some(command) = self.history.recall_next() {
            self.input = command.to_string();
        }
    }

    /// Tab-complete the current input.
    pub fn complete(&mut self) -> Completion {
        let completion = complete(&self.input);
        match &completion {
            Completion::None => {}
            Completion::Unique(command) => self.input = command.name().to_string(),
            Completion::Ambiguous(candidates) => {
                self.transcript.append(
                    self.input.clone(),
                    Response::Completions {
                        candidates: candidates.clone(),
                    },
                );
            }
        }
        completion
    }
}
