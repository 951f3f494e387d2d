//! Non-interactive execution of a list of inputs.
//!
//! Each input goes through the same [`Session`] logic as a keypress-driven
//! submission, so aliases, history and `clear` behave identically.

use ratatui::text::Line;
use serde::Serialize;

use crate::content::{line_to_plain, render_response, RenderContext};
use crate::shell::{Command, Outcome, Resolution, Session};

/// Result of one submitted input.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub input: String,
    /// Canonical command the input resolved to, if any
    pub command: Option<Command>,
    /// Response lines (no prompt line)
    pub lines: Vec<Line<'static>>,
}

/// JSON shape of a [`RunRecord`].
#[derive(Debug, Serialize)]
pub struct RunOutput<'a> {
    pub input: &'a str,
    pub command: Option<Command>,
    pub output: Vec<String>,
}

impl RunRecord {
    pub fn to_output(&self) -> RunOutput<'_> {
        RunOutput {
            input: &self.input,
            command: self.command,
            output: self.lines.iter().map(line_to_plain).collect(),
        }
    }
}

/// Submit each input in order against `session`.
pub fn run_inputs<I, S>(session: &mut Session, inputs: I, ctx: RenderContext<'_>) -> Vec<RunRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref();
            let command = match crate::shell::resolve(input) {
                Resolution::Command(command) => Some(command),
                Resolution::Empty | Resolution::Unrecognized => None,
            };
            let lines = match session.execute(input) {
                Outcome::Appended => session
                    .transcript()
                    .last()
                    .map(|entry| render_response(entry.response(), ctx))
                    .unwrap_or_default(),
                Outcome::Cleared | Outcome::Ignored => Vec::new(),
            };
            RunRecord {
                input: input.to_string(),
                command,
                lines,
            }
        })
        .collect()
}
