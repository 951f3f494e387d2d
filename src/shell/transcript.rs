//! Ordered log of rendered command/response pairs.

use serde::Serialize;

use super::command::Command;

/// What a transcript entry displays beneath its prompt line.
///
/// Responses are plain data; turning them into styled lines is the
/// renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// Greeting shown once the boot sequence finishes.
    Welcome,
    /// Generated list of commands.
    Help,
    /// Static content block for a profile-backed command.
    Content { command: Command },
    /// Error block echoing input that matched nothing.
    Unrecognized { input: String },
    /// Candidates offered by an ambiguous tab completion.
    Completions { candidates: Vec<Command> },
}

impl Response {
    /// Response produced by issuing `command`, or `None` for `clear`.
    pub fn for_command(command: Command) -> Option<Response> {
        match command {
            Command::Clear => None,
            Command::Help => Some(Response::Help),
            other => Some(Response::Content { command: other }),
        }
    }

    /// Canonical command this response answers, if any.
    pub fn command(&self) -> Option<Command> {
        match self {
            Response::Help => Some(Command::Help),
            Response::Content { command } => Some(*command),
            _ => None,
        }
    }
}

/// One prompt line plus its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    input: String,
    response: Response,
}

impl TranscriptEntry {
    pub fn new(input: impl Into<String>, response: Response) -> Self {
        Self {
            input: input.into(),
            response,
        }
    }

    /// Input as the visitor typed it. Empty for system entries.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn response(&self) -> &Response {
        &self.response
    }
}

/// Append-only sequence of entries. The only other transition is `clear`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, input: impl Into<String>, response: Response) {
        self.entries.push(TranscriptEntry::new(input, response));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_arrival_order() {
        let mut transcript = Transcript::new();
        transcript.append("about", Response::Content { command: Command::About });
        transcript.append("help", Response::Help);

        let inputs: Vec<&str> = transcript.entries().iter().map(|e| e.input()).collect();
        assert_eq!(inputs, vec!["about", "help"]);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn clear_empties_everything() {
        let mut transcript = Transcript::new();
        transcript.append("", Response::Welcome);
        transcript.append("x", Response::Unrecognized { input: "x".into() });
        transcript.clear();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());
    }

    #[test]
    fn for_command_maps_clear_to_none() {
        assert_eq!(Response::for_command(Command::Clear), None);
        assert_eq!(Response::for_command(Command::Help), Some(Response::Help));
        assert_eq!(
            Response::for_command(Command::Skills),
            Some(Response::Content { command: Command::Skills })
        );
    }

    #[test]
    fn response_command_reports_answered_command() {
        assert_eq!(Response::Help.command(), Some(Command::Help));
        assert_eq!(Response::Welcome.command(), None);
        assert_eq!(
            Response::Unrecognized { input: "q".into() }.command(),
            None
        );
    }

    #[test]
    fn entry_serializes_with_tagged_response() {
        let entry = TranscriptEntry::new("code", Response::Content { command: Command::Projects });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["input"], "code");
        assert_eq!(json["response"]["kind"], "content");
        assert_eq!(json["response"]["command"], "projects");
    }
}
