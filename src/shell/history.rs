//! Command recall history with up/down navigation.

/// Distinct accepted commands plus a recall cursor.
///
/// The cursor counts backwards from the newest entry: `Some(0)` is the most
/// recent command, `Some(len - 1)` the oldest, and `None` means no recall is
/// in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `command` unless it already appears anywhere in the history.
    ///
    /// Returns `true` when the command was added.
    pub fn record_if_new(&mut self, command: &str) -> bool {
        if self.entries.iter().any(|c| c == command) {
            return false;
        }
        self.entries.push(command.to_string());
        true
    }

    /// Step one entry older and return it.
    ///
    /// Stays on the oldest entry once reached. Returns `None` (and changes
    /// nothing) when the history is empty.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let oldest = self.entries.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(pos) => (pos + 1).min(oldest),
        };
        self.cursor = Some(next);
        Some(self.at(next))
    }

    /// Step one entry newer and return it, or `""` once back past the newest.
    ///
    /// Returns `None` (and changes nothing) when the history is empty.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = match self.cursor {
            None | Some(0) => None,
            Some(pos) => Some(pos - 1),
        };
        match self.cursor {
            Some(pos) => Some(self.at(pos)),
            None => Some(""),
        }
    }

    /// Leave recall mode.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn at(&self, from_newest: usize) -> &str {
        &self.entries[self.entries.len() - 1 - from_newest]
    }
}
