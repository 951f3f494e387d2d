//! Tab completion over canonical command names.

use super::command::Command;

/// Result of completing a partial input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No canonical name starts with the input.
    None,
    /// Exactly one candidate; the input should be replaced with it.
    Unique(Command),
    /// Several candidates, in canonical order.
    Ambiguous(Vec<Command>),
}

/// Complete `input` against the canonical names. Aliases never participate.
pub fn complete(input: &str) -> Completion {
    let prefix = input.to_lowercase();
    let mut matches: Vec<Command> = Command::ALL
        .iter()
        .copied()
        .filter(|c| c.name().starts_with(&prefix))
        .collect();

    match matches.len() {
        0 => Completion::None,
        1 => Completion::Unique(matches.remove(0)),
        _ => Completion::Ambiguous(matches),
    }
}
