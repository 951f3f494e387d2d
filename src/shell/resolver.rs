//! Input normalization and command resolution.

use super::alias::AliasTable;
use super::command::Command;

/// Outcome of resolving one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Blank input; nothing to do.
    Empty,
    /// Input named a canonical command directly or through an alias.
    Command(Command),
    /// Input matched neither a canonical name nor an alias.
    Unrecognized,
}

/// Lowercase and trim raw input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolves input against the canonical set and an alias table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    aliases: AliasTable,
}

impl Resolver {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Resolve raw input. Canonical names win over aliases.
    pub fn resolve(&self, raw: &str) -> Resolution {
        let input = normalize(raw);
        if input.is_empty() {
            return Resolution::Empty;
        }
        if let Some(cmd) = Command::from_name(&input) {
            return Resolution::Command(cmd);
        }
        match self.aliases.lookup(&input) {
            Some(cmd) => Resolution::Command(cmd),
            None => Resolution::Unrecognized,
        }
    }
}

/// Resolve using the built-in alias table.
pub fn resolve(raw: &str) -> Resolution {
    Resolver::default().resolve(raw)
}
