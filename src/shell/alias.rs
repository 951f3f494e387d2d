//! Static alias table mapping alternate spellings to canonical commands.

use super::command::Command;

/// Alternate inputs and the command each one stands for.
///
/// Keys are lowercase. Canonical names are matched before this table is
/// consulted, so they never appear here.
const ALIASES: &[(&str, Command)] = &[
    ("portfolio", Command::Projects),
    ("work", Command::Projects),
    ("code", Command::Projects),
    ("certs", Command::Certifications),
    ("certificates", Command::Certifications),
    ("links", Command::WebsiteLinks),
    ("social", Command::WebsiteLinks),
    ("tech", Command::Skills),
    ("technologies", Command::Skills),
    ("bio", Command::About),
    ("info", Command::About),
    ("me", Command::About),
    ("reach", Command::Contact),
    ("email", Command::Contact),
    ("cls", Command::Clear),
    ("clr", Command::Clear),
    ("edu", Command::Education),
];

/// Problems detected in an alias table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    #[error("alias '{alias}' shadows canonical command '{canonical}' but targets '{target}'")]
    ShadowsCanonical {
        alias: &'static str,
        canonical: Command,
        target: Command,
    },

    #[error("alias '{0}' is defined more than once")]
    Duplicate(&'static str),

    #[error("alias '{0}' is not normalized (must be lowercase and trimmed)")]
    NotNormalized(&'static str),
}

/// Read-only view over an alias table.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, Command)],
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    /// The table compiled into the binary.
    pub const fn builtin() -> Self {
        Self { entries: ALIASES }
    }

    #[cfg(test)]
    pub(crate) const fn from_entries(entries: &'static [(&'static str, Command)]) -> Self {
        Self { entries }
    }

    /// Find the command an alias points to.
    pub fn lookup(&self, alias: &str) -> Option<Command> {
        self.entries
            .iter()
            .find(|(key, _)| *key == alias)
            .map(|(_, cmd)| *cmd)
    }

    /// Iterate over `(alias, target)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Command)> + '_ {
        self.entries.iter().copied()
    }

    /// Aliases that resolve to `command`, in table order.
    pub fn aliases_for(&self, command: Command) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, target)| *target == command)
            .map(|(alias, _)| alias)
            .collect()
    }

    /// Check that no alias masks a different canonical command, that keys are
    /// unique, and that keys are already in normalized form.
    pub fn validate(&self) -> Result<(), AliasError> {
        for (idx, (alias, target)) in self.entries.iter().enumerate() {
            if alias.trim() != *alias || alias.to_lowercase() != *alias {
                return Err(AliasError::NotNormalized(alias));
            }
            if let Some(canonical) = Command::from_name(alias) {
                if canonical != *target {
                    return Err(AliasError::ShadowsCanonical {
                        alias,
                        canonical,
                        target: *target,
                    });
                }
            }
            if self.entries[..idx].iter().any(|(prev, _)| prev == alias) {
                return Err(AliasError::Duplicate(alias));
            }
        }
        Ok(())
    }
}
