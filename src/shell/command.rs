//! Canonical command identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed, top-level commands the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Certifications,
    Education,
    WebsiteLinks,
    Contact,
    Clear,
}

impl Command {
    /// All canonical commands in display and completion order.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::About,
        Command::Skills,
        Command::Projects,
        Command::Certifications,
        Command::Education,
        Command::WebsiteLinks,
        Command::Contact,
        Command::Clear,
    ];

    /// The literal name typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Certifications => "certifications",
            Command::Education => "education",
            Command::WebsiteLinks => "website-links",
            Command::Contact => "contact",
            Command::Clear => "clear",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Show this help message",
            Command::About => "Learn about me",
            Command::Skills => "View technical skills",
            Command::Projects => "View code projects",
            Command::Certifications => "View certificates",
            Command::Education => "Educational background",
            Command::WebsiteLinks => "Coding profiles",
            Command::Contact => "Contact information",
            Command::Clear => "Clear terminal",
        }
    }

    /// Look up a command by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a string that is not a canonical name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::from_name(s).ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
