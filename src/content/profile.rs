//! Portfolio owner and per-command content.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ProfileError;
use super::model::ContentBlock;
use crate::shell::Command;

/// Profile shipped inside the binary.
const BUILTIN_PROFILE: &str = include_str!("../../assets/profile.toml");

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    /// User part of the prompt, e.g. `johndoe` in `johndoe@portfolio:~$`
    pub handle: String,
    #[serde(default = "default_host")]
    pub host: String,
    /// Portrait shown on the ID card and in `about`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headshot: Option<String>,
}

fn default_host() -> String {
    "portfolio".to_string()
}

impl Owner {
    /// Prompt string shown before every command.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.handle, self.host)
    }
}

/// Complete content set for one portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub owner: Owner,
    pub about: ContentBlock,
    pub skills: ContentBlock,
    pub projects: ContentBlock,
    pub certifications: ContentBlock,
    pub education: ContentBlock,
    pub website_links: ContentBlock,
    pub contact: ContentBlock,
}

impl Profile {
    /// The sample profile compiled into the binary.
    pub fn builtin() -> Result<Self, ProfileError> {
        toml::from_str(BUILTIN_PROFILE).map_err(ProfileError::Builtin)
    }

    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = toml::from_str(&content).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded profile");
        Ok(profile)
    }

    /// Load from `path` when given, otherwise use the built-in profile.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ProfileError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    /// Content block for a profile-backed command.
    ///
    /// `help` and `clear` are not profile content and return `None`.
    pub fn block(&self, command: Command) -> Option<&ContentBlock> {
        match command {
            Command::About => Some(&self.about),
            Command::Skills => Some(&self.skills),
            Command::Projects => Some(&self.projects),
            Command::Certifications => Some(&self.certifications),
            Command::Education => Some(&self.education),
            Command::WebsiteLinks => Some(&self.website_links),
            Command::Contact => Some(&self.contact),
            Command::Help | Command::Clear => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_profile_parses() {
        let profile = Profile::builtin().unwrap();
        assert_eq!(profile.owner.name, "John Doe");
        assert_eq!(profile.owner.prompt(), "johndoe@portfolio:~$");
    }

    #[test]
    fn builtin_profile_covers_every_content_command() {
        let profile = Profile::builtin().unwrap();
        for cmd in Command::ALL {
            match cmd {
                Command::Help | Command::Clear => assert!(profile.block(cmd).is_none()),
                _ => {
                    let block = profile.block(cmd).unwrap();
                    assert!(!block.title.is_empty(), "{cmd} has no title");
                    assert!(!block.sections.is_empty(), "{cmd} has no sections");
                }
            }
        }
    }

    #[test]
    fn load_reads_custom_profile() {
        let mut original = Profile::builtin().unwrap();
        original.owner.name = "Ada Lovelace".to_string();
        original.owner.handle = "ada".to_string();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&original).unwrap().as_bytes())
            .unwrap();

        let loaded = Profile::load(file.path()).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.owner.prompt(), "ada@portfolio:~$");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Profile::load(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, ProfileError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/profile.toml"));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[owner]\nname = 3\n").unwrap();
        let err = Profile::load(file.path()).unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }

    #[test]
    fn load_or_builtin_without_path_uses_builtin() {
        let profile = Profile::load_or_builtin(None).unwrap();
        assert_eq!(profile, Profile::builtin().unwrap());
    }
}
