//! Profile loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading portfolio content.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Built-in profile is invalid: {0}")]
    Builtin(#[source] toml::de::Error),
}
