//! Command-line interface definition
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::tui::ThemeName;

/// Long version: git hash and build date for dev builds, build date only
/// for release builds.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TERMFOLIO_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("TERMFOLIO_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "termfolio",
    version,
    long_version = LONG_VERSION,
    about = "Terminal-themed personal portfolio shell",
    long_about = "Browse a personal portfolio through a simulated command shell.\n\n\
        Run without a subcommand to open the interactive terminal, or use `run`\n\
        to execute commands non-interactively and print their output."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (overrides $TERMFOLIO_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Portfolio profile TOML (overrides [profile] path)
    #[arg(long, global = true, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Color theme (overrides [ui] theme)
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeName>,

    /// Skip the boot sequence
    #[arg(long, global = true)]
    pub no_boot: bool,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run commands and print their output
    #[command(long_about = "Run one or more commands through the portfolio shell and print\n\
        the transcript. Each argument is one submission, so aliases and\n\
        unrecognized input behave exactly as in the interactive terminal.\n\n\
        EXAMPLES:\n    \
        termfolio run about\n    \
        termfolio run help skills portfolio\n    \
        termfolio run --json contact")]
    Run {
        /// Inputs to submit, in order
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,

        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },

    /// List commands with their aliases
    Commands,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
