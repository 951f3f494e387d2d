//! `completions` subcommand

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use termfolio::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
