//! termfolio binary

mod commands;

use anyhow::Result;
use clap::Parser;
use termfolio::cli::{Cli, Commands, ConfigCommands};
use termfolio::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global = &cli.global;

    let target = match (&global.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, None) => LogTarget::Off,
        (None, Some(_)) => LogTarget::Stderr,
    };
    logging::init(target, global.verbose);

    match cli.command {
        None => commands::shell::handle(global),
        Some(Commands::Run { inputs, json }) => commands::run::handle(global, &inputs, json),
        Some(Commands::Commands) => commands::list::handle(global),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(global),
            ConfigCommands::Path => commands::config::handle_path(global),
            ConfigCommands::Init { force } => commands::config::handle_init(global, force),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
