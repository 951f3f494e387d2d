//! Interactive shell entry point

use std::time::Duration;

use anyhow::{bail, Result};
use termfolio::cli::GlobalArgs;
use termfolio::tui::{ShellApp, ShellOptions};
use tracing::info;

/// Start the interactive terminal. Requires a TTY on stdin and stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!(
            "The interactive shell requires a terminal (TTY).\n\
             Use `termfolio run <COMMAND>...` for non-interactive output."
        );
    }

    let config = super::load_config(global)?;
    let profile = super::load_profile(&config)?;
    info!(theme = ?config.ui.theme, skip_boot = config.ui.skip_boot, "starting shell");

    let options = ShellOptions {
        theme: super::theme(&config),
        boot_delay: Duration::from_millis(config.ui.boot_delay_ms),
        skip_boot: config.ui.skip_boot,
        show_id_card: config.ui.show_id_card,
    };
    let mut app = ShellApp::new(profile, options)?;
    app.run()
}
