//! Config subcommands handler

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use termfolio::cli::GlobalArgs;
use termfolio::tui::Theme;
use termfolio::Config;

use super::paint;

/// Show the effective configuration (file plus overrides) as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(global: &GlobalArgs) -> Result<()> {
    let config = super::load_config(global)?;
    let toml_str = config.to_toml()?;
    let theme = super::theme(&config);
    println!("{}", paint(toml_str.trim_end(), &theme, Theme::primary_text));
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(global: &GlobalArgs) -> Result<()> {
    println!("{}", super::config_path(global)?.display());
    Ok(())
}

/// Write a default config file.
///
/// An existing file is only replaced with `--force` or after confirmation.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(global: &GlobalArgs, force: bool) -> Result<()> {
    let config_path = super::config_path(global)?;
    let theme = super::output_theme(global);

    if config_path.exists()
        && !force
        && !prompt_confirmation(&format!("Overwrite {}?", config_path.display()), &theme)?
    {
        println!("{}", paint("No changes made.", &theme, Theme::primary_text));
        return Ok(());
    }

    write_default(&config_path)?;
    println!(
        "{}",
        paint(
            &format!("Wrote {}", config_path.display()),
            &theme,
            Theme::success_text
        )
    );
    Ok(())
}

fn write_default(path: &Path) -> Result<()> {
    Config::default().save_to(path)?;
    Ok(())
}

/// Prompt user for y/N confirmation.
fn prompt_confirmation(message: &str, theme: &Theme) -> Result<bool> {
    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            paint(
                "Non-interactive mode: use --force to overwrite",
                theme,
                Theme::secondary_text
            )
        );
        return Ok(false);
    }

    print!("{} [y/N] ", paint(message, theme, Theme::primary_text));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
