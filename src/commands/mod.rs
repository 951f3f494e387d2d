//! Subcommand handlers and the settings they share

pub mod completions;
pub mod config;
pub mod list;
pub mod run;
pub mod shell;

use std::path::PathBuf;

use anyhow::{Context, Result};
use termfolio::cli::GlobalArgs;
use termfolio::tui::Theme;
use termfolio::{Config, Profile};

/// Config file location: `--config` first, then the usual lookup.
pub fn config_path(global: &GlobalArgs) -> Result<PathBuf> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::config_path()?),
    }
}

/// Load the config file and apply command-line overrides.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = global.theme {
        config.ui.theme = theme;
    }
    if global.no_boot {
        config.ui.skip_boot = true;
    }
    if let Some(profile) = &global.profile {
        config.profile.path = Some(profile.clone());
    }
    Ok(config)
}

pub fn load_profile(config: &Config) -> Result<Profile> {
    Profile::load_or_builtin(config.profile.path.as_deref()).context("Failed to load profile")
}

pub fn theme(config: &Config) -> Theme {
    config.ui.theme.theme()
}

/// Theme for plain CLI output. An unreadable config file falls back to
/// `--theme` or the default so `config init` can still repair it.
pub fn output_theme(global: &GlobalArgs) -> Theme {
    match load_config(global) {
        Ok(config) => theme(&config),
        Err(_) => global.theme.unwrap_or_default().theme(),
    }
}

/// ANSI colors on stdout unless `NO_COLOR` is set or stdout is not a TTY.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Apply a theme text helper when colors are enabled on stdout.
pub fn paint(text: &str, theme: &Theme, style: impl Fn(&Theme, &str) -> String) -> String {
    paint_with(use_color(), text, theme, style)
}

fn paint_with(
    color: bool,
    text: &str,
    theme: &Theme,
    style: impl Fn(&Theme, &str) -> String,
) -> String {
    if color {
        style(theme, text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio::tui::ThemeName;

    #[test]
    fn paint_uses_the_given_theme() {
        let ocean = ThemeName::Ocean.theme();
        let painted = paint_with(true, "about", &ocean, Theme::primary_text);
        assert_eq!(painted, ocean.primary_text("about"));
        assert_ne!(painted, Theme::default().primary_text("about"));
    }

    #[test]
    fn paint_without_color_is_plain() {
        let theme = Theme::default();
        assert_eq!(paint_with(false, "about", &theme, Theme::primary_text), "about");
    }

    #[test]
    fn theme_flag_overrides_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let global = GlobalArgs {
            config: Some(dir.path().join("config.toml")),
            theme: Some(ThemeName::Classic),
            ..GlobalArgs::default()
        };
        let config = load_config(&global).unwrap();
        assert_eq!(config.ui.theme, ThemeName::Classic);
    }

    #[test]
    fn output_theme_reads_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"ocean\"\n").unwrap();
        let global = GlobalArgs {
            config: Some(path),
            ..GlobalArgs::default()
        };
        assert_eq!(output_theme(&global), Theme::ocean());
    }

    #[test]
    fn output_theme_survives_broken_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\n").unwrap();
        let global = GlobalArgs {
            config: Some(path),
            theme: Some(ThemeName::Classic),
            ..GlobalArgs::default()
        };
        assert_eq!(output_theme(&global), Theme::classic());
    }
}
