//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named themes selectable from config or the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Green-on-black terminal look
    #[default]
    Matrix,
    /// White text with yellow accents
    Classic,
    /// Cyan/blue palette
    Ocean,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Matrix => Theme::matrix(),
            ThemeName::Classic => Theme::classic(),
            ThemeName::Ocean => Theme::ocean(),
        }
    }
}

/// Theme configuration for the TUI.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Prompt, borders and the command bar
    pub accent: Color,
    /// Block headings
    pub heading: Color,
    /// Command names, card titles, tag group headings
    pub highlight: Color,
    /// Hyperlinks
    pub link: Color,
    /// Echoed input after the prompt
    pub echo: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Rotating colors for skill tags
    pub tag_palette: [Color; 6],
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::matrix()
    }
}

impl Theme {
    /// Green prompt and borders, cyan headings, yellow highlights.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn matrix() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            heading: Color::Cyan,
            highlight: Color::Yellow,
            link: Color::LightBlue,
            echo: Color::White,
            error: Color::Red,
            success: Color::Green,
            tag_palette: [
                Color::LightBlue,
                Color::LightGreen,
                Color::LightYellow,
                Color::LightMagenta,
                Color::LightCyan,
                Color::LightRed,
            ],
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            heading: Color::White,
            highlight: Color::Yellow,
            link: Color::Blue,
            echo: Color::White,
            error: Color::Red,
            success: Color::Green,
            tag_palette: [Color::White; 6],
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            heading: Color::LightBlue,
            highlight: Color::LightCyan,
            link: Color::Blue,
            echo: Color::White,
            error: Color::Red,
            success: Color::Green,
            tag_palette: [
                Color::LightBlue,
                Color::LightCyan,
                Color::Blue,
                Color::Cyan,
                Color::LightBlue,
                Color::LightCyan,
            ],
            background: Color::Reset,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text (prompt, command bar).
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for block headings.
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for highlighted names.
    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Style for hyperlinks.
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for echoed input.
    pub fn echo_style(&self) -> Style {
        Style::default().fg(self.echo)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for the n-th tag in a group.
    pub fn tag_style(&self, index: usize) -> Style {
        Style::default().fg(self.tag_palette[index % self.tag_palette.len()])
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the highlight color (for CLI output).
    pub fn highlight_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.highlight), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
pub(crate) const ANSI_RESET: &str = "\x1b[0m";

/// ANSI bold sequence
pub(crate) const ANSI_BOLD: &str = "\x1b[1m";

/// Convert a ratatui Color to an ANSI escape code.
pub(crate) fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}
