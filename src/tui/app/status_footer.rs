//! Command bar and footer rendering for the portfolio shell
//!
//! The command bar lists every canonical command; the footer lists key hints.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::shell::Command;
use crate::tui::theme::Theme;

/// Key hints shown once the shell is ready.
pub const SHELL_KEYS: &[(&str, &str)] = &[
    ("Enter", "run"),
    ("↑↓", "history"),
    ("Tab", "complete"),
    ("PgUp/PgDn", "scroll"),
    ("Ctrl-L", "clear"),
    ("Esc", "quit"),
];

/// Key hints shown while booting.
pub const BOOT_KEYS: &[(&str, &str)] = &[("Esc", "quit")];

/// Render the centered command bar.
pub fn render_command_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    let bar = Paragraph::new(Line::from(build_command_bar_spans(theme))).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("Tab", "complete"), ("Esc", "quit")]` renders as
/// `"Tab: complete | Esc: quit"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn build_command_bar_spans(theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(Command::ALL.len() * 2);
    for (i, cmd) in Command::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(cmd.name(), theme.accent_style()));
    }
    spans
}

/// Keys use the accent color, descriptions the secondary color,
/// entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
