//! UI rendering helpers for TUI
//!
//! Boot screen, title line and layout utilities.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::shell::BootSequence;

/// Render the boot messages revealed so far in a centered box.
pub fn render_boot_screen(frame: &mut Frame, boot: &BootSequence, theme: &Theme) {
    let area = centered_rect(60, 40, frame.area());
    let messages = boot.visible_messages();
    let lines: Vec<Line<'static>> = messages
        .iter()
        .enumerate()
        .map(|(i, msg)| {
            let style = if i + 1 == messages.len() && !boot.is_ready() {
                theme.accent_bold_style()
            } else {
                theme.success_style()
            };
            Line::from(Span::styled(*msg, style))
        })
        .collect();

    let boot_box = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" boot "),
    );
    frame.render_widget(boot_box, area);
}

/// Render the centered title line.
pub fn render_title(frame: &mut Frame, area: Rect, name: &str, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!("{} Portfolio", name),
        theme.heading_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
