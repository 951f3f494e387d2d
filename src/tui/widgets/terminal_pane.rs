//! Scrollable transcript pane with the live input line at the bottom

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

/// Bordered, wrapped view of rendered transcript lines.
///
/// `scroll_back` counts rows up from the bottom; zero follows the newest
/// output and values past the top are clamped.
pub struct TerminalPane<'a> {
    paragraph: Paragraph<'static>,
    title: String,
    theme: &'a Theme,
    scroll_back: u16,
}

impl<'a> TerminalPane<'a> {
    pub fn new(lines: Vec<Line<'static>>, title: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            paragraph: Paragraph::new(lines)
                .style(theme.text_style())
                .wrap(Wrap { trim: false }),
            title: title.into(),
            theme,
            scroll_back: 0,
        }
    }

    pub fn scroll_back(mut self, rows: u16) -> Self {
        self.scroll_back = rows;
        self
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(format!(" {} ", self.title))
    }

    /// Rows hidden above the viewport when following the bottom.
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = self.block().inner(area);
        let total = self.paragraph.line_count(inner.width);
        u16::try_from(total)
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height)
    }
}

impl Widget for TerminalPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max = self.max_scroll(area);
        let offset = max - self.scroll_back.min(max);
        let block = self.block();
        self.paragraph
            .scroll((offset, 0))
            .block(block)
            .render(area, buf);
    }
}
