//! Hanging ID card shown beside the terminal on wide viewports

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::content::Owner;
use crate::tui::theme::Theme;

/// Rows of lanyard above the card.
const LANYARD_ROWS: u16 = 3;

/// Photo placeholder drawn inside the card.
const PHOTO: [&str; 5] = ["┌───────┐", "│  ◠ ◠  │", "│   ▿   │", "│  ╰─╯  │", "└───────┘"];

/// Owner badge: a lanyard of dots above a bordered card with photo, name and handle.
pub struct IdCard<'a> {
    owner: &'a Owner,
    theme: &'a Theme,
}

impl<'a> IdCard<'a> {
    pub fn new(owner: &'a Owner, theme: &'a Theme) -> Self {
        Self { owner, theme }
    }

    /// Card body lines, top to bottom.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = PHOTO
            .iter()
            .map(|row| Line::from(Span::styled(*row, self.theme.text_secondary_style())))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.owner.name.clone(),
            self.theme.heading_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("@{}", self.owner.handle),
            self.theme.accent_style(),
        )));
        lines
    }
}

/// Centered lanyard row of dots for a column of `width` cells.
fn lanyard_row(width: u16) -> String {
    let dot = "•";
    let pad = (width as usize).saturating_sub(dot.width()) / 2;
    format!("{}{}", " ".repeat(pad), dot)
}

impl Widget for IdCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height <= LANYARD_ROWS || area.width < 4 {
            return;
        }

        for row in 0..LANYARD_ROWS {
            buf.set_string(
                area.x,
                area.y + row,
                lanyard_row(area.width),
                self.theme.accent_style(),
            );
        }

        let lines = self.lines();
        // Border rows plus content
        let card_height = (lines.len() as u16 + 2).min(area.height - LANYARD_ROWS);
        let card_area = Rect::new(area.x, area.y + LANYARD_ROWS, area.width, card_height);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(" ID "),
            )
            .render(card_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Profile;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn lines_end_with_name_and_handle() {
        let profile = Profile::builtin().unwrap();
        let theme = Theme::default();
        let lines = IdCard::new(&profile.owner, &theme).lines();
        let texts: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(texts[texts.len() - 2], "John Doe");
        assert_eq!(texts[texts.len() - 1], "@johndoe");
    }

    #[test]
    fn lanyard_row_is_centered() {
        assert_eq!(lanyard_row(9), "    •");
        assert_eq!(lanyard_row(1), "•");
    }

    #[test]
    fn renders_lanyard_and_card() {
        let profile = Profile::builtin().unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);
        IdCard::new(&profile.owner, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[0].contains('•'));
        assert!(rows[3].starts_with('┌'));
        assert!(text.contains("John Doe"));
        assert!(text.contains("@johndoe"));
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let profile = Profile::builtin().unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        IdCard::new(&profile.owner, &theme).render(area, &mut buf);
        assert!(!buffer_text(&buf).contains('•'));
    }
}
