//! Screen layout for the portfolio shell

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Viewports at least this wide get the ID card column.
pub const ID_CARD_MIN_WIDTH: u16 = 100;

/// Areas of the shell screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub title: Rect,
    pub id_card: Option<Rect>,
    pub terminal: Rect,
    pub command_bar: Rect,
    pub footer: Rect,
}

/// Split the frame into title, body, command bar and footer.
///
/// The body gets a 25% left column for the ID card when `show_id_card`
/// is set and the frame is wide enough.
pub fn build_shell_layout(area: Rect, show_id_card: bool) -> ShellLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Command bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let (id_card, terminal) = if show_id_card && area.width >= ID_CARD_MIN_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(rows[1]);
        (Some(cols[0]), cols[1])
    } else {
        (None, rows[1])
    };

    ShellLayout {
        title: rows[0],
        id_card,
        terminal,
        command_bar: rows[2],
        footer: rows[3],
    }
}
