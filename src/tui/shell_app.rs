//! Interactive portfolio shell
//!
//! [`ShellState`] holds everything the screen shows and reacts to keys and
//! clock ticks; it never touches the real terminal, so it can be driven and
//! drawn against a `TestBackend`. [`ShellApp`] pairs it with an [`App`] and
//! runs the event loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, text::Span, Frame};
use tracing::{debug, info};

use super::app::layout::build_shell_layout;
use super::app::status_footer::{render_command_bar, render_footer, BOOT_KEYS, SHELL_KEYS};
use super::app::App;
use super::theme::Theme;
use super::ui::{render_boot_screen, render_title};
use super::widgets::{IdCard, TerminalPane};
use crate::content::render::prompt_line;
use crate::content::{render_transcript, Profile, RenderContext};
use crate::shell::{BootState, Completion, Outcome, Session};

/// How often the event loop wakes up to advance the boot timer.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Cursor glyph after the input text.
const CURSOR: &str = "█";

/// Dimmed hint shown after the cursor while the input is empty.
const PLACEHOLDER: &str = "Type a command...";

/// Presentation settings for an interactive session.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub theme: Theme,
    pub boot_delay: Duration,
    pub skip_boot: bool,
    pub show_id_card: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            boot_delay: Duration::from_millis(crate::shell::boot::DEFAULT_STEP_DELAY_MS),
            skip_boot: false,
            show_id_card: true,
        }
    }
}

/// Whether the event loop should keep going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Screen state of the interactive shell.
pub struct ShellState {
    session: Session,
    profile: Profile,
    options: ShellOptions,
    /// Rows scrolled up from the bottom of the transcript
    scroll_back: u16,
    /// Measured at the last draw
    max_scroll: u16,
    page_size: u16,
    last_boot_step: Instant,
}

impl ShellState {
    pub fn new(profile: Profile, options: ShellOptions, now: Instant) -> Self {
        let session = if options.skip_boot {
            Session::booted()
        } else {
            Session::new()
        };
        Self {
            session,
            profile,
            options,
            scroll_back: 0,
            max_scroll: 0,
            page_size: 1,
            last_boot_step: now,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    /// Advance the boot sequence once per elapsed step delay.
    pub fn tick(&mut self, now: Instant) {
        if self.session.is_ready() {
            return;
        }
        if now.duration_since(self.last_boot_step) >= self.options.boot_delay {
            self.last_boot_step = now;
            if self.session.tick_boot() == BootState::Ready {
                info!("boot complete");
                self.scroll_back = 0;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return InputResult::Quit,
            KeyCode::Char('c') if ctrl => return InputResult::Quit,
            _ => {}
        }
        if !self.session.is_ready() {
            return InputResult::Continue;
        }

        match key.code {
            KeyCode::Char('l') if ctrl => {
                self.session.execute("clear");
                self.scroll_back = 0;
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.session.push_char(c);
            }
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Enter => {
                if self.session.submit() != Outcome::Ignored {
                    self.scroll_back = 0;
                }
            }
            KeyCode::Up => self.session.recall_previous(),
            KeyCode::Down => self.session.recall_next(),
            KeyCode::Tab => {
                if matches!(self.session.complete(), Completion::Ambiguous(_)) {
                    self.scroll_back = 0;
                }
            }
            KeyCode::PageUp => {
                self.scroll_back = self
                    .scroll_back
                    .saturating_add(self.page_size)
                    .min(self.max_scroll);
                debug!(scroll_back = self.scroll_back, "scroll up");
            }
            KeyCode::PageDown => {
                self.scroll_back = self.scroll_back.saturating_sub(self.page_size);
            }
            _ => {}
        }
        InputResult::Continue
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let theme = &self.options.theme;
        if !self.session.is_ready() {
            render_boot_screen(frame, self.session.boot(), theme);
            let area = frame.area();
            if area.height > 0 {
                let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);
                render_footer(frame, footer, BOOT_KEYS, theme);
            }
            return;
        }

        let layout = build_shell_layout(frame.area(), self.options.show_id_card);
        let owner = &self.profile.owner;

        render_title(frame, layout.title, &owner.name, theme);
        if let Some(area) = layout.id_card {
            frame.render_widget(IdCard::new(owner, theme), area);
        }

        let ctx = RenderContext::new(&self.profile, theme);
        let mut lines = render_transcript(self.session.transcript(), ctx);
        let mut input_line = prompt_line(owner, self.session.input(), theme);
        input_line.push_span(Span::styled(CURSOR, theme.accent_style()));
        if self.session.input().is_empty() {
            input_line.push_span(Span::styled(PLACEHOLDER, theme.text_secondary_style()));
        }
        lines.push(input_line);

        let pane = TerminalPane::new(lines, owner.prompt(), theme);
        self.max_scroll = pane.max_scroll(layout.terminal);
        self.page_size = layout.terminal.height.saturating_sub(3).max(1);
        self.scroll_back = self.scroll_back.min(self.max_scroll);
        frame.render_widget(pane.scroll_back(self.scroll_back), layout.terminal);

        render_command_bar(frame, layout.command_bar, theme);
        render_footer(frame, layout.footer, SHELL_KEYS, theme);
    }
}

/// Interactive shell bound to the real terminal.
pub struct ShellApp {
    app: App,
    state: ShellState,
}

impl ShellApp {
    pub fn new(profile: Profile, options: ShellOptions) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        let state = ShellState::new(profile, options, Instant::now());
        Ok(Self { app, state })
    }

    fn draw(&mut self) -> Result<()> {
        let state = &mut self.state;
        self.app.draw(|frame| state.render(frame))
    }

    /// Run until the visitor quits. The terminal is restored when `self` drops.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        info!("interactive shell started");
        while self.app.is_running() {
            self.state.tick(Instant::now());
            self.draw()?;
            if let Some(key) = self.app.next_key()? {
                if self.state.handle_key(key) == InputResult::Quit {
                    self.app.quit();
                }
            }
        }
        info!(
            entries = self.state.session().transcript().len(),
            "interactive shell finished"
        );
        Ok(())
    }
}
