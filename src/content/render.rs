//! Projection from transcript data to styled terminal lines.
//!
//! Rendering never mutates session state. The same `Line`s feed the TUI
//! paragraph and, via [`line_to_ansi`] / [`line_to_plain`], CLI output.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::model::{Card, ContentBlock, Fact, Image, Link, Section};
use super::profile::{Owner, Profile};
use crate::shell::{Command, Response, Transcript, TranscriptEntry};
use crate::tui::theme::{color_to_ansi, Theme, ANSI_BOLD, ANSI_RESET};

/// Tip printed at the end of `help`.
pub const HELP_TIP: &str =
    "💡 Tips: Use ↑↓ for command history, Tab for completion, natural language works too!";

/// Everything a render pass needs to read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub profile: &'a Profile,
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(profile: &'a Profile, theme: &'a Theme) -> Self {
        Self { profile, theme }
    }
}

/// Render every entry in order.
pub fn render_transcript(transcript: &Transcript, ctx: RenderContext<'_>) -> Vec<Line<'static>> {
    transcript
        .entries()
        .iter()
        .flat_map(|entry| render_entry(entry, ctx))
        .collect()
}

/// Prompt line (omitted for system entries), response, blank separator.
pub fn render_entry(entry: &TranscriptEntry, ctx: RenderContext<'_>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !entry.input().is_empty() {
        lines.push(prompt_line(&ctx.profile.owner, entry.input(), ctx.theme));
    }
    lines.extend(render_response(entry.response(), ctx));
    lines.push(Line::default());
    lines
}

/// Prompt followed by echoed input.
pub fn prompt_line(owner: &Owner, input: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(owner.prompt(), theme.accent_style()),
        Span::raw(" "),
        Span::styled(input.to_string(), theme.echo_style()),
    ])
}

pub fn render_response(response: &Response, ctx: RenderContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    match response {
        Response::Welcome => render_welcome(&ctx.profile.owner, theme),
        Response::Help => render_help(theme),
        Response::Content { command } => match ctx.profile.block(*command) {
            Some(block) => render_block(block, theme),
            None if *command == Command::Help => render_help(theme),
            None => Vec::new(),
        },
        Response::Unrecognized { input } => render_unrecognized(input, theme),
        Response::Completions { candidates } => render_completions(candidates, theme),
    }
}

fn render_welcome(owner: &Owner, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("🚀 Welcome to {}'s Portfolio Terminal", owner.name),
            theme.success_style(),
        )),
        Line::from(vec![
            Span::styled("Type ", theme.text_style()),
            Span::styled("'help'", theme.highlight_style()),
            Span::styled(" to see available commands.", theme.text_style()),
        ]),
    ]
}

fn render_help(theme: &Theme) -> Vec<Line<'static>> {
    let width = Command::ALL
        .iter()
        .map(|c| c.name().width())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from(Span::styled(
        "📋 Available Commands:",
        theme.heading_style(),
    ))];
    for cmd in Command::ALL {
        let pad = " ".repeat(width - cmd.name().width());
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(cmd.name(), theme.highlight_style()),
            Span::raw(pad),
            Span::styled(format!(" - {}", cmd.description()), theme.text_style()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        HELP_TIP,
        theme.text_secondary_style(),
    )));
    lines
}

fn render_unrecognized(input: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("'{}' is not recognized as an internal or external command.", input),
            theme.error_style(),
        )),
        Line::from(Span::styled(
            "Type 'help' to see all available commands.",
            theme.text_style(),
        )),
    ]
}

fn render_completions(candidates: &[Command], theme: &Theme) -> Vec<Line<'static>> {
    let names: Vec<&str> = candidates.iter().map(|c| c.name()).collect();
    vec![Line::from(Span::styled(
        format!("Available completions: {}", names.join(", ")),
        theme.highlight_style(),
    ))]
}

/// Render a profile content block.
pub fn render_block(block: &ContentBlock, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(block.heading(), theme.heading_style()))];
    for section in &block.sections {
        render_section(section, theme, &mut lines);
    }
    lines
}

fn render_section(section: &Section, theme: &Theme, out: &mut Vec<Line<'static>>) {
    match section {
        Section::Text { lines } => {
            out.extend(
                lines
                    .iter()
                    .map(|l| Line::from(Span::styled(l.clone(), theme.text_style()))),
            );
        }
        Section::Facts { items } => {
            out.extend(items.iter().map(|f| fact_line(f, theme)));
        }
        Section::Tags { heading, tags } => {
            out.push(Line::from(Span::styled(
                heading.clone(),
                theme.highlight_style(),
            )));
            let mut spans = vec![Span::raw("  ")];
            for (i, tag) in tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!("[{}]", tag), theme.tag_style(i)));
            }
            out.push(Line::from(spans));
        }
        Section::Cards { items } => {
            for (i, card) in items.iter().enumerate() {
                if i > 0 {
                    out.push(Line::default());
                }
                render_card(card, theme, out);
            }
        }
        Section::Links { items } => {
            out.extend(items.iter().map(|l| link_line(l, "  ", theme)));
        }
        Section::Note { text } => {
            out.push(Line::from(Span::styled(text.clone(), theme.success_style())));
        }
        Section::Image(image) => out.push(image_line(image, "", theme)),
    }
}

fn render_card(card: &Card, theme: &Theme, out: &mut Vec<Line<'static>>) {
    const INDENT: &str = "    ";
    out.push(Line::from(vec![
        Span::styled("  ▸ ", theme.accent_style()),
        Span::styled(card.title.clone(), theme.highlight_style()),
    ]));
    if let Some(subtitle) = &card.subtitle {
        out.push(Line::from(Span::styled(
            format!("{}{}", INDENT, subtitle),
            theme.text_secondary_style(),
        )));
    }
    if let Some(image) = &card.image {
        out.push(image_line(image, INDENT, theme));
    }
    for detail in &card.details {
        out.push(Line::from(Span::styled(
            format!("{}{}", INDENT, detail),
            theme.text_style(),
        )));
    }
    for link in &card.links {
        out.push(link_line(link, INDENT, theme));
    }
}

fn fact_line(fact: &Fact, theme: &Theme) -> Line<'static> {
    let prefix = if fact.icon.is_empty() {
        String::new()
    } else {
        format!("{} ", fact.icon)
    };
    Line::from(vec![
        Span::styled(format!("{}{}: ", prefix, fact.label), theme.text_secondary_style()),
        Span::styled(fact.value.clone(), theme.text_style()),
    ])
}

fn link_line(link: &Link, indent: &str, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(indent.to_string())];
    if let Some(icon) = &link.icon {
        spans.push(Span::raw(format!("{} ", icon)));
    }
    spans.push(Span::styled(link.label.clone(), theme.link_style()));
    spans.push(Span::styled(
        format!(" <{}>", link.url),
        theme.text_secondary_style(),
    ));
    Line::from(spans)
}

fn image_line(image: &Image, indent: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}[img: {}]", indent, image.alt),
        theme.text_secondary_style(),
    ))
}

/// Concatenate span contents, dropping all styling.
pub fn line_to_plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Render a line for terminal output, with ANSI color codes when `color`
/// is set and as [`line_to_plain`] otherwise.
pub fn line_to_ansi(line: &Line<'_>, color: bool) -> String {
    if !color {
        return line_to_plain(line);
    }
    let mut out = String::new();
    for span in &line.spans {
        let color = span.style.fg.map(color_to_ansi).unwrap_or("");
        let bold = span.style.add_modifier.contains(Modifier::BOLD);
        if color.is_empty() && !bold {
            out.push_str(&span.content);
            continue;
        }
        out.push_str(color);
        if bold {
            out.push_str(ANSI_BOLD);
        }
        out.push_str(&span.content);
        out.push_str(ANSI_RESET);
    }
    out
}
