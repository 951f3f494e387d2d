//! `commands` subcommand: canonical commands with descriptions and aliases

use anyhow::Result;
use termfolio::cli::GlobalArgs;
use termfolio::shell::{AliasTable, Command};
use termfolio::tui::Theme;
use unicode_width::UnicodeWidthStr;

use super::paint;

/// One row per canonical command: name, description, aliases.
pub fn format_rows(aliases: &AliasTable) -> Vec<(String, &'static str, String)> {
    let width = Command::ALL
        .iter()
        .map(|c| c.name().width())
        .max()
        .unwrap_or(0);
    Command::ALL
        .iter()
        .map(|cmd| {
            let name = format!("{}{}", cmd.name(), " ".repeat(width - cmd.name().width()));
            let alias_list = aliases.aliases_for(*cmd).join(", ");
            (name, cmd.description(), alias_list)
        })
        .collect()
}

#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs) -> Result<()> {
    let theme = super::output_theme(global);
    for (name, description, aliases) in format_rows(&AliasTable::builtin()) {
        let suffix = if aliases.is_empty() {
            String::new()
        } else {
            format!("  (aliases: {})", aliases)
        };
        println!(
            "{}  {}{}",
            paint(&name, &theme, Theme::highlight_text),
            paint(description, &theme, Theme::primary_text),
            paint(&suffix, &theme, Theme::secondary_text)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_canonical_order_with_aliases() {
        let rows = format_rows(&AliasTable::builtin());
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].0.trim_end(), "help");
        assert_eq!(rows[3].0.trim_end(), "projects");
        assert_eq!(rows[3].2, "portfolio, work, code");
        assert!(rows[0].2.is_empty());
    }

    #[test]
    fn names_are_padded_to_same_width() {
        let rows = format_rows(&AliasTable::builtin());
        let widths: Vec<usize> = rows.iter().map(|r| r.0.width()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
