//! `run` subcommand: execute inputs and print the transcript

use anyhow::Result;
use ratatui::text::Line;
use termfolio::batch::{run_inputs, RunOutput, RunRecord};
use termfolio::cli::GlobalArgs;
use termfolio::content::render::prompt_line;
use termfolio::content::{line_to_ansi, RenderContext};
use termfolio::Session;

#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs, inputs: &[String], json: bool) -> Result<()> {
    let config = super::load_config(global)?;
    let profile = super::load_profile(&config)?;
    let theme = super::theme(&config);
    let ctx = RenderContext::new(&profile, &theme);

    let mut session = Session::headless();
    let records = run_inputs(&mut session, inputs, ctx);

    if json {
        let outputs: Vec<RunOutput<'_>> = records.iter().map(RunRecord::to_output).collect();
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    let color = super::use_color();
    let print = |line: &Line<'_>| println!("{}", line_to_ansi(line, color));

    for record in records.iter().filter(|r| !r.input.trim().is_empty()) {
        print(&prompt_line(&profile.owner, &record.input, &theme));
        for line in &record.lines {
            print(line);
        }
        println!();
    }
    Ok(())
}
