//! Development tasks for termfolio
//!
//! `cargo run -p xtask -- man [--out-dir DIR]` writes man pages for the CLI
//! and each subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;
use termfolio::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "termfolio development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    let name = cmd.get_name().to_string();
    write_page(out_dir, &name, cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let page_name = format!("{}-{}", name, sub.get_name());
        write_page(out_dir, &page_name, sub.clone())?;
    }
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let path = out_dir.join(format!("{}.1", name));
    let mut buf = Vec::new();
    Man::new(cmd).title(name).render(&mut buf)?;
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated {}", path.display());
    Ok(())
}
