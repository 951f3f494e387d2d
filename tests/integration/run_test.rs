//! Integration tests for the run command (CLI)

use tempfile::TempDir;

use crate::helpers::{run_termfolio, temp_profile};

#[test]
fn run_help_prints_prompt_and_command_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["run", "help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("johndoe@portfolio:~$ help\n"));
    assert!(stdout.contains("📋 Available Commands:"));
    assert!(stdout.contains("  website-links  - Coding profiles"));
}

#[test]
fn run_alias_matches_canonical_output() {
    let dir = TempDir::new().unwrap();
    let (canonical, _, _) = run_termfolio(dir.path(), &["run", "projects"]);
    let (alias, _, _) = run_termfolio(dir.path(), &["run", "portfolio"]);

    let strip_prompt = |s: &str| s.lines().skip(1).collect::<Vec<_>>().join("\n");
    assert_eq!(strip_prompt(&canonical), strip_prompt(&alias));
    assert!(canonical.contains("E-Commerce Platform"));
    assert!(canonical.contains("Live Demo <https://ecommerce-demo.johndoe.dev>"));
}

#[test]
fn run_unrecognized_echoes_input_and_succeeds() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["run", "xyz123"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("'xyz123' is not recognized as an internal or external command."));
    assert!(stdout.contains("Type 'help' to see all available commands."));
}

#[test]
fn run_blank_input_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["run", "   "]);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn run_json_reports_canonical_commands() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) =
        run_termfolio(dir.path(), &["run", "--json", "links", "bogus", "cls"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["input"], "links");
    assert_eq!(entries[0]["command"], "website-links");
    assert_eq!(entries[0]["output"][0], "🔗 Professional Profile Links");

    assert!(entries[1]["command"].is_null());
    assert_eq!(entries[2]["command"], "clear");
    assert!(entries[2]["output"].as_array().unwrap().is_empty());
}

#[test]
fn run_with_custom_profile() {
    let dir = TempDir::new().unwrap();
    let (_profile_dir, profile) = temp_profile();
    let (stdout, stderr, exit_code) = run_termfolio(
        dir.path(),
        &["--profile", profile.to_str().unwrap(), "run", "tech"],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("ada@engine:~$ tech\n"));
    assert!(stdout.contains("Mathematics"));
    assert!(stdout.contains("[Analysis] [Bernoulli numbers]"));
}

#[test]
fn run_with_missing_profile_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let (_stdout, stderr, exit_code) = run_termfolio(
        dir.path(),
        &["--profile", missing.to_str().unwrap(), "run", "about"],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("nope.toml"));
}
