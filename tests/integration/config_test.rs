//! Integration tests for the config subcommands

use tempfile::TempDir;

use crate::helpers::{config_file, run_termfolio};

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), config_file(dir.path()).display().to_string());
}

#[test]
fn config_show_without_file_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[ui]"));
    assert!(stdout.contains("theme = \"matrix\""));
    assert!(stdout.contains("boot_delay_ms = 800"));
}

#[test]
fn config_show_applies_cli_overrides() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, _exit_code) =
        run_termfolio(dir.path(), &["--theme", "ocean", "--no-boot", "config", "show"]);

    assert!(stdout.contains("theme = \"ocean\""));
    assert!(stdout.contains("skip_boot = true"));
}

#[test]
fn config_init_writes_file_once() {
    let dir = TempDir::new().unwrap();
    let path = config_file(dir.path());

    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Wrote"));
    assert!(path.exists());

    std::fs::write(&path, "[ui]\ntheme = \"classic\"\n").unwrap();

    // Non-interactive stdin declines the overwrite prompt
    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes made."));
    assert!(std::fs::read_to_string(&path).unwrap().contains("classic"));

    let (_stdout, _stderr, exit_code) =
        run_termfolio(dir.path(), &["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
    assert!(std::fs::read_to_string(&path).unwrap().contains("matrix"));
}

#[test]
fn invalid_config_file_reports_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(config_file(dir.path()), "[ui\n").unwrap();
    let (_stdout, stderr, exit_code) = run_termfolio(dir.path(), &["run", "help"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("config.toml"));
}

#[test]
fn config_show_reads_file_from_env_location() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        config_file(dir.path()),
        "[ui]\ntheme = \"ocean\"\nboot_delay_ms = 200\n",
    )
    .unwrap();
    let (stdout, _stderr, exit_code) = run_termfolio(dir.path(), &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("theme = \"ocean\""));
    assert!(stdout.contains("boot_delay_ms = 200"));
}
