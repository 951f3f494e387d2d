//! Integration tests for top-level CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{config_file, run_termfolio};

fn termfolio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("TERMFOLIO_CONFIG", config_file(dir.path()))
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("commands"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--no-boot"));
}

#[test]
fn version_reports_package_version() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "termfolio {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_theme_is_rejected() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["--theme", "neon", "run", "help"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'neon'"));
}

#[test]
fn unopenable_log_file_warns_and_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let log_file = blocker.join("x.log");

    termfolio(&dir)
        .args(["--log-file", log_file.to_str().unwrap(), "-v", "run", "help"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: cannot open log file"))
        .stderr(predicate::str::contains("x.log"))
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("\x1b[").not());
}

// ============================================================================
// Interactive mode without a terminal
// ============================================================================

#[test]
fn interactive_mode_requires_tty() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"))
        .stderr(predicate::str::contains("termfolio run"));
}

// ============================================================================
// commands
// ============================================================================

#[test]
fn commands_lists_canonical_names_and_aliases() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("website-links"))
        .stdout(predicate::str::contains("(aliases: portfolio, work, code)"));
}

#[test]
fn snapshot_cli_commands() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = run_termfolio(dir.path(), &["commands"]);
    let output = format!(
        "=== termfolio commands ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("cli_commands", output);
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_generates_bash_script() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_termfolio"));
}

#[test]
fn completions_rejects_unknown_shell() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["completions", "tcsh"])
        .assert()
        .code(2);
}
