//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Run termfolio with colors disabled and an isolated config path.
///
/// Returns (stdout, stderr, exit code).
pub fn run_termfolio(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = termfolio_cmd(config_dir)
        .args(args)
        .output()
        .expect("Failed to execute termfolio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Base command with colors off and config pointed into `config_dir`.
pub fn termfolio_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termfolio"));
    cmd.env("NO_COLOR", "1")
        .env("TERMFOLIO_CONFIG", config_file(config_dir))
        .env_remove("RUST_LOG");
    cmd
}

pub fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join("config.toml")
}

/// A minimal replacement profile.
pub const CUSTOM_PROFILE: &str = r#"
[owner]
name = "Ada Lovelace"
handle = "ada"
host = "engine"

[about]
title = "About Ada"
[[about.sections]]
kind = "text"
lines = ["First programmer."]

[skills]
title = "Skills"
[[skills.sections]]
kind = "tags"
heading = "Mathematics"
tags = ["Analysis", "Bernoulli numbers"]

[projects]
title = "Projects"

[certifications]
title = "Certifications"

[education]
title = "Education"

[website_links]
title = "Links"

[contact]
title = "Contact"
[[contact.sections]]
kind = "links"
items = [{ label = "Email", url = "mailto:ada@example.com" }]
"#;

/// Write [`CUSTOM_PROFILE`] into a fresh temp dir.
pub fn temp_profile() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.toml");
    std::fs::write(&path, CUSTOM_PROFILE).unwrap();
    (dir, path)
}
