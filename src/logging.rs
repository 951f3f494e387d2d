//! Logging initialization
//!
//! Interactive sessions own the terminal, so they log only to a file when
//! one is given. Everything else logs to stderr. `RUST_LOG` overrides the default filter.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Human-readable records on stderr
    Stderr,
    /// Append to a file (no ANSI colors)
    File(PathBuf),
    /// Drop everything
    Off,
}

static INIT_ONCE: Once = Once::new();

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "termfolio=debug"
    } else {
        "termfolio=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// ANSI escapes on stderr unless `NO_COLOR` is set or stderr is not a TTY.
fn stderr_ansi() -> bool {
    ansi_enabled(std::env::var_os("NO_COLOR").is_some(), atty::is(atty::Stream::Stderr))
}

fn ansi_enabled(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}

fn init_stderr(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(stderr_ansi())
        .with_target(false)
        .finish()
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global subscriber. Later calls are no-ops.
///
/// A log file that cannot be opened is reported on stderr and logging
/// falls back to [`LogTarget::Stderr`].
pub fn init(target: LogTarget, verbose: bool) {
    INIT_ONCE.call_once(|| match target {
        LogTarget::Stderr => init_stderr(verbose),
        LogTarget::File(path) => match open_log_file(&path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(verbose))
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .finish()
                    .init();
            }
            Err(err) => {
                eprintln!(
                    "warning: cannot open log file {}: {}; logging to stderr",
                    path.display(),
                    err
                );
                init_stderr(verbose);
            }
        },
        LogTarget::Off => tracing_subscriber::registry().init(),
    });
}
