//! Tracing setup
//!
//! While the TUI owns the terminal, log lines would corrupt the screen, so
//! they go to a file under the config directory. CLI commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{FinanceError, FinanceResult};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_filter(default_level: &str) -> FinanceResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| FinanceError::Config(format!("Invalid log level '{}': {}", default_level, e)))
}

/// Install the global tracing subscriber
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_tracing(target: &LogTarget, default_level: &str) -> FinanceResult<()> {
    let filter = build_filter(default_level)?;

    let installed = match target {
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    FinanceError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if installed.is_ok() {
        tracing::debug!(?target, "tracing initialized");
    }
    Ok(())
}
