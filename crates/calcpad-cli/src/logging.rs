//! Tracing subscriber setup

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};

/// Environment variable holding a log filter, e.g. `calcpad=trace`
pub const LOG_ENV: &str = "CALCPAD_LOG";

/// Where logs go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFallback {
    /// Write to stderr
    Stderr,
    /// Install no subscriber
    Disabled,
}

/// Builds the filter from an explicit directive string, falling back to the verbosity level
pub fn build_filter(directives: Option<&str>, verbosity: Verbosity) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber for this process.
///
/// A configured log file always wins. The TUI passes [`LogFallback::Disabled`] so
/// nothing is written over the alternate screen.
pub fn init(config: &CliConfig, fallback: LogFallback) -> CliResult<()> {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directives.as_deref(), config.verbosity);

    if let Some(path) = &config.log_file {
        return init_file(path, filter);
    }

    match fallback {
        LogFallback::Stderr => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init()
            .map_err(|e| CliError::logging(e.to_string())),
        LogFallback::Disabled => Ok(()),
    }
}

fn init_file(path: &Path, filter: EnvFilter) -> CliResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    tracing::debug!(path = %path.display(), "logging to file");
    Ok(())
}
