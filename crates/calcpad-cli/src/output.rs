//! Output formatting

use calcpad::core::DisplayFrame;
use console::{style, Term};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;
use crate::runner::EvalStep;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Renders a display frame as one line: `expression | result`, or just the result
#[must_use]
pub fn render_frame(frame: &DisplayFrame, use_color: bool) -> String {
    if !use_color {
        return frame.to_string();
    }
    let result = if frame.is_error() {
        style(&frame.result).red().bold().to_string()
    } else {
        style(&frame.result).green().bold().to_string()
    };
    if frame.expression.is_empty() {
        result
    } else {
        format!("{} | {result}", style(&frame.expression).dim())
    }
}

/// Renders one traced key press
#[must_use]
pub fn render_step(step: &EvalStep, use_color: bool) -> String {
    let key = format!("{:>3}", step.key);
    let key = if use_color {
        style(key).yellow().to_string()
    } else {
        key
    };
    format!("{key}  {}", render_frame(&step.frame(), use_color))
}

/// Writes results to stdout and notes to stderr
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a display frame
    pub fn frame(&self, frame: &DisplayFrame) -> CliResult<()> {
        self.out.write_line(&render_frame(frame, self.use_color))?;
        Ok(())
    }

    /// Print one traced key press
    pub fn step(&self, step: &EvalStep) -> CliResult<()> {
        self.out.write_line(&render_step(step, self.use_color))?;
        Ok(())
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        self.out.write_line(&serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    /// Print an informational note (suppressed in quiet mode)
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };

        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }
}
