//! calcpad CLI library
//!
//! Command-line front end for the calcpad keypad calculator: an interactive
//! terminal UI and a key-sequence evaluator for scripts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::LogFallback;
pub use output::{render_frame, render_step, OutputFormat, Reporter};
pub use runner::{eval_keys, EvalReport, EvalStep, Runner};
