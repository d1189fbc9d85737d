//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// calcpad: keypad calculator with immediate left-to-right evaluation
#[derive(Parser, Debug)]
#[command(name = "calcpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", env = "CALCPAD_COLOR", global = true)]
    pub color: ColorArg,

    /// Write logs to this file
    #[arg(long, env = "CALCPAD_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive terminal calculator
    Tui,

    /// Evaluate a key sequence and print the display
    ///
    /// Every non-whitespace character is one key: digits, `.`, `+ - * /`,
    /// `=` (equals), `%` (percent) and `_` (sign toggle).
    Eval(EvalArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keys to press, e.g. "12+7*2="
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use crate::output::OutputFormat;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_tui_command() {
            let cli = Cli::parse_from(["calcpad", "tui"]);
            assert!(matches!(cli.command, Commands::Tui));
            assert!(cli.log_file.is_none());
        }

        #[test]
        fn test_parse_tui_with_log_file() {
            let cli = Cli::parse_from(["calcpad", "tui", "--log-file", "/tmp/calcpad.log"]);
            assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/calcpad.log")));
        }

        #[test]
        fn test_parse_config_command() {
            let cli = Cli::parse_from(["calcpad", "config"]);
            assert!(matches!(cli.command, Commands::Config));
        }

        #[test]
        fn test_parse_verbose_count() {
            let cli = Cli::parse_from(["calcpad", "-vv", "config"]);
            assert_eq!(cli.verbose, 2);
            assert!(!cli.quiet);
        }

        #[test]
        fn test_parse_global_flags_after_subcommand() {
            let cli = Cli::parse_from(["calcpad", "config", "--quiet", "--color", "never"]);
            assert!(cli.quiet);
            assert_eq!(cli.color, ColorArg::Never);
        }

        #[test]
        fn test_missing_subcommand_is_error() {
            assert!(Cli::try_parse_from(["calcpad"]).is_err());
        }
    }

    mod eval_tests {
        use super::*;

        #[test]
        fn test_parse_eval() {
            let cli = Cli::parse_from(["calcpad", "eval", "2+3="]);
            let Commands::Eval(args) = cli.command else {
                panic!("expected eval");
            };
            assert_eq!(args.keys, "2+3=");
            assert!(!args.trace);
            assert_eq!(args.format, FormatArg::Text);
        }

        #[test]
        fn test_parse_eval_leading_minus() {
            let cli = Cli::parse_from(["calcpad", "eval", "-5="]);
            let Commands::Eval(args) = cli.command else {
                panic!("expected eval");
            };
            assert_eq!(args.keys, "-5=");
        }

        #[test]
        fn test_parse_eval_trace_json() {
            let cli = Cli::parse_from(["calcpad", "eval", "--trace", "--format", "json", "1+1="]);
            let Commands::Eval(args) = cli.command else {
                panic!("expected eval");
            };
            assert!(args.trace);
            assert_eq!(args.format, FormatArg::Json);
        }

        #[test]
        fn test_eval_requires_keys() {
            assert!(Cli::try_parse_from(["calcpad", "eval"]).is_err());
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_color_arg_conversion() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_format_arg_conversion() {
            assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
            assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        }
    }
}
