//! calcpad: keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! calcpad tui                         # Interactive terminal calculator
//! calcpad tui --log-file calcpad.log  # ...with logs written to a file
//! calcpad eval "12+7*2="              # Prints 38
//! calcpad eval --trace "5/0="         # Prints every intermediate display
//! calcpad config                      # Effective configuration as JSON
//! ```

use calcpad_cli::{
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, LogFallback, OutputFormat,
    Runner, Verbosity,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);

    match cli.command {
        Commands::Tui => {
            logging::init(&config, LogFallback::Disabled)?;
            Runner::new(config).tui()
        }
        Commands::Eval(args) => {
            logging::init(&config, LogFallback::Stderr)?;
            Runner::new(config).eval(&args.keys, args.trace).map(|_| ())
        }
        Commands::Config => Runner::new(config).show_config(),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    let format: OutputFormat = match &cli.command {
        Commands::Eval(args) => args.format.into(),
        Commands::Tui | Commands::Config => OutputFormat::Text,
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
}
