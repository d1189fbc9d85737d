//! Command execution

use std::io;

use calcpad::core::{Calculator, DisplayFrame, InputEvent};
use calcpad::tui::{self, CalculatorApp};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Reporter};

/// One key press from an evaluated sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalStep {
    /// Zero-based character position in the sequence
    pub position: usize,
    /// The character pressed
    pub key: char,
    /// The event it produced
    pub event: InputEvent,
    /// Expression field after the press
    pub expression: String,
    /// Result field after the press
    pub result: String,
}

impl EvalStep {
    /// Display after this step
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame {
            expression: self.expression.clone(),
            result: self.result.clone(),
        }
    }
}

/// Outcome of evaluating a key sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalReport {
    /// The sequence as given
    pub keys: String,
    /// Final expression field
    pub expression: String,
    /// Final result field
    pub result: String,
    /// Whether the result shows the error text
    pub error: bool,
    /// Every press, in order
    pub steps: Vec<EvalStep>,
}

impl EvalReport {
    /// Final display
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame {
            expression: self.expression.clone(),
            result: self.result.clone(),
        }
    }
}

/// Feeds every non-whitespace character of `keys` to a fresh calculator.
///
/// The whole sequence is validated before anything is pressed.
pub fn eval_keys(keys: &str) -> CliResult<EvalReport> {
    let mut events = Vec::new();
    for (position, key) in keys.chars().enumerate() {
        if key.is_whitespace() {
            continue;
        }
        let mut buf = [0u8; 4];
        let event = InputEvent::from_key(key.encode_utf8(&mut buf))
            .ok_or_else(|| CliError::invalid_key(key, position))?;
        events.push((position, key, event));
    }

    let mut calculator = Calculator::new();
    let steps: Vec<EvalStep> = events
        .into_iter()
        .map(|(position, key, event)| {
            let frame = calculator.dispatch(event);
            EvalStep {
                position,
                key,
                event,
                expression: frame.expression,
                result: frame.result,
            }
        })
        .collect();

    let frame = calculator.frame();
    Ok(EvalReport {
        keys: keys.to_string(),
        error: frame.is_error(),
        expression: frame.expression,
        result: frame.result,
        steps,
    })
}

/// Runs CLI subcommands against one configuration
#[derive(Debug)]
pub struct Runner {
    config: CliConfig,
    reporter: Reporter,
}

impl Runner {
    /// Create a new runner
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let reporter = Reporter::new(config.use_color(), config.verbosity.is_quiet());
        Self { config, reporter }
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Evaluate a key sequence and print the outcome
    pub fn eval(&self, keys: &str, trace: bool) -> CliResult<EvalReport> {
        let report = eval_keys(keys)?;
        info!(keys, result = %report.result, "evaluated");

        match self.config.format {
            OutputFormat::Json => {
                if trace {
                    self.reporter.json(&report)?;
                } else {
                    self.reporter.json(&report.frame())?;
                }
            }
            OutputFormat::Text => {
                if trace {
                    for step in &report.steps {
                        self.reporter.step(step)?;
                    }
                }
                self.reporter.frame(&report.frame())?;
            }
        }
        Ok(report)
    }

    /// Print the effective configuration as JSON
    pub fn show_config(&self) -> CliResult<()> {
        self.reporter.json(&self.config)
    }

    /// Run the interactive calculator until the user quits
    pub fn tui(&self) -> CliResult<()> {
        enable_raw_mode().map_err(|e| CliError::terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(CliError::terminal(e.to_string()));
        }

        let mut app = CalculatorApp::new();
        let outcome = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(CliError::from)
            .and_then(|mut terminal| {
                let outcome = run_app(&mut terminal, &mut app);
                let _ = terminal.show_cursor();
                outcome
            });

        let restored = restore_terminal();
        outcome?;
        restored?;

        let frame = app.frame();
        self.reporter.info(&format!("Last display: {frame}"));
        Ok(())
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> CliResult<()> {
    info!("tui started");
    while !app.should_quit() {
        let area = terminal.draw(|frame| tui::render(app, frame))?.area;
        let ev = event::read()?;
        debug!(?ev, "terminal event");
        app.handle_event(ev, area);
    }
    info!(dispatched = app.calculator().dispatched(), "tui stopped");
    Ok(())
}

fn restore_terminal() -> CliResult<()> {
    disable_raw_mode().map_err(|e| CliError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
        .map_err(|e| CliError::terminal(e.to_string()))
}
