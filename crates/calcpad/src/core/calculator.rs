//! Calculator controller
//!
//! Owns the single [`CalculatorState`] for the lifetime of a front end and
//! turns each dispatched event into a fresh [`DisplayFrame`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::event::InputEvent;
use super::format::ERROR_TEXT;
use super::state::CalculatorState;

/// What the two display fields show
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Previous operand and operator symbol, or empty
    pub expression: String,
    /// Formatted current operand
    pub result: String,
}

impl DisplayFrame {
    /// Returns true when the result field shows the error text
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result == ERROR_TEXT
    }
}

impl std::fmt::Display for DisplayFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.expression.is_empty() {
            write!(f, "{}", self.result)
        } else {
            write!(f, "{} | {}", self.expression, self.result)
        }
    }
}

/// Controller that owns the calculator state
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    dispatched: u64,
}

impl Calculator {
    /// Creates a calculator in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator starting from an existing state
    #[must_use]
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Number of events dispatched since creation
    #[must_use]
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Applies one event and returns the new display
    pub fn dispatch(&mut self, event: InputEvent) -> DisplayFrame {
        let was_error = self.state.result() == ERROR_TEXT;
        let before = self.state.clone();
        self.state.apply(event);
        self.dispatched += 1;

        if self.state == before {
            trace!(%event, "input ignored");
        }

        let frame = self.frame();
        if frame.is_error() && !was_error {
            warn!(
                %event,
                current = self.state.current().as_str(),
                "result is not a finite number"
            );
        }
        debug!(
            %event,
            expression = %frame.expression,
            result = %frame.result,
            "dispatched"
        );
        frame
    }

    /// Applies a keyboard key; returns `None` when the key is not calculator input
    pub fn press_key(&mut self, key: &str) -> Option<DisplayFrame> {
        match InputEvent::from_key(key) {
            Some(event) => Some(self.dispatch(event)),
            None => {
                trace!(key, "key ignored");
                None
            }
        }
    }

    /// Applies a sequence of events, returning the final display
    pub fn dispatch_all<I>(&mut self, events: I) -> DisplayFrame
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
        self.frame()
    }

    /// Resets to the cleared state
    pub fn reset(&mut self) -> DisplayFrame {
        self.dispatch(InputEvent::Clear)
    }

    /// Current display contents
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame {
            expression: self.state.expression(),
            result: self.state.result(),
        }
    }

    /// Current expression display
    #[must_use]
    pub fn expression(&self) -> String {
        self.state.expression()
    }

    /// Current result display
    #[must_use]
    pub fn result(&self) -> String {
        self.state.result()
    }
}
