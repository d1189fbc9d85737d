//! Core calculator module
//!
//! Probar principles:
//! - Error prevention: closed event and operator sets; total transitions
//! - Visual feedback: every transition yields a display frame

mod calculator;
pub mod event;
pub mod format;
mod operand;
mod operations;
pub mod state;

pub use calculator::{Calculator, DisplayFrame};
pub use event::{ControlRole, Digit, InputEvent};
pub use format::{format_operand, format_value, ERROR_TEXT};
pub use operand::Operand;
pub use operations::Operator;
pub use state::{CalculatorState, Pending};

use thiserror::Error;

/// Result type for fallible boundary calls
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised where raw input meets the calculator.
///
/// The state machine itself never fails; these cover input that never
/// reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Keyboard key with no calculator meaning
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// Control whose role attribute names no known input
    #[error("Unknown control: {attribute}={value:?}")]
    UnknownControl {
        /// The role attribute (`data-digit` or `data-action`)
        attribute: String,
        /// The attribute value
        value: String,
    },
    /// Element id not present in the page
    #[error("No such element: #{0}")]
    UnknownElement(String),
}
