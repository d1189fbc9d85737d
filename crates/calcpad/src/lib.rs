//! calcpad - Keypad Calculator State Machine
//!
//! An immediate-execution calculator: operations apply strictly left to right
//! as they are entered, with no precedence. One pure state machine drives two
//! front ends, a terminal UI and a mock-DOM page binding.
//!
//! # Probar Testing Principles
//!
//! - **Error prevention**: Inputs form a closed set; every transition is total
//! - **Visual feedback**: Every event yields an expression/result display frame
//! - **Balanced testing**: Scenarios run unchanged against both front ends
//!
//! # Example
//!
//! ```rust
//! use calcpad::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in ["2", "+", "3", "*"] {
//!     calc.press_key(key);
//! }
//! // No precedence: 2 + 3 was computed when `*` was chosen
//! assert_eq!(calc.expression(), "5 ×");
//!
//! calc.press_key("4");
//! let frame = calc.press_key("Enter").unwrap();
//! assert_eq!(frame.result, "20");
//!
//! calc.press_key("/");
//! calc.press_key("0");
//! assert_eq!(calc.press_key("=").unwrap().result, "Error");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Web module - always available
/// (Mock DOM allows testing without actual browser bindings)
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_value, CalcError, CalcResult, Calculator, CalculatorState, Digit, DisplayFrame,
        InputEvent, Operand, Operator, ERROR_TEXT,
    };
    pub use crate::driver::{CalculatorDriver, WebDriver};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::web::{CalculatorPage, DomElement, DomEvent, MockDom};
}
