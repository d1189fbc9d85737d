//! Unified Calculator Driver
//!
//! This module implements the core unification principle:
//! **Write the test logic once, run it everywhere.**
//!
//! Probar: Balanced testing - Balanced testing across platforms

use crate::core::{CalcResult, DisplayFrame, InputEvent};

/// Abstract driver trait for calculator interactions
///
/// Both front ends implement this trait, so a scenario written against it
/// exercises the terminal app and the page binding alike.
///
/// # Example
///
/// ```rust
/// use calcpad::driver::{CalculatorDriver, WebDriver};
///
/// let mut driver = WebDriver::new();
/// driver.enter_keys("2 + 3 =").unwrap();
/// assert_eq!(driver.result(), "5");
/// ```
pub trait CalculatorDriver {
    /// Presses the on-screen control for `event`
    fn press(&mut self, event: InputEvent) -> CalcResult<DisplayFrame>;

    /// Presses a keyboard key (`"7"`, `"+"`, `"Enter"`, `"Escape"`).
    /// Keys with no calculator meaning are ignored.
    fn press_key(&mut self, key: &str) -> CalcResult<DisplayFrame>;

    /// Gets the expression display
    fn expression(&self) -> String;

    /// Gets the result display
    fn result(&self) -> String;

    /// Returns the calculator to the cleared state
    fn reset(&mut self);

    /// Presses one key per non-whitespace character of `keys`.
    ///
    /// Unlike [`press_key`](Self::press_key), a character with no calculator
    /// meaning is an error.
    fn enter_keys(&mut self, keys: &str) -> CalcResult<DisplayFrame> {
        let mut frame = DisplayFrame {
            expression: self.expression(),
            result: self.result(),
        };
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            let mut buf = [0u8; 4];
            let event = InputEvent::parse_key(c.encode_utf8(&mut buf))?;
            frame = self.press(event)?;
        }
        Ok(frame)
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{CalcResult, CalculatorDriver, DisplayFrame, InputEvent};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) -> CalcResult<DisplayFrame> {
            Ok(self.app.press(event))
        }

        fn press_key(&mut self, key: &str) -> CalcResult<DisplayFrame> {
            let mut chars = key.chars();
            let code = match (key, chars.next(), chars.next()) {
                ("Enter", ..) => Some(KeyCode::Enter),
                ("Escape", ..) => Some(KeyCode::Esc),
                (_, Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            };
            if let Some(code) = code {
                self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            }
            Ok(self.app.frame())
        }

        fn expression(&self) -> String {
            self.app.frame().expression
        }

        fn result(&self) -> String {
            self.app.frame().result
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

/// Web driver implementation, backed by the mock DOM page
pub mod web_driver {
    use super::{CalcResult, CalculatorDriver, DisplayFrame, InputEvent};
    use crate::web::CalculatorPage;

    /// Driver that clicks buttons and sends keydown events to the page
    #[derive(Debug, Default)]
    pub struct WebDriver {
        page: CalculatorPage,
    }

    impl WebDriver {
        /// Creates a driver for a freshly built page
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the page
        #[must_use]
        pub fn page(&self) -> &CalculatorPage {
            &self.page
        }

        /// Returns the page mutably
        pub fn page_mut(&mut self) -> &mut CalculatorPage {
            &mut self.page
        }
    }

    impl CalculatorDriver for WebDriver {
        fn press(&mut self, event: InputEvent) -> CalcResult<DisplayFrame> {
            self.page.click_event(event)
        }

        fn press_key(&mut self, key: &str) -> CalcResult<DisplayFrame> {
            self.page.key_down(key)
        }

        fn expression(&self) -> String {
            self.page.expression_text().to_string()
        }

        fn result(&self) -> String {
            self.page.result_text().to_string()
        }

        fn reset(&mut self) {
            self.page = CalculatorPage::new();
        }
    }
}

pub use web_driver::WebDriver;

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operators on whole numbers
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [("2+3=", "5"), ("10-4=", "6"), ("6*7=", "42"), ("20/4=", "5")] {
        driver.reset();
        let frame = driver.enter_keys(keys).unwrap_or_default();
        assert_eq!(frame.result, expected, "{keys}");
        assert_eq!(frame.expression, "", "{keys}");
    }
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let frame = driver.enter_keys("2+3*").unwrap_or_default();
    assert_eq!(frame.expression, "5 ×");
    assert_eq!(frame.result, "0");
    let frame = driver.enter_keys("4=").unwrap_or_default();
    assert_eq!(frame.result, "20");

    // Chaining onto a result
    let frame = driver.enter_keys("-5=").unwrap_or_default();
    assert_eq!(frame.result, "15");
}

/// Verifies digit entry rules
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.enter_keys("0007").unwrap_or_default().result, "7");

    driver.reset();
    assert_eq!(driver.enter_keys(".5").unwrap_or_default().result, "0.5");

    driver.reset();
    assert_eq!(driver.enter_keys("1..2.3").unwrap_or_default().result, "1.23");

    // A digit after equals starts a new number
    driver.reset();
    assert_eq!(driver.enter_keys("2+2=7").unwrap_or_default().result, "7");
}

/// Verifies sign toggle and percent
pub fn verify_sign_and_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.enter_keys("5_").unwrap_or_default().result, "-5");
    assert_eq!(driver.enter_keys("_").unwrap_or_default().result, "5");

    driver.reset();
    assert_eq!(driver.enter_keys("200+10%").unwrap_or_default().result, "20");
    assert_eq!(driver.enter_keys("=").unwrap_or_default().result, "220");

    driver.reset();
    assert_eq!(driver.enter_keys("50%").unwrap_or_default().result, "0.5");
}

/// Verifies error display and recovery
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let frame = driver.enter_keys("5/0=").unwrap_or_default();
    assert_eq!(frame.result, "Error");
    assert!(frame.is_error());

    // Typing a digit starts over
    let frame = driver.enter_keys("3").unwrap_or_default();
    assert_eq!(frame.result, "3");

    driver.reset();
    driver.enter_keys("5/0=").unwrap_or_default();
    let frame = driver.press_key("Escape").unwrap_or_default();
    assert_eq!(frame.result, "0");

    // Unknown characters are rejected before reaching the calculator
    driver.reset();
    assert!(driver.enter_keys("2^3").is_err());
}

/// Verifies keyboard keys, including ignored ones
pub fn verify_keyboard<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    for key in ["4", "*", "5", "Enter"] {
        driver.press_key(key).unwrap_or_default();
    }
    assert_eq!(driver.result(), "20");

    let frame = driver.press_key("F5").unwrap_or_default();
    assert_eq!(frame.result, "20");

    driver.press_key("Escape").unwrap_or_default();
    assert_eq!(driver.result(), "0");
    assert_eq!(driver.expression(), "");
}

/// Complete verification suite - runs every scenario above
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_entry(driver);
    verify_sign_and_percent(driver);
    verify_error_handling(driver);
    verify_keyboard(driver);
}
