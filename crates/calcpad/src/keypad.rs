//! Calculator keypad model
//!
//! Every button carries its semantic role, so the terminal widget and the page
//! binding render the same keypad.
//!
//! Layout (the `0` key spans two columns):
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use crate::core::{ControlRole, Digit, InputEvent, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: &'static str,
    /// Event emitted when the button is pressed
    pub event: InputEvent,
    /// Grid row
    pub row: usize,
    /// Leftmost grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            label,
            event,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    fn digit(d: usize, row: usize, col: usize) -> Self {
        let digit = Digit::ALL[d];
        Self::new(digit.as_str(), InputEvent::Digit(digit), row, col)
    }

    fn operator(op: Operator, row: usize, col: usize) -> Self {
        Self::new(op.display_symbol(), InputEvent::Operator(op), row, col)
    }

    #[must_use]
    const fn spanning(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Element id used by page bindings (`btn-7`, `btn-decimal`, `btn-add`)
    #[must_use]
    pub fn id(&self) -> String {
        match self.event {
            InputEvent::Decimal => "btn-decimal".to_string(),
            event => format!("btn-{}", event.role().1),
        }
    }

    /// Returns the role attribute and value this button declares
    #[must_use]
    pub const fn role(&self) -> (ControlRole, &'static str) {
        self.event.role()
    }

    /// Returns true if the button covers grid cell (`row`, `col`)
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid rows
    pub const ROWS: usize = 5;
    /// Number of grid columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButton::new("C", InputEvent::Clear, 0, 0),
            KeypadButton::new("±", InputEvent::Sign, 0, 1),
            KeypadButton::new("%", InputEvent::Percent, 0, 2),
            KeypadButton::operator(Operator::Divide, 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::digit(7, 1, 0),
            KeypadButton::digit(8, 1, 1),
            KeypadButton::digit(9, 1, 2),
            KeypadButton::operator(Operator::Multiply, 1, 3),
            // Row 2: 4 5 6 −
            KeypadButton::digit(4, 2, 0),
            KeypadButton::digit(5, 2, 1),
            KeypadButton::digit(6, 2, 2),
            KeypadButton::operator(Operator::Subtract, 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::digit(1, 3, 0),
            KeypadButton::digit(2, 3, 1),
            KeypadButton::digit(3, 3, 2),
            KeypadButton::operator(Operator::Add, 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButton::digit(0, 4, 0).spanning(2),
            KeypadButton::new(".", InputEvent::Decimal, 4, 2),
            KeypadButton::new("=", InputEvent::Equals, 4, 3),
        ];
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (Self::ROWS, Self::COLS)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Finds the button index covering grid cell (`row`, `col`)
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button that emits `event`
    #[must_use]
    pub fn find_by_event(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for `event`, releasing any other
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(idx) = self.find_by_event(event) {
            self.press_button(idx);
        }
    }

    /// Returns the index of the highlighted button
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }
}
