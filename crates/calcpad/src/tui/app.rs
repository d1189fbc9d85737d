//! TUI Application State
//!
//! Probar: Error prevention - every terminal event funnels through one
//! dispatch path into the state machine.

use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyAction};
use super::ui::keypad_area;
use crate::core::{Calculator, DisplayFrame, InputEvent};
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Controller wrapping the state machine
    calculator: Calculator,
    /// Keypad model, for highlighting and mouse hits
    keypad: Keypad,
    /// Maps terminal events to actions
    input: InputHandler,
    /// Last event fed to the calculator
    last_event: Option<InputEvent>,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the controller
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad model
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the last event fed to the calculator
    #[must_use]
    pub fn last_event(&self) -> Option<InputEvent> {
        self.last_event
    }

    /// Returns what the display currently shows
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        self.calculator.frame()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds one event to the calculator and highlights its key
    pub fn press(&mut self, event: InputEvent) -> DisplayFrame {
        self.keypad.highlight(event);
        self.last_event = Some(event);
        self.calculator.dispatch(event)
    }

    /// Applies an action produced by the input handler
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(event) => {
                self.press(event);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, event: KeyEvent) {
        let action = self.input.handle_key(event);
        self.handle(action);
    }

    /// Handles a terminal mouse event; `screen` is the full terminal area
    pub fn handle_mouse(&mut self, event: MouseEvent, screen: Rect) {
        let action = self
            .input
            .handle_mouse(event, &self.keypad, keypad_area(screen));
        self.handle(action);
    }

    /// Handles any terminal event; `screen` is the full terminal area
    pub fn handle_event(&mut self, event: Event, screen: Rect) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, screen),
            _ => {}
        }
    }

    /// Returns to the cleared state without quitting
    pub fn reset(&mut self) {
        self.calculator.reset();
        self.keypad.release_all();
        self.last_event = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn type_keys(app: &mut CalculatorApp, keys: &str) {
        for c in keys.chars() {
            app.handle_key(key(c));
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert!(!app.should_quit());
        assert!(app.last_event().is_none());
        assert_eq!(app.frame().result, "0");
        assert_eq!(app.frame().expression, "");
        assert!(app.keypad().pressed_index().is_none());
    }

    // ===== press tests =====

    #[test]
    fn test_press_dispatches_and_highlights() {
        let mut app = CalculatorApp::new();
        let frame = app.press(InputEvent::Digit(Digit::ALL[7]));
        assert_eq!(frame.result, "7");
        assert_eq!(app.last_event(), Some(InputEvent::Digit(Digit::ALL[7])));
        let idx = app.keypad().pressed_index().unwrap();
        assert_eq!(app.keypad().get_button(idx).unwrap().label, "7");
    }

    #[test]
    fn test_press_sequence() {
        let mut app = CalculatorApp::new();
        app.press(InputEvent::Digit(Digit::ALL[6]));
        app.press(InputEvent::Operator(Operator::Multiply));
        assert_eq!(app.frame().expression, "6 ×");
        app.press(InputEvent::Digit(Digit::ALL[7]));
        let frame = app.press(InputEvent::Equals);
        assert_eq!(frame.result, "42");
        assert_eq!(app.calculator().dispatched(), 4);
    }

    // ===== Key handling tests =====

    #[test]
    fn test_handle_key_typing() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "12+30");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.frame().result, "42");
    }

    #[test]
    fn test_handle_key_escape_clears() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "9*");
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.frame().expression, "");
        assert_eq!(app.frame().result, "0");
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = CalculatorApp::new();
        app.handle_key(key('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_key_ctrl_c_quits() {
        let mut app = CalculatorApp::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_none_changes_nothing() {
        let mut app = CalculatorApp::new();
        app.handle_key(key('x'));
        assert_eq!(app.calculator().dispatched(), 0);
        assert!(app.last_event().is_none());
    }

    // ===== Mouse tests =====

    #[test]
    fn test_handle_mouse_clicks_keypad() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = keypad_area(screen);
        let mut app = CalculatorApp::new();
        app.press(InputEvent::Digit(Digit::ALL[5]));
        // Top-left button is C
        app.handle_mouse(click(area.x + 1, area.y + 1), screen);
        assert_eq!(app.last_event(), Some(InputEvent::Clear));
        assert_eq!(app.frame().result, "0");
    }

    #[test]
    fn test_handle_mouse_outside_keypad() {
        let screen = Rect::new(0, 0, 80, 24);
        let mut app = CalculatorApp::new();
        app.handle_mouse(click(0, 0), screen);
        assert!(app.last_event().is_none());
    }

    #[test]
    fn test_handle_event_routes_keys_and_mouse() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = keypad_area(screen);
        let mut app = CalculatorApp::new();
        app.handle_event(Event::Key(key('8')), screen);
        assert_eq!(app.frame().result, "8");
        app.handle_event(Event::Mouse(click(area.x + 1, area.y + 1)), screen);
        assert_eq!(app.frame().result, "0");
        app.handle_event(Event::Resize(100, 40), screen);
        assert_eq!(app.calculator().dispatched(), 2);
    }

    // ===== reset / quit tests =====

    #[test]
    fn test_reset() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "5+5");
        app.reset();
        assert_eq!(app.frame().result, "0");
        assert!(app.keypad().pressed_index().is_none());
        assert!(app.last_event().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        app.quit();
        assert!(app.should_quit());
    }
}
