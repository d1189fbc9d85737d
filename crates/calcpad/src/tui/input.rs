//! Keyboard and mouse input handling
//!
//! Probar: Error prevention - raw terminal events are mapped onto the closed
//! calculator event set before they reach the state machine.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::keypad::hit_test;
use crate::core::InputEvent;
use crate::keypad::Keypad;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the calculator
    Input(InputEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Release and repeat events would double-enter digits on some terminals
        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                Self::input(InputEvent::from_key(c.encode_utf8(&mut buf)))
            }
            KeyCode::Enter => KeyAction::Input(InputEvent::Equals),
            KeyCode::Esc => KeyAction::Input(InputEvent::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action, given where the keypad is drawn
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad: &Keypad, keypad_area: Rect) -> KeyAction {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }
        Self::input(
            hit_test(keypad, keypad_area, event.column, event.row)
                .and_then(|idx| keypad.get_button(idx))
                .map(|btn| btn.event),
        )
    }

    fn input(event: Option<InputEvent>) -> KeyAction {
        event.map_or(KeyAction::None, KeyAction::Input)
    }
}
