//! Keypad widget for the terminal front end
//!
//! Renders the shared [`Keypad`] model inside a bordered block and maps mouse
//! positions back to buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::InputEvent;
use crate::keypad::{Keypad, KeypadButton};

/// Cell size of one grid column and row inside `area`, if the keypad fits
fn cell_size(area: Rect) -> Option<(u16, u16)> {
    let inner_w = area.width.saturating_sub(2);
    let inner_h = area.height.saturating_sub(2);
    let btn_width = inner_w / Keypad::COLS as u16;
    let btn_height = inner_h / Keypad::ROWS as u16;
    if btn_width == 0 || btn_height == 0 {
        None
    } else {
        Some((btn_width, btn_height))
    }
}

/// Finds the button index at terminal position (`x`, `y`) for a keypad drawn in `area`
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border is one cell on each side
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (btn_width, btn_height) = cell_size(area)?;
    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;

    if row < Keypad::ROWS && col < Keypad::COLS {
        keypad.index_at(row, col)
    } else {
        None
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.event {
        InputEvent::Digit(_) | InputEvent::Decimal => Style::default().fg(Color::White),
        InputEvent::Operator(_) => Style::default().fg(Color::Yellow),
        InputEvent::Equals => Style::default().fg(Color::Green),
        InputEvent::Clear => Style::default().fg(Color::Red),
        InputEvent::Sign | InputEvent::Percent => Style::default().fg(Color::Cyan),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget drawing `keypad`
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some((btn_width, btn_height)) = cell_size(area) else {
            return; // Too small to render
        };
        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        for btn in self.keypad.buttons() {
            let x = inner_x + btn.col as u16 * btn_width;
            let y = inner_y + btn.row as u16 * btn_height;
            let width = btn_width * btn.span as u16;

            let label = format!("[{}]", btn.label);
            let label_len = label.chars().count() as u16;
            if width < label_len {
                continue;
            }
            let label_x = x + (width - label_len) / 2;
            let label_y = y + btn_height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, button_style(btn)), width);
        }
    }
}
