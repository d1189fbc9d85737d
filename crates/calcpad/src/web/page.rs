//! Calculator page binding
//!
//! Builds the calculator page in a [`MockDom`] and wires it the way a browser
//! page does: clicks on `[data-digit]` / `[data-action]` controls and window
//! keydown events feed the state machine, and after each event the
//! `#expression` and `#result` elements are rewritten from the display frame.

use tracing::trace;

use super::dom::{DomElement, DomEvent, MockDom};
use crate::core::{CalcError, CalcResult, Calculator, ControlRole, DisplayFrame, InputEvent};
use crate::keypad::Keypad;

/// Element id of the expression field
pub const EXPRESSION_ID: &str = "expression";
/// Element id of the result field
pub const RESULT_ID: &str = "result";
/// Class added to `#result` while it shows the error text
pub const ERROR_CLASS: &str = "is-error";

/// The calculator page: document plus the controller behind it
#[derive(Debug)]
pub struct CalculatorPage {
    dom: MockDom,
    calculator: Calculator,
}

impl Default for CalculatorPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorPage {
    /// Builds the page from the standard keypad and renders the cleared state
    #[must_use]
    pub fn new() -> Self {
        let mut dom = MockDom::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(EXPRESSION_ID)
                .with_class("expression")
                .with_attr("aria-live", "polite"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(RESULT_ID)
                .with_class("result")
                .with_attr("aria-live", "polite"),
        );

        for button in Keypad::new().buttons() {
            let (role, value) = button.role();
            let mut element = DomElement::new("button")
                .with_id(&button.id())
                .with_text(button.label)
                .with_class("key")
                .with_attr(role.attribute(), value);
            if button.span > 1 {
                element = element.with_class("wide");
            }
            dom.register_element(element);
        }

        let mut page = Self {
            dom,
            calculator: Calculator::new(),
        };
        page.render();
        page
    }

    /// Returns the document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the controller
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Handles one DOM event.
    ///
    /// Keys with no calculator meaning are ignored, as a page keydown
    /// listener ignores them. Clicking an element that is not on the page, or
    /// an element with no recognised role, is an error.
    pub fn dispatch(&mut self, event: DomEvent) -> CalcResult<DisplayFrame> {
        self.dom.record_event(event.clone());
        let input = match &event {
            DomEvent::Click { element_id } => Some(self.control_event(element_id)?),
            DomEvent::KeyDown { key } => InputEvent::from_key(key),
        };
        match input {
            Some(input) => {
                self.calculator.dispatch(input);
                self.render();
            }
            None => trace!(?event, "page event ignored"),
        }
        Ok(self.frame())
    }

    /// Clicks an element by id
    pub fn click(&mut self, element_id: &str) -> CalcResult<DisplayFrame> {
        self.dispatch(DomEvent::click(element_id))
    }

    /// Presses a key on the window
    pub fn key_down(&mut self, key: &str) -> CalcResult<DisplayFrame> {
        self.dispatch(DomEvent::key_down(key))
    }

    /// Clicks the control declaring the role for `event`
    pub fn click_event(&mut self, event: InputEvent) -> CalcResult<DisplayFrame> {
        let (role, value) = event.role();
        let id = self
            .dom
            .query_by_attr(role.attribute())
            .find(|e| e.get_attr(role.attribute()) == Some(value))
            .map(|e| e.id.clone())
            .ok_or_else(|| CalcError::UnknownControl {
                attribute: role.attribute().to_string(),
                value: value.to_string(),
            })?;
        self.click(&id)
    }

    /// Text currently shown in `#expression`
    #[must_use]
    pub fn expression_text(&self) -> &str {
        self.dom.get_element_text(EXPRESSION_ID).unwrap_or_default()
    }

    /// Text currently shown in `#result`
    #[must_use]
    pub fn result_text(&self) -> &str {
        self.dom.get_element_text(RESULT_ID).unwrap_or_default()
    }

    /// What the two display elements show
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame {
            expression: self.expression_text().to_string(),
            result: self.result_text().to_string(),
        }
    }

    /// Resolves a clicked element to the input its role declares
    fn control_event(&self, element_id: &str) -> CalcResult<InputEvent> {
        let element = self
            .dom
            .get_element(element_id)
            .ok_or_else(|| CalcError::UnknownElement(element_id.to_string()))?;

        for role in [ControlRole::Digit, ControlRole::Action] {
            if let Some(value) = element.get_attr(role.attribute()) {
                return InputEvent::from_role(role, value).ok_or_else(|| {
                    CalcError::UnknownControl {
                        attribute: role.attribute().to_string(),
                        value: value.to_string(),
                    }
                });
            }
        }
        Err(CalcError::UnknownControl {
            attribute: "role".to_string(),
            value: element_id.to_string(),
        })
    }

    /// Writes the controller's display frame into the two fields
    fn render(&mut self) {
        let frame = self.calculator.frame();
        self.dom.set_element_text(EXPRESSION_ID, &frame.expression);
        self.dom.set_element_text(RESULT_ID, &frame.result);
        if let Some(result) = self.dom.get_element_mut(RESULT_ID) {
            if frame.is_error() {
                result.add_class(ERROR_CLASS);
            } else {
                result.remove_class(ERROR_CLASS);
            }
        }
    }
}
