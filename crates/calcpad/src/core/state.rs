//! Calculator state machine
//!
//! Error prevention: the pending operand and operator live in one
//! `Option<Pending>`, so "operator without operand" cannot be represented.
//!
//! Every transition is total. Inputs that make no sense in the current state
//! (a second decimal point, a digit past the length limit, a sign toggle on
//! zero) leave the state unchanged instead of failing.

use serde::{Deserialize, Serialize};

use super::event::{Digit, InputEvent};
use super::format::format_operand;
use super::operand::Operand;
use super::operations::Operator;

/// Left operand and operator waiting for the right operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    /// The left operand
    pub operand: Operand,
    /// The operator to apply
    pub operator: Operator,
}

/// State of the keypad calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    current: Operand,
    pending: Option<Pending>,
    just_evaluated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates a cleared state
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Operand::zero(),
            pending: None,
            just_evaluated: false,
        }
    }

    /// The operand being entered (or the last result)
    #[must_use]
    pub fn current(&self) -> &Operand {
        &self.current
    }

    /// The left operand of a pending operation
    #[must_use]
    pub fn previous(&self) -> Option<&Operand> {
        self.pending.as_ref().map(|p| &p.operand)
    }

    /// The pending operator
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// The pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// True right after `=` produced a result
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Resets to `"0"` with nothing pending
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Enters a digit.
    ///
    /// After a completed computation the digit starts a new entry.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.just_evaluated {
            self.current = Operand::from_digit(digit);
            self.just_evaluated = false;
            return;
        }
        self.current.push_digit(digit);
    }

    /// Enters the decimal point.
    ///
    /// After a completed computation the point starts a new entry `"0."`.
    pub fn input_decimal(&mut self) {
        if self.just_evaluated {
            self.current = Operand::leading_decimal();
            self.just_evaluated = false;
            return;
        }
        self.current.push_decimal_point();
    }

    /// Chooses the next operator.
    ///
    /// A pending operation is evaluated first, so chained operators compute
    /// strictly left to right with no precedence.
    pub fn choose_operation(&mut self, operator: Operator) {
        if self.pending.is_some() && !self.just_evaluated {
            self.compute();
        }
        let operand = std::mem::replace(&mut self.current, Operand::zero());
        self.pending = Some(Pending { operand, operator });
        self.just_evaluated = false;
    }

    /// Applies the pending operation to the current operand.
    ///
    /// No-op when nothing is pending.
    pub fn compute(&mut self) {
        let Some(Pending { operand, operator }) = self.pending.take() else {
            return;
        };
        let result = operator.apply(operand.value(), self.current.value());
        self.current = Operand::from_value(result);
        self.just_evaluated = true;
    }

    /// Flips the sign of the current operand (no-op on `"0"`)
    pub fn toggle_sign(&mut self) {
        self.current.toggle_sign();
    }

    /// Converts the current operand to a percentage.
    ///
    /// With an operation pending the current operand becomes that percentage
    /// of the left operand (`200 + 10%` enters 20); otherwise it is divided
    /// by 100.
    pub fn percent(&mut self) {
        let fraction = self.current.value() / 100.0;
        let value = match &self.pending {
            Some(pending) => pending.operand.value() * fraction,
            None => fraction,
        };
        self.current = Operand::from_value(value);
    }

    /// Applies one input event in place
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(digit) => self.input_digit(digit),
            InputEvent::Decimal => self.input_decimal(),
            InputEvent::Operator(operator) => self.choose_operation(operator),
            InputEvent::Equals => self.compute(),
            InputEvent::Clear => self.clear(),
            InputEvent::Sign => self.toggle_sign(),
            InputEvent::Percent => self.percent(),
        }
    }

    /// Pure transition: returns the state after `event`
    #[must_use]
    pub fn next(&self, event: InputEvent) -> Self {
        let mut next = self.clone();
        next.apply(event);
        next
    }

    /// Expression display: left operand and operator symbol, or empty
    #[must_use]
    pub fn expression(&self) -> String {
        self.pending
            .as_ref()
            .map(|p| format!("{} {}", format_operand(&p.operand), p.operator.display_symbol()))
            .unwrap_or_default()
    }

    /// Result display: the formatted current operand
    #[must_use]
    pub fn result(&self) -> String {
        format_operand(&self.current)
    }
}
