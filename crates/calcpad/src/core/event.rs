//! Input events for the calculator state machine
//!
//! Every front end (keyboard, mouse on the terminal keypad, clicks on page
//! controls) reduces its raw input to one [`InputEvent`] before it reaches
//! the state machine.

use serde::{Deserialize, Serialize};

use super::operations::Operator;
use super::{CalcError, CalcResult};

/// A decimal digit 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, or `None` if `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Returns the digit as a static string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        DIGIT_STRS[self.0 as usize]
    }
}

const DIGIT_STRS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// How an on-screen control declares its role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlRole {
    /// `data-digit="0".."9"` or `data-digit="."`
    Digit,
    /// `data-action="add" | ... | "percent"`
    Action,
}

impl ControlRole {
    /// Returns the data attribute carrying the role value
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Digit => "data-digit",
            Self::Action => "data-action",
        }
    }
}

/// The closed set of inputs the calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit key
    Digit(Digit),
    /// The decimal point
    Decimal,
    /// An operator key
    Operator(Operator),
    /// Equals / Enter
    Equals,
    /// Clear / Escape
    Clear,
    /// Sign toggle
    Sign,
    /// Percent
    Percent,
}

impl InputEvent {
    /// Maps a keyboard key name to an event.
    ///
    /// Accepts digits, `.`, `Enter`, `=`, `Escape`, `%`, `_` (sign) and
    /// `+ - * /`. Everything else is not calculator input.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Equals),
            "Escape" => return Some(Self::Clear),
            _ => {}
        }
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match c {
            '.' => Some(Self::Decimal),
            '%' => Some(Self::Percent),
            '_' => Some(Self::Sign),
            c if c.is_ascii_digit() => Digit::from_char(c).map(Self::Digit),
            c => Operator::from_symbol(c).map(Self::Operator),
        }
    }

    /// Like [`InputEvent::from_key`] but reports unknown keys as errors
    pub fn parse_key(key: &str) -> CalcResult<Self> {
        Self::from_key(key).ok_or_else(|| CalcError::UnknownKey(key.to_string()))
    }

    /// Maps a control's declared role to an event
    #[must_use]
    pub fn from_role(role: ControlRole, value: &str) -> Option<Self> {
        match role {
            ControlRole::Digit => match value {
                "." => Some(Self::Decimal),
                _ => {
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Digit::from_char(c).map(Self::Digit),
                        _ => None,
                    }
                }
            },
            ControlRole::Action => match value {
                "equals" => Some(Self::Equals),
                "clear" => Some(Self::Clear),
                "sign" => Some(Self::Sign),
                "percent" => Some(Self::Percent),
                other => Operator::from_action(other).map(Self::Operator),
            },
        }
    }

    /// Returns the role and role value a control for this event carries
    #[must_use]
    pub const fn role(self) -> (ControlRole, &'static str) {
        match self {
            Self::Digit(d) => (ControlRole::Digit, d.as_str()),
            Self::Decimal => (ControlRole::Digit, "."),
            Self::Operator(op) => (ControlRole::Action, op.action()),
            Self::Equals => (ControlRole::Action, "equals"),
            Self::Clear => (ControlRole::Action, "clear"),
            Self::Sign => (ControlRole::Action, "sign"),
            Self::Percent => (ControlRole::Action, "percent"),
        }
    }

    /// Returns the keyboard key that produces this event
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Digit(d) => d.as_str(),
            Self::Decimal => ".",
            Self::Operator(Operator::Add) => "+",
            Self::Operator(Operator::Subtract) => "-",
            Self::Operator(Operator::Multiply) => "*",
            Self::Operator(Operator::Divide) => "/",
            Self::Equals => "Enter",
            Self::Clear => "Escape",
            Self::Sign => "_",
            Self::Percent => "%",
        }
    }
}

impl std::fmt::Display for InputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (_, value) = self.role();
        f.write_str(value)
    }
}
