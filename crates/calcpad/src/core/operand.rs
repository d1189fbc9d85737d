//! Decimal-string operands
//!
//! Operands are kept as the literal text the user typed so that partial
//! entries like `"12."` survive until the next keystroke.

use serde::{Deserialize, Serialize};

use super::event::Digit;

/// A decimal operand held as text.
///
/// Entered operands are bounded to [`Operand::MAX_LEN`] characters. Computed
/// operands use Rust's shortest round-trip rendering of the value, which never
/// switches to exponent notation for finite values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl Operand {
    /// Maximum number of characters accepted from digit entry
    pub const MAX_LEN: usize = 32;

    /// The cleared operand, `"0"`
    #[must_use]
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Stores a computed value; both zeros become the literal `"0"`
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value == 0.0 {
            return Self::zero();
        }
        Self(value.to_string())
    }

    /// Starts a fresh entry from a single digit
    #[must_use]
    pub fn from_digit(digit: Digit) -> Self {
        Self(digit.as_char().to_string())
    }

    /// Starts a fresh entry from a decimal point (`"0."`)
    #[must_use]
    pub fn leading_decimal() -> Self {
        Self("0.".to_string())
    }

    /// Returns the operand text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the operand text in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if the operand text is empty (never the case for valid operands)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the text is exactly `"0"`
    #[must_use]
    pub fn is_zero_literal(&self) -> bool {
        self.0 == "0"
    }

    /// Returns true if the text already contains a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Returns true if the text is negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Numeric value of the operand.
    ///
    /// Partial entries parse naturally (`"12."` is 12). Text that cannot be
    /// parsed yields NaN, which the display renders as an error.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }

    /// Returns true if the operand holds a finite number that digit entry may extend
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.value().is_finite()
    }

    /// Appends a digit, replacing a lone `"0"`.
    ///
    /// Returns false when the digit was dropped because the entry is full.
    pub(crate) fn push_digit(&mut self, digit: Digit) -> bool {
        if !self.is_editable() {
            *self = Self::from_digit(digit);
            return true;
        }
        if self.is_zero_literal() {
            self.0.clear();
        } else if self.len() >= Self::MAX_LEN {
            return false;
        }
        self.0.push(digit.as_char());
        true
    }

    /// Appends a decimal point unless one is present.
    ///
    /// Returns false when the point was ignored.
    pub(crate) fn push_decimal_point(&mut self) -> bool {
        if !self.is_editable() {
            *self = Self::leading_decimal();
            return true;
        }
        if self.has_decimal_point() || self.len() >= Self::MAX_LEN {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Flips the leading minus sign; `"0"` is left alone.
    ///
    /// Returns false when nothing changed.
    pub(crate) fn toggle_sign(&mut self) -> bool {
        if self.is_zero_literal() {
            return false;
        }
        if let Some(unsigned) = self.0.strip_prefix('-') {
            self.0 = unsigned.to_string();
        } else {
            self.0.insert(0, '-');
        }
        true
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Operand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
