//! Display formatting for operand values
//!
//! The result field has room for 16 characters. Values that do not fit are
//! shown in exponent notation (very large / very small magnitudes) or cut
//! down to 12 significant digits.
//!
//! Between 1e-9 and 1e-6 the 12 significant digits sit behind leading fraction
//! zeros, so such values stay in plain notation even when wider than 16
//! characters (`0.00000000123456789012`).

use super::operand::Operand;

/// Text shown in place of a non-finite value
pub const ERROR_TEXT: &str = "Error";

/// Widest plain rendering shown unmodified
pub const MAX_DISPLAY_LEN: usize = 16;

/// Significant digits kept when a plain rendering is too wide
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Fraction digits in exponent notation
pub const EXPONENT_FRACTION_DIGITS: usize = 8;

/// Magnitudes at or above this switch to exponent notation
pub const EXPONENT_UPPER: f64 = 1e12;

/// Nonzero magnitudes below this switch to exponent notation
pub const EXPONENT_LOWER: f64 = 1e-9;

/// Formats a value for the result or expression display
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || (magnitude > 0.0 && magnitude < EXPONENT_LOWER) {
        return format!("{value:.EXPONENT_FRACTION_DIGITS$e}");
    }

    // -0 displays as 0
    if value == 0.0 {
        return "0".to_string();
    }

    let plain = value.to_string();
    if plain.len() <= MAX_DISPLAY_LEN {
        return plain;
    }
    to_significant_digits(value)
}

/// Formats an operand's numeric value
#[must_use]
pub fn format_operand(operand: &Operand) -> String {
    format_value(operand.value())
}

/// Rounds to [`SIGNIFICANT_DIGITS`] in plain notation and strips trailing zeros
fn to_significant_digits(value: f64) -> String {
    // The exponent after rounding decides how many fraction digits remain
    let scientific = format!("{value:.prec$e}", prec = SIGNIFICANT_DIGITS - 1);
    let exponent = scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    let decimals = usize::try_from(SIGNIFICANT_DIGITS as i32 - 1 - exponent).unwrap_or(0);
    strip_trailing_zeros(&format!("{value:.decimals$}"))
}

fn strip_trailing_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}
