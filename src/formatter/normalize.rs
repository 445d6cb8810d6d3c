//! Normalization of raw source values into canonical decimals

use crate::parser::parse_decimal_text;
use crate::types::{Amount, SourceValue};

/// Normalize a raw value into its canonical decimal
///
/// Never fails: missing, empty and falsy inputs become exact zero, and text that is not
/// a number becomes `Amount::NaN`, which renders like zero.
///
/// # Examples
/// ```
/// use amount_format::formatter::normalize;
/// use amount_format::types::{Amount, SourceValue};
///
/// assert_eq!(normalize(SourceValue::Absent), Amount::ZERO);
/// assert_eq!(normalize(""), Amount::ZERO);
/// assert!(normalize("abc").is_nan());
/// ```
pub fn normalize(raw: impl Into<SourceValue>) -> Amount {
    match raw.into() {
        SourceValue::Absent => Amount::ZERO,
        SourceValue::Decimal(value) => Amount::Finite(value),
        SourceValue::Text(text) => normalize_text(&text),
        SourceValue::Number(number) => normalize_number(number),
    }
}

fn normalize_text(text: &str) -> Amount {
    if text.trim().is_empty() {
        return Amount::ZERO;
    }

    match parse_decimal_text(text) {
        Ok(value) => Amount::Finite(value),
        Err(e) => {
            log::debug!("Treating source value as NaN: {e}");
            Amount::NaN
        }
    }
}

fn normalize_number(number: f64) -> Amount {
    // NaN and zero are falsy
    if number.is_nan() || number == 0.0 {
        return Amount::ZERO;
    }
    if number.is_infinite() {
        log::debug!("Treating non-finite source value {number} as NaN");
        return Amount::NaN;
    }

    // Display of f64 is the shortest text that round-trips, never in exponent form
    match parse_decimal_text(&number.to_string()) {
        Ok(value) => Amount::Finite(value),
        Err(e) => {
            log::debug!("Treating source value as NaN: {e}");
            Amount::NaN
        }
    }
}

impl From<SourceValue> for Amount {
    fn from(value: SourceValue) -> Self {
        normalize(value)
    }
}
