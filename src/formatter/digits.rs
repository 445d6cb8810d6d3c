//! Fixed-point and thousands-grouped digit rendering

use rust_decimal::Decimal;

use crate::types::{LocaleSettings, RoundingMode};

/// Largest fractional precision a decimal can carry
pub(crate) const MAX_SCALE: u32 = 28;

/// Render `value` with exactly `decimal_places` fractional digits
///
/// The output always uses `.` as decimal point and carries no group separators.
/// Precision is capped at 28 digits. A value that rounds to zero never renders a sign.
pub fn format_fixed(value: Decimal, decimal_places: u32, rounding: RoundingMode) -> String {
    let decimal_places = decimal_places.min(MAX_SCALE);
    let mut rounded = value.round_dp_with_strategy(decimal_places, rounding.strategy());
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }

    let text = rounded.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if decimal_places == 0 {
        return integer.to_string();
    }

    let mut result = String::with_capacity(integer.len() + 1 + decimal_places as usize);
    result.push_str(integer);
    result.push('.');
    result.push_str(fraction);
    for _ in fraction.len()..decimal_places as usize {
        result.push('0');
    }
    result
}

/// Render `value` like `format_fixed`, then apply the locale's separators
pub fn format_grouped(
    value: Decimal,
    decimal_places: u32,
    rounding: RoundingMode,
    locale: &LocaleSettings,
) -> String {
    group_digits(&format_fixed(value, decimal_places, rounding), locale)
}

/// Insert thousands separators into plain `-123456.78` style text
pub(crate) fn group_digits(text: &str, locale: &LocaleSettings) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let int_digits: Vec<char> = integer.chars().collect();
    let mut grouped: Vec<char> = Vec::with_capacity(int_digits.len() + int_digits.len() / 3);
    for (i, digit) in int_digits.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(locale.thousands_separator);
        }
        grouped.push(*digit);
    }
    grouped.reverse();

    let mut result = String::with_capacity(text.len() + grouped.len());
    result.push_str(sign);
    result.extend(grouped);
    if let Some(fraction) = fraction {
        result.push(locale.decimal_point);
        result.push_str(fraction);
    }
    result
}
