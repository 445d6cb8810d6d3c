use std::str::FromStr;

use rust_decimal::Decimal;
use winnow::combinator::{eof, opt, terminated};
use winnow::{ModalResult, Parser};

use crate::parser::ParseError;
use crate::parser::combinators::{NumberParts, parse_exponent, parse_number_parts};

/// Largest number of integer digits a 96-bit decimal can hold
const MAX_INTEGER_DIGITS: i64 = 29;
/// Largest fractional precision of a decimal
const MAX_SCALE: i64 = 28;

fn parse_scientific<'s>(input: &mut &'s str) -> ModalResult<(NumberParts<'s>, i64)> {
    terminated(
        (parse_number_parts('.'), opt(parse_exponent).map(Option::unwrap_or_default)),
        eof,
    )
    .parse_next(input)
}

/// Parse decimal text such as `"12.5"`, `"-.5"` or `"1e-8"` into an exact decimal
///
/// Surrounding whitespace is ignored. Digits finer than 28 fractional places are
/// rounded away.
///
/// # Examples
/// ```
/// use amount_format::parser::parse_decimal_text;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal_text("1e-8").unwrap(), Decimal::new(1, 8));
/// assert!(parse_decimal_text("abc").is_err());
/// ```
pub fn parse_decimal_text(text: &str) -> Result<Decimal, ParseError> {
    let mut input = text.trim();
    let (parts, exponent) =
        parse_scientific(&mut input).map_err(|_| ParseError::Invalid(text.to_string()))?;

    let digits = format!("{}{}", parts.integer, parts.fraction);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let scale = (parts.fraction.len() as i64)
        .checked_sub(exponent)
        .ok_or_else(|| ParseError::Overflow(text.to_string()))?;
    let integer_digits = (digits.len() as i64)
        .checked_sub(scale)
        .ok_or_else(|| ParseError::Overflow(text.to_string()))?;
    if integer_digits > MAX_INTEGER_DIGITS {
        return Err(ParseError::Overflow(text.to_string()));
    }
    if integer_digits < -MAX_SCALE {
        return Ok(Decimal::ZERO);
    }

    let plain = shift_point(digits, scale);
    let mut value =
        Decimal::from_str(&plain).map_err(|_| ParseError::Overflow(text.to_string()))?;
    if parts.negative {
        value.set_sign_negative(true);
    }
    Ok(value)
}

/// Render `digits x 10^-scale` as plain positional text
fn shift_point(digits: &str, scale: i64) -> String {
    if scale <= 0 {
        return format!("{digits}{}", "0".repeat(scale.unsigned_abs() as usize));
    }

    let scale = scale as usize;
    if scale >= digits.len() {
        format!("0.{}{digits}", "0".repeat(scale - digits.len()))
    } else {
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        format!("{integer}.{fraction}")
    }
}
