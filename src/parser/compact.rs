use std::str::FromStr;

use rust_decimal::Decimal;
use winnow::combinator::opt;
use winnow::token::{literal, rest};
use winnow::{ModalResult, Parser};

use crate::formatter::APPROXIMATION_MARKER;
use crate::parser::ParseError;
use crate::parser::combinators::{NumberParts, parse_number_parts};
use crate::types::LocaleSettings;

fn parse_compact<'s>(
    decimal_point: char,
) -> impl FnMut(&mut &'s str) -> ModalResult<(NumberParts<'s>, &'s str)> {
    move |input: &mut &'s str| {
        (
            opt(literal(APPROXIMATION_MARKER)),
            parse_number_parts(decimal_point),
            rest,
        )
            .map(|(_, parts, suffix)| (parts, suffix))
            .parse_next(input)
    }
}

/// Parse compact text such as `"1.2M"` back into the decimal it denotes
///
/// The suffix is looked up in the locale's compact units; text without a suffix is
/// read as a plain number. A leading approximation marker is ignored.
///
/// # Examples
/// ```
/// use amount_format::parser::parse_compact_text;
/// use amount_format::types::LocaleSettings;
/// use rust_decimal::Decimal;
///
/// let value = parse_compact_text("1.2M", &LocaleSettings::default()).unwrap();
/// assert_eq!(value, Decimal::from(1_200_000));
/// ```
pub fn parse_compact_text(text: &str, locale: &LocaleSettings) -> Result<Decimal, ParseError> {
    let mut input = text;
    let (parts, suffix) = parse_compact(locale.decimal_point)
        .parse_next(&mut input)
        .map_err(|_| ParseError::Invalid(text.to_string()))?;

    let exponent = if suffix.is_empty() {
        0
    } else {
        locale
            .compact_units
            .iter()
            .find(|unit| unit.suffix == suffix)
            .map(|unit| unit.exponent)
            .ok_or_else(|| ParseError::UnknownSuffix(suffix.to_string()))?
    };

    let integer = if parts.integer.is_empty() {
        "0"
    } else {
        parts.integer
    };
    let mantissa = if parts.fraction.is_empty() {
        Decimal::from_str(integer)
    } else {
        Decimal::from_str(&format!("{integer}.{}", parts.fraction))
    }
    .map_err(|_| ParseError::Overflow(text.to_string()))?;

    let mut value = 10i128
        .checked_pow(exponent)
        .and_then(|multiplier| Decimal::try_from_i128_with_scale(multiplier, 0).ok())
        .and_then(|multiplier| mantissa.checked_mul(multiplier))
        .ok_or_else(|| ParseError::Overflow(text.to_string()))?;

    if parts.negative {
        value.set_sign_negative(true);
    }
    Ok(value.normalize())
}
