use winnow::ascii::{digit0, digit1};
use winnow::combinator::{opt, preceded};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

/// Digits of a number split around its decimal point
#[derive(Debug, Clone, PartialEq)]
pub struct NumberParts<'s> {
    pub negative: bool,
    pub integer: &'s str,
    pub fraction: &'s str,
}

/// Parse an optional leading sign, returning true for `-`
pub fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

/// Parse `digits[<point>digits]` where either side may be empty but not both
pub fn parse_number_parts<'s>(
    decimal_point: char,
) -> impl FnMut(&mut &'s str) -> ModalResult<NumberParts<'s>> {
    move |input: &mut &'s str| {
        (
            parse_sign,
            digit0,
            opt(preceded(one_of(decimal_point), digit0)),
        )
            .verify(|(_, integer, fraction): &(bool, &str, Option<&str>)| {
                !integer.is_empty() || fraction.is_some_and(|f| !f.is_empty())
            })
            .map(|(negative, integer, fraction)| NumberParts {
                negative,
                integer,
                fraction: fraction.unwrap_or(""),
            })
            .parse_next(input)
    }
}

/// Parse a scientific exponent such as `e-8` or `E+3`
pub fn parse_exponent(input: &mut &str) -> ModalResult<i64> {
    preceded(one_of(['e', 'E']), (parse_sign, digit1))
        .try_map(|(negative, digits): (bool, &str)| {
            digits
                .parse::<i64>()
                .map(|value| if negative { -value } else { value })
        })
        .parse_next(input)
}
