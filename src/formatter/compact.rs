//! Compact (K/M/B/T) notation with a lossiness check

use rust_decimal::{Decimal, RoundingStrategy};

use crate::parser::parse_compact_text;
use crate::types::{CompactUnit, LocaleSettings};

/// Prefix marking a compact rendering that is not exactly the input value
pub const APPROXIMATION_MARKER: &str = "≈";

/// Render `value` in compact notation, e.g. `1234455` as `≈1.2M`
///
/// The rendering is parsed back and compared with `value`; when the two differ the
/// text is prefixed with `APPROXIMATION_MARKER`.
///
/// # Examples
/// ```
/// use amount_format::formatter::abbreviate;
/// use amount_format::types::LocaleSettings;
/// use rust_decimal::Decimal;
///
/// let locale = LocaleSettings::default();
/// assert_eq!(abbreviate(Decimal::from(1_500_000), &locale), "1.5M");
/// assert_eq!(abbreviate(Decimal::from(1_234_455), &locale), "≈1.2M");
/// ```
pub fn abbreviate(value: Decimal, locale: &LocaleSettings) -> String {
    let text = compact_text(value, locale);

    match parse_compact_text(&text, locale) {
        Ok(parsed) if parsed == value => text,
        Ok(_) => format!("{APPROXIMATION_MARKER}{text}"),
        Err(e) => {
            log::debug!("Compact text '{text}' could not be read back: {e}");
            format!("{APPROXIMATION_MARKER}{text}")
        }
    }
}

/// Compact rendering without the lossiness check
fn compact_text(value: Decimal, locale: &LocaleSettings) -> String {
    let magnitude = value.abs();
    let (scaled, suffix) = select_unit(magnitude, &locale.compact_units);

    let mut result = String::new();
    if value.is_sign_negative() && !scaled.is_zero() {
        result.push('-');
    }
    let digits = scaled.normalize().to_string();
    result.extend(digits.chars().map(|c| if c == '.' { locale.decimal_point } else { c }));
    result.push_str(suffix);
    result
}

/// Pick the largest unit whose rounded, scaled value is at least one
fn select_unit<'a>(magnitude: Decimal, units: &'a [CompactUnit]) -> (Decimal, &'a str) {
    for unit in units.iter().rev() {
        let Some(divisor) = power_of_ten(unit.exponent) else {
            continue;
        };
        let Some(scaled) = magnitude.checked_div(divisor) else {
            continue;
        };
        let rounded = round_compact(scaled);
        if rounded >= Decimal::ONE {
            return (rounded, unit.suffix.as_str());
        }
    }

    (round_compact(magnitude), "")
}

/// Round like compact notation does: whole numbers from two integer digits up,
/// two significant digits below that. Ties round away from zero.
fn round_compact(scaled: Decimal) -> Decimal {
    if scaled.is_zero() {
        return Decimal::ZERO;
    }

    let decimal_places = if scaled >= Decimal::TEN {
        0
    } else if scaled >= Decimal::ONE {
        1
    } else {
        let normalized = scaled.normalize();
        let significant_digits = normalized.mantissa().unsigned_abs().to_string().len() as u32;
        (normalized.scale() + 2).saturating_sub(significant_digits)
    };

    scaled.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

fn power_of_ten(exponent: u32) -> Option<Decimal> {
    10i128
        .checked_pow(exponent)
        .and_then(|value| Decimal::try_from_i128_with_scale(value, 0).ok())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::locale::get_locale_settings;

    #[test]
    fn test_round_compact() {
        assert_eq!(round_compact(dec!(1.234455)), dec!(1.2));
        assert_eq!(round_compact(dec!(12.5)), dec!(13));
        assert_eq!(round_compact(dec!(123.456)), dec!(123));
        assert_eq!(round_compact(dec!(0.12345)), dec!(0.12));
        assert_eq!(round_compact(dec!(0.0012345)), dec!(0.0012));
        assert_eq!(round_compact(dec!(0.99996)), dec!(1));
        assert_eq!(round_compact(dec!(1.25)), dec!(1.3));
    }

    #[test]
    fn test_exact_abbreviations() {
        let locale = LocaleSettings::default();
        assert_eq!(abbreviate(dec!(1000), &locale), "1K");
        assert_eq!(abbreviate(dec!(1500), &locale), "1.5K");
        assert_eq!(abbreviate(dec!(12000), &locale), "12K");
        assert_eq!(abbreviate(dec!(2000000000), &locale), "2B");
        assert_eq!(abbreviate(dec!(3000000000000), &locale), "3T");
        assert_eq!(abbreviate(dec!(1500000000000000), &locale), "1500T");
        assert_eq!(abbreviate(dec!(500), &locale), "500");
        assert_eq!(abbreviate(dec!(-2500), &locale), "-2.5K");
    }

    #[test]
    fn test_lossy_abbreviations() {
        let locale = LocaleSettings::default();
        assert_eq!(abbreviate(dec!(1234455), &locale), "≈1.2M");
        assert_eq!(abbreviate(dec!(1234), &locale), "≈1.2K");
        assert_eq!(abbreviate(dec!(123456), &locale), "≈123K");
        assert_eq!(abbreviate(dec!(999999), &locale), "≈1M");
        assert_eq!(abbreviate(dec!(999.96), &locale), "≈1K");
        assert_eq!(abbreviate(dec!(1000.5), &locale), "≈1K");
    }

    #[test]
    fn test_locale_units() {
        let de = get_locale_settings("de_DE").unwrap();
        assert_eq!(abbreviate(dec!(1500000), &de), "1,5 Mio.");
        assert_eq!(abbreviate(dec!(1234), &de), "1234");
        assert_eq!(abbreviate(dec!(2340000000), &de), "≈2,3 Mrd.");

        let zh = get_locale_settings("zh_CN").unwrap();
        assert_eq!(abbreviate(dec!(120000), &zh), "12万");
        assert_eq!(abbreviate(dec!(150000000), &zh), "1.5亿");
    }
}
