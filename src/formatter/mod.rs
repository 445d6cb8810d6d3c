//! Amount display formatting module
//!
//! This module turns a canonical `Amount` and a `DisplayConfig` into display strings.
//! The public render operations are `fixed_render`, `grouped_render`, `buffered_value`,
//! `buffered_fixed_render` and `buffered_grouped_render`; all of them are pure and
//! never fail.

mod compact;
mod digits;
mod minimal;
mod normalize;

use rust_decimal::Decimal;

use crate::locale::resolve_locale_settings;
use crate::types::{Amount, DisplayConfig, LocaleSettings, MinimalDisplay};

pub use compact::{APPROXIMATION_MARKER, abbreviate};
pub use digits::{format_fixed, format_grouped};
pub use minimal::{MAX_ABSOLUTE_DECIMAL_PLACES, resolve_minimal_display};
pub use normalize::normalize;

/// Whether compact notation replaces digit rendering for `value`
pub fn should_abbreviate(value: Decimal, config: &DisplayConfig) -> bool {
    config
        .abbreviation_floor
        .is_some_and(|floor| value.abs() >= floor)
}

/// Render the amount with exactly `decimal_places` fractional digits, or abbreviated
///
/// # Examples
/// ```
/// use amount_format::formatter::{fixed_render, normalize};
/// use amount_format::types::DisplayConfig;
///
/// let config = DisplayConfig::default();
/// assert_eq!(fixed_render(&normalize("12.3456"), &config), "12.34");
/// assert_eq!(fixed_render(&normalize(None::<&str>), &config), "0.00");
/// ```
pub fn fixed_render(amount: &Amount, config: &DisplayConfig) -> String {
    if amount.is_zero_or_nan() {
        return zero_fixed(config);
    }

    let value = amount.value();
    if should_abbreviate(value, config) {
        return abbreviate(value, &resolve_locale_settings(&config.locale));
    }

    format_fixed(value, config.decimal_places, config.rounding_mode)
}

/// Render the amount with group separators, using "< threshold" for tiny values
///
/// # Examples
/// ```
/// use amount_format::formatter::{grouped_render, normalize};
/// use amount_format::types::DisplayConfig;
///
/// let config = DisplayConfig::default();
/// assert_eq!(grouped_render(&normalize("1234567.891"), &config), "1,234,567.89");
/// assert_eq!(grouped_render(&normalize("0.00000001"), &config), "< 0.0001");
/// ```
pub fn grouped_render(amount: &Amount, config: &DisplayConfig) -> String {
    let locale = resolve_locale_settings(&config.locale);
    if amount.is_zero_or_nan() {
        return zero_grouped(config, &locale);
    }

    let value = amount.value();
    if should_abbreviate(value, config) {
        return abbreviate(value, &locale);
    }

    let minimal = resolve_minimal_display(
        value,
        config.minimal_decimal_places,
        config.display_absolute_decimal_place,
    );
    less_than_or_grouped(value, &minimal, config, &locale)
}

/// The amount minus the configured fee, floored at zero
///
/// NaN and amounts at or below the fee yield exact zero. No rounding is applied.
pub fn buffered_value(amount: &Amount, config: &DisplayConfig) -> Amount {
    match amount {
        Amount::NaN => Amount::ZERO,
        Amount::Finite(value) if *value <= config.fee_amount => Amount::ZERO,
        Amount::Finite(value) => Amount::Finite(*value - config.fee_amount),
    }
}

/// Render the buffered amount with exactly `decimal_places` fractional digits
///
/// Compact notation is never used here.
pub fn buffered_fixed_render(amount: &Amount, config: &DisplayConfig) -> String {
    if amount.is_zero_or_nan() {
        return zero_fixed(config);
    }

    let buffered = buffered_value(amount, config).value();
    format_fixed(buffered, config.decimal_places, config.rounding_mode)
}

/// Render the buffered amount like `grouped_render`
///
/// Whether compact notation applies, and the "less-than" threshold, are decided on the
/// amount before buffering; the digits rendered are those of the buffered amount.
pub fn buffered_grouped_render(amount: &Amount, config: &DisplayConfig) -> String {
    let locale = resolve_locale_settings(&config.locale);
    if amount.is_zero_or_nan() {
        return zero_grouped(config, &locale);
    }

    let value = amount.value();
    let buffered = buffered_value(amount, config).value();
    if buffered.is_zero() {
        return zero_grouped(config, &locale);
    }

    if should_abbreviate(value, config) {
        return abbreviate(buffered, &locale);
    }

    let minimal = resolve_minimal_display(
        value,
        config.minimal_decimal_places,
        config.display_absolute_decimal_place,
    );
    less_than_or_grouped(buffered, &minimal, config, &locale)
}

fn less_than_or_grouped(
    value: Decimal,
    minimal: &MinimalDisplay,
    config: &DisplayConfig,
    locale: &LocaleSettings,
) -> String {
    if value.abs() <= minimal.threshold {
        let threshold = format_grouped(
            minimal.threshold,
            minimal.decimal_places,
            config.rounding_mode,
            locale,
        );
        return format!("< {threshold}");
    }

    format_grouped(value, config.decimal_places, config.rounding_mode, locale)
}

fn zero_fixed(config: &DisplayConfig) -> String {
    format_fixed(Decimal::ZERO, config.decimal_places, config.rounding_mode)
}

fn zero_grouped(config: &DisplayConfig, locale: &LocaleSettings) -> String {
    format_grouped(
        Decimal::ZERO,
        config.decimal_places,
        config.rounding_mode,
        locale,
    )
}
