use amount_format::formatter::APPROXIMATION_MARKER;
use amount_format::parser::parse_compact_text;
use amount_format::{
    Amount, DisplayConfig, DisplayFormatter, LocaleSettings, abbreviate, buffered_value,
    fixed_render, normalize,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000_000i64..1_000_000_000_000_000i64, 0u32..=12)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn fixed_render_has_exact_fraction_digits(value in decimal_strategy(), places in 0u32..=10) {
        let config = DisplayConfig::default().with_decimal_places(places);
        let text = fixed_render(&normalize(value), &config);
        let fraction = text.split_once('.').map_or("", |(_, fraction)| fraction);
        prop_assert_eq!(fraction.len(), places as usize);
        prop_assert_eq!(text.contains('.'), places > 0);
    }

    #[test]
    fn unmarked_abbreviations_are_exact(value in decimal_strategy()) {
        let locale = LocaleSettings::default();
        let text = abbreviate(value, &locale);
        if !text.starts_with(APPROXIMATION_MARKER) {
            prop_assert_eq!(parse_compact_text(&text, &locale).unwrap(), value);
        }
    }

    #[test]
    fn buffered_value_is_zero_at_or_below_fee(fee in 0i64..1_000_000, delta in 0i64..1_000_000) {
        let fee = Decimal::new(fee, 4);
        let value = fee - Decimal::new(delta, 4);
        let config = DisplayConfig::default().with_fee_amount(fee);
        prop_assert_eq!(buffered_value(&normalize(value), &config), Amount::ZERO);
    }

    #[test]
    fn renders_are_idempotent(value in decimal_strategy()) {
        let config = DisplayConfig::default()
            .with_abbreviation_floor(Decimal::new(1000, 0))
            .with_display_absolute_decimal_place(true);
        let formatter = DisplayFormatter::new(value, config);
        let first = (
            formatter.fixed().to_string(),
            formatter.grouped().to_string(),
            formatter.buffered_fixed().to_string(),
            formatter.buffered_grouped().to_string(),
        );
        let fresh = DisplayFormatter::new(value, formatter.config().clone());
        prop_assert_eq!(first.0.as_str(), fresh.fixed());
        prop_assert_eq!(first.1.as_str(), fresh.grouped());
        prop_assert_eq!(first.2.as_str(), fresh.buffered_fixed());
        prop_assert_eq!(first.3.as_str(), fresh.buffered_grouped());
        prop_assert_eq!(first.1.as_str(), formatter.grouped());
    }

    #[test]
    fn normalize_never_fails_on_text(text in "\\PC*") {
        let amount = normalize(text.as_str());
        prop_assert!(amount.is_nan() || amount.as_decimal().is_some());
    }
}
