//! Resolution of the "less-than" display threshold

use rust_decimal::Decimal;

use crate::formatter::digits::MAX_SCALE;
use crate::types::MinimalDisplay;

/// Upper bound on the precision revealed for tiny values
pub const MAX_ABSOLUTE_DECIMAL_PLACES: u32 = 12;

/// Resolve the precision and threshold used to render very small values
///
/// With `display_absolute_decimal_place` set, a value at or below `10^-minimal_decimal_places`
/// reveals its own fractional precision (trailing zeros ignored, capped at 12 digits)
/// instead of collapsing onto the fixed threshold.
///
/// # Examples
/// ```
/// use amount_format::formatter::resolve_minimal_display;
/// use rust_decimal::Decimal;
///
/// let minimal = resolve_minimal_display(Decimal::new(1, 8), 4, true);
/// assert_eq!(minimal.decimal_places, 8);
/// assert_eq!(minimal.threshold, Decimal::new(1, 8));
/// ```
pub fn resolve_minimal_display(
    value: Decimal,
    minimal_decimal_places: u32,
    display_absolute_decimal_place: bool,
) -> MinimalDisplay {
    if value.is_zero() {
        return MinimalDisplay {
            decimal_places: 2,
            threshold: Decimal::ZERO,
        };
    }

    let minimal_decimal_places = minimal_decimal_places.min(MAX_SCALE);
    let threshold = Decimal::new(1, minimal_decimal_places);

    if display_absolute_decimal_place && value.abs() <= threshold {
        let decimal_places = value.normalize().scale().min(MAX_ABSOLUTE_DECIMAL_PLACES);
        return MinimalDisplay {
            decimal_places,
            threshold: Decimal::new(1, decimal_places),
        };
    }

    MinimalDisplay {
        decimal_places: minimal_decimal_places,
        threshold,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_zero() {
        let minimal = resolve_minimal_display(Decimal::ZERO, 4, true);
        assert_eq!(minimal.decimal_places, 2);
        assert_eq!(minimal.threshold, Decimal::ZERO);
    }

    #[test]
    fn test_fixed_threshold() {
        let minimal = resolve_minimal_display(dec!(0.00000001), 4, false);
        assert_eq!(minimal.decimal_places, 4);
        assert_eq!(minimal.threshold, dec!(0.0001));

        let minimal = resolve_minimal_display(dec!(15.5), 4, true);
        assert_eq!(minimal.decimal_places, 4);
        assert_eq!(minimal.threshold, dec!(0.0001));
    }

    #[test]
    fn test_absolute_precision() {
        let minimal = resolve_minimal_display(dec!(0.00000001), 4, true);
        assert_eq!(minimal.decimal_places, 8);
        assert_eq!(minimal.threshold, dec!(0.00000001));

        let minimal = resolve_minimal_display(dec!(-0.0000250), 4, true);
        assert_eq!(minimal.decimal_places, 6);
    }

    #[test]
    fn test_absolute_precision_is_capped() {
        let minimal = resolve_minimal_display(dec!(0.000000000000001), 4, true);
        assert_eq!(minimal.decimal_places, 12);
        assert_eq!(minimal.threshold, dec!(0.000000000001));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let minimal = resolve_minimal_display(dec!(0.0001), 4, true);
        assert_eq!(minimal.decimal_places, 4);
        assert_eq!(minimal.threshold, dec!(0.0001));
    }
}
