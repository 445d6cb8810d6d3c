//! Type definitions for amount display formatting
//!
//! This module defines the configuration record, the raw source values accepted by the
//! formatter and the canonical decimal they are normalized into.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding applied when a value is rendered to a fixed number of fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Away from zero
    #[serde(rename = "round-up")]
    Up,
    /// Toward zero
    #[default]
    #[serde(rename = "round-down")]
    Down,
    /// Toward positive infinity
    #[serde(rename = "round-ceil")]
    Ceil,
    /// Toward negative infinity
    #[serde(rename = "round-floor")]
    Floor,
    /// Nearest neighbour, ties away from zero
    #[serde(rename = "round-half-up")]
    HalfUp,
    /// Nearest neighbour, ties toward zero
    #[serde(rename = "round-half-down")]
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour
    #[serde(rename = "round-half-even")]
    HalfEven,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` strategy
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceil => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

fn default_decimal_places() -> u32 {
    2
}

fn default_minimal_decimal_places() -> u32 {
    4
}

fn default_fee_amount() -> Decimal {
    Decimal::new(5, 3)
}

fn default_locale() -> String {
    "en_US".to_string()
}

/// Display configuration, supplied once per formatter instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Fixed fractional digits for normal rendering
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Precision below which values are rendered as "less-than"
    #[serde(default = "default_minimal_decimal_places")]
    pub minimal_decimal_places: u32,
    /// Magnitude from which compact (K/M/B/T) notation is used
    #[serde(default)]
    pub abbreviation_floor: Option<Decimal>,
    /// Amount subtracted before buffered rendering
    #[serde(default = "default_fee_amount")]
    pub fee_amount: Decimal,
    /// Rounding applied at fixed-point rendering
    #[serde(default)]
    pub rounding_mode: RoundingMode,
    /// Reveal the true precision of sub-threshold values (up to 12 digits)
    #[serde(default)]
    pub display_absolute_decimal_place: bool,
    /// Locale identifier used for separators and compact units
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            minimal_decimal_places: default_minimal_decimal_places(),
            abbreviation_floor: None,
            fee_amount: default_fee_amount(),
            rounding_mode: RoundingMode::default(),
            display_absolute_decimal_place: false,
            locale: default_locale(),
        }
    }
}

impl DisplayConfig {
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_minimal_decimal_places(mut self, minimal_decimal_places: u32) -> Self {
        self.minimal_decimal_places = minimal_decimal_places;
        self
    }

    pub fn with_abbreviation_floor(mut self, floor: Decimal) -> Self {
        self.abbreviation_floor = Some(floor);
        self
    }

    pub fn with_fee_amount(mut self, fee_amount: Decimal) -> Self {
        self.fee_amount = fee_amount;
        self
    }

    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }

    pub fn with_display_absolute_decimal_place(mut self, enabled: bool) -> Self {
        self.display_absolute_decimal_place = enabled;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// A raw input value of unknown origin
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SourceValue {
    /// Missing value (undefined / null)
    #[default]
    Absent,
    /// Textual number, e.g. `"0.00000001"` or `"1e-8"`
    Text(String),
    /// Plain floating point number
    Number(f64),
    /// Already parsed decimal, passed through unchanged
    Decimal(Decimal),
}

impl From<&str> for SourceValue {
    fn from(value: &str) -> Self {
        SourceValue::Text(value.to_string())
    }
}

impl From<String> for SourceValue {
    fn from(value: String) -> Self {
        SourceValue::Text(value)
    }
}

impl From<f64> for SourceValue {
    fn from(value: f64) -> Self {
        SourceValue::Number(value)
    }
}

impl From<i64> for SourceValue {
    fn from(value: i64) -> Self {
        SourceValue::Decimal(Decimal::from(value))
    }
}

impl From<u64> for SourceValue {
    fn from(value: u64) -> Self {
        SourceValue::Decimal(Decimal::from(value))
    }
}

impl From<Decimal> for SourceValue {
    fn from(value: Decimal) -> Self {
        SourceValue::Decimal(value)
    }
}

impl<T: Into<SourceValue>> From<Option<T>> for SourceValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SourceValue::Absent, Into::into)
    }
}

/// Canonical decimal produced by normalization
///
/// `NaN` renders like zero but is kept apart so that arithmetic (fee buffering) can
/// refuse to operate on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    Finite(Decimal),
    NaN,
}

impl Amount {
    pub const ZERO: Amount = Amount::Finite(Decimal::ZERO);

    pub fn is_nan(&self) -> bool {
        matches!(self, Amount::NaN)
    }

    /// True for exact zero and for NaN, the two values rendered as the zero string
    pub fn is_zero_or_nan(&self) -> bool {
        match self {
            Amount::Finite(value) => value.is_zero(),
            Amount::NaN => true,
        }
    }

    /// The decimal value, with NaN read as zero
    pub fn value(&self) -> Decimal {
        match self {
            Amount::Finite(value) => *value,
            Amount::NaN => Decimal::ZERO,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Finite(value) => Some(*value),
            Amount::NaN => None,
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Finite(value)
    }
}

/// Precision resolved for "less-than" rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimalDisplay {
    /// Fractional digits used to render the threshold
    pub decimal_places: u32,
    /// Smallest magnitude shown as a number rather than as "< threshold"
    pub threshold: Decimal,
}

/// A compact-notation unit, e.g. `K` for 10^3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactUnit {
    /// Power of ten the unit stands for
    pub exponent: u32,
    /// Suffix appended to the scaled number
    pub suffix: String,
}

impl CompactUnit {
    pub fn new(exponent: u32, suffix: impl Into<String>) -> Self {
        Self {
            exponent,
            suffix: suffix.into(),
        }
    }
}

/// Locale-specific settings for separators and compact notation
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Decimal point character
    pub decimal_point: char,
    /// Thousands separator character
    pub thousands_separator: char,
    /// Compact units, ordered by ascending exponent
    pub compact_units: Vec<CompactUnit>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            thousands_separator: ',',
            compact_units: vec![
                CompactUnit::new(3, "K"),
                CompactUnit::new(6, "M"),
                CompactUnit::new(9, "B"),
                CompactUnit::new(12, "T"),
            ],
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    pub fn with_thousands_separator(mut self, thousands_separator: char) -> Self {
        self.thousands_separator = thousands_separator;
        self
    }
}
