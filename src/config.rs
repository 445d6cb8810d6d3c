//! Loading and validation of `DisplayConfig`
//!
//! Configuration is the only fallible surface of the crate: once a config has been
//! accepted, rendering never fails.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::locale::get_locale_settings;
use crate::types::DisplayConfig;

/// Errors raised while reading a display configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid display config: {0}")]
    Parse(String),
    #[error("fee amount must not be negative, got {0}")]
    NegativeFee(Decimal),
    #[error("abbreviation floor must be positive, got {0}")]
    NonPositiveAbbreviationFloor(Decimal),
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),
}

impl DisplayConfig {
    /// Parse a configuration from TOML, filling missing fields with defaults
    ///
    /// # Examples
    /// ```
    /// use amount_format::types::{DisplayConfig, RoundingMode};
    ///
    /// let config = DisplayConfig::from_toml_str(
    ///     "decimal_places = 4\nrounding_mode = \"round-half-up\"\n",
    /// )
    /// .unwrap();
    /// assert_eq!(config.decimal_places, 4);
    /// assert_eq!(config.rounding_mode, RoundingMode::HalfUp);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: DisplayConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants of the configuration record
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fee_amount.is_sign_negative() && !self.fee_amount.is_zero() {
            return Err(ConfigError::NegativeFee(self.fee_amount));
        }

        if let Some(floor) = self.abbreviation_floor {
            if floor <= Decimal::ZERO {
                return Err(ConfigError::NonPositiveAbbreviationFloor(floor));
            }
        }

        if get_locale_settings(&self.locale).is_none() {
            return Err(ConfigError::UnknownLocale(self.locale.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::RoundingMode;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DisplayConfig::from_toml_str("").unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.minimal_decimal_places, 4);
        assert_eq!(config.fee_amount, dec!(0.005));
        assert_eq!(config.rounding_mode, RoundingMode::Down);
        assert!(!config.display_absolute_decimal_place);
        assert!(config.abbreviation_floor.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = DisplayConfig::from_toml_str(
            r#"
            decimal_places = 3
            minimal_decimal_places = 6
            abbreviation_floor = "1000"
            fee_amount = 0.01
            rounding_mode = "round-half-even"
            display_absolute_decimal_place = true
            locale = "de_DE"
            "#,
        )
        .unwrap();

        assert_eq!(config.decimal_places, 3);
        assert_eq!(config.minimal_decimal_places, 6);
        assert_eq!(config.abbreviation_floor, Some(dec!(1000)));
        assert_eq!(config.fee_amount, dec!(0.01));
        assert_eq!(config.rounding_mode, RoundingMode::HalfEven);
        assert!(config.display_absolute_decimal_place);
        assert_eq!(config.locale, "de_DE");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(
            DisplayConfig::from_toml_str("fee_amount = \"-1\""),
            Err(ConfigError::NegativeFee(dec!(-1)))
        );
        assert_eq!(
            DisplayConfig::from_toml_str("abbreviation_floor = 0"),
            Err(ConfigError::NonPositiveAbbreviationFloor(dec!(0)))
        );
        assert_eq!(
            DisplayConfig::from_toml_str("locale = \"xx_XX\""),
            Err(ConfigError::UnknownLocale("xx_XX".to_string()))
        );
        assert!(matches!(
            DisplayConfig::from_toml_str("rounding_mode = \"sideways\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DisplayConfig::from_toml_str("decimal_places = -1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DisplayConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
