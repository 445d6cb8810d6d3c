//! Memoized per-instance display values
//!
//! A `DisplayFormatter` owns one source value and one configuration. Each derived
//! value is computed on first read and cached until either input is replaced.

use std::cell::OnceCell;

use crate::formatter;
use crate::types::{Amount, DisplayConfig, SourceValue};

#[derive(Debug, Default)]
struct Cache {
    fixed: OnceCell<String>,
    grouped: OnceCell<String>,
    buffered_value: OnceCell<Amount>,
    buffered_fixed: OnceCell<String>,
    buffered_grouped: OnceCell<String>,
}

/// Derived display values for one source value and configuration
///
/// # Examples
/// ```
/// use amount_format::display::DisplayFormatter;
/// use amount_format::types::DisplayConfig;
///
/// let mut formatter = DisplayFormatter::new("0.01", DisplayConfig::default());
/// assert_eq!(formatter.fixed(), "0.01");
/// assert_eq!(formatter.buffered_fixed(), "0.00");
///
/// formatter.set_value("2.5");
/// assert_eq!(formatter.fixed(), "2.50");
/// ```
#[derive(Debug)]
pub struct DisplayFormatter {
    value: Amount,
    config: DisplayConfig,
    cache: Cache,
}

impl DisplayFormatter {
    pub fn new(source: impl Into<SourceValue>, config: DisplayConfig) -> Self {
        Self {
            value: formatter::normalize(source),
            config,
            cache: Cache::default(),
        }
    }

    /// Replace the source value, invalidating every derived value
    pub fn set_value(&mut self, source: impl Into<SourceValue>) {
        self.value = formatter::normalize(source);
        self.cache = Cache::default();
    }

    /// Replace the configuration, invalidating every derived value
    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
        self.cache = Cache::default();
    }

    /// The canonical value
    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn fixed(&self) -> &str {
        self.cache.fixed.get_or_init(|| {
            log::trace!("Recomputing fixed render");
            formatter::fixed_render(&self.value, &self.config)
        })
    }

    pub fn grouped(&self) -> &str {
        self.cache.grouped.get_or_init(|| {
            log::trace!("Recomputing grouped render");
            formatter::grouped_render(&self.value, &self.config)
        })
    }

    pub fn buffered_value(&self) -> Amount {
        *self.cache.buffered_value.get_or_init(|| {
            log::trace!("Recomputing buffered value");
            formatter::buffered_value(&self.value, &self.config)
        })
    }

    pub fn buffered_fixed(&self) -> &str {
        self.cache.buffered_fixed.get_or_init(|| {
            log::trace!("Recomputing buffered fixed render");
            formatter::buffered_fixed_render(&self.value, &self.config)
        })
    }

    pub fn buffered_grouped(&self) -> &str {
        self.cache.buffered_grouped.get_or_init(|| {
            log::trace!("Recomputing buffered grouped render");
            formatter::buffered_grouped_render(&self.value, &self.config)
        })
    }
}
