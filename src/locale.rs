//! Locale support for amount formatting
//!
//! This module loads the embedded locale table (separators and compact-notation units)
//! and resolves locale identifiers such as `en_US` or `de_DE` to `LocaleSettings`.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::types::{CompactUnit, LocaleSettings};

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Registry of the locales known to the formatter
struct LocaleManager {
    locale_settings: HashMap<String, LocaleSettings>,
}

static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    fn new() -> Self {
        let mut manager = Self {
            locale_settings: HashMap::new(),
        };

        if let Err(e) = manager.load_settings(include_str!("locale/locale_settings.toml")) {
            log::error!("Failed to load embedded locale data: {e}");
        }

        manager
    }

    fn load_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut base_settings = LocaleSettings::default();
        if let Some(base) = table.get("base") {
            apply_locale_settings(&mut base_settings, base)?;
        }

        for (locale_id, value) in table {
            if locale_id == "base" {
                continue;
            }

            let mut settings = base_settings.clone();
            apply_locale_settings(&mut settings, value)
                .map_err(|e| LocaleError::ParseError(format!("{locale_id}: {e}")))?;
            self.locale_settings.insert(locale_id.to_string(), settings);
        }

        log::debug!("Loaded {} locales", self.locale_settings.len());
        Ok(())
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }
}

/// Apply the fields present in a TOML locale entry over `settings`
fn apply_locale_settings(settings: &mut LocaleSettings, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

    if let Some(c) = table
        .get("decimal")
        .and_then(|v| v.as_str())
        .and_then(|s| s.chars().next())
    {
        settings.decimal_point = c;
    }

    if let Some(c) = table
        .get("group")
        .and_then(|v| v.as_str())
        .and_then(|s| s.chars().next())
    {
        settings.thousands_separator = c;
    }

    if let Some(units) = table.get("compact") {
        settings.compact_units = parse_compact_units(units)?;
    }

    if settings.decimal_point == settings.thousands_separator {
        return Err(LocaleError::ParseError(
            "decimal point and group separator must differ".to_string(),
        ));
    }

    Ok(())
}

fn parse_compact_units(value: &toml::Value) -> Result<Vec<CompactUnit>> {
    let entries = value
        .as_array()
        .ok_or_else(|| LocaleError::ParseError("compact is not an array".to_string()))?;

    let mut units = Vec::with_capacity(entries.len());
    for entry in entries {
        let exponent = entry
            .get("exponent")
            .and_then(|v| v.as_integer())
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0)
            .ok_or_else(|| {
                LocaleError::ParseError("Missing or invalid compact exponent".to_string())
            })?;

        let suffix = entry
            .get("suffix")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LocaleError::ParseError("Missing or empty compact suffix".to_string()))?;

        units.push(CompactUnit::new(exponent, suffix));
    }

    units.sort_by_key(|unit| unit.exponent);
    Ok(units)
}

/// Get locale settings by locale identifier (e.g., "en_US", "de_DE")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleManager::get().locale_settings.get(locale_id).cloned()
}

/// Like `get_locale_settings`, reporting unknown identifiers as an error
pub fn require_locale_settings(locale_id: &str) -> Result<LocaleSettings> {
    get_locale_settings(locale_id).ok_or_else(|| LocaleError::NotFound(locale_id.to_string()))
}

/// Resolve a locale for rendering, falling back to the built-in `en_US` defaults
pub fn resolve_locale_settings(locale_id: &str) -> LocaleSettings {
    get_locale_settings(locale_id).unwrap_or_else(|| {
        log::warn!("Unknown locale '{locale_id}', falling back to en_US");
        LocaleSettings::default()
    })
}

/// List all available locale identifiers
pub fn list_available_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleManager::get()
        .locale_settings
        .keys()
        .cloned()
        .collect();
    locales.sort();
    locales
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_loading() {
        let locales = list_available_locales();
        assert!(!locales.is_empty(), "Should have loaded some locales");
        assert!(!locales.iter().any(|l| l == "base"));

        let en_us = get_locale_settings("en_US").unwrap();
        assert_eq!(en_us, LocaleSettings::default());
    }

    #[test]
    fn test_locale_overrides_base() {
        let de = get_locale_settings("de_DE").unwrap();
        assert_eq!(de.decimal_point, ',');
        assert_eq!(de.thousands_separator, '.');
        assert_eq!(de.compact_units[0], CompactUnit::new(6, " Mio."));

        let zh = get_locale_settings("zh_CN").unwrap();
        assert_eq!(zh.decimal_point, '.');
        assert_eq!(zh.compact_units.len(), 3);
        assert_eq!(zh.compact_units[0].exponent, 4);
    }

    #[test]
    fn test_unknown_locale() {
        assert!(get_locale_settings("xx_XX").is_none());
        assert_eq!(
            require_locale_settings("xx_XX"),
            Err(LocaleError::NotFound("xx_XX".to_string()))
        );
        assert_eq!(resolve_locale_settings("xx_XX"), LocaleSettings::default());
    }

    #[test]
    fn test_invalid_compact_entry() {
        let mut manager = LocaleManager {
            locale_settings: HashMap::new(),
        };
        let err = manager
            .load_settings("[xx]\ncompact = [{ exponent = 0, suffix = \"Z\" }]\n")
            .unwrap_err();
        assert!(matches!(err, LocaleError::ParseError(_)));

        let err = manager
            .load_settings("[xx]\ndecimal = \",\"\ngroup = \",\"\n")
            .unwrap_err();
        assert!(matches!(err, LocaleError::ParseError(_)));
    }
}
