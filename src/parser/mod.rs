//! Amount text parsing module
//!
//! This module turns raw textual amounts (`"0.00000001"`, `"1e-8"`) and compact
//! renderings (`"1.2M"`, `"≈3.4 Mio."`) back into exact decimals.
//! The entry points are `parse_decimal_text` and `parse_compact_text`.

mod combinators;
mod compact;
mod decimal;

use thiserror::Error;

pub use compact::parse_compact_text;
pub use decimal::parse_decimal_text;

/// Errors raised while reading amount text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The text is not a number
    #[error("not a number: '{0}'")]
    Invalid(String),
    /// The number does not fit into a 96-bit decimal
    #[error("number out of range: '{0}'")]
    Overflow(String),
    /// The compact suffix is not known to the locale
    #[error("unknown compact suffix '{0}'")]
    UnknownSuffix(String),
}
