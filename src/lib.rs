pub mod config;
pub mod display;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// Main API
pub use config::ConfigError;
pub use display::DisplayFormatter;
pub use formatter::{
    abbreviate, buffered_fixed_render, buffered_grouped_render, buffered_value, fixed_render,
    grouped_render, normalize, resolve_minimal_display,
};
pub use types::*;
