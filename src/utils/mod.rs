//! Utility modules for configuration, error handling, and formatting.

pub mod config;
pub mod error;
pub mod format;

// Re-export commonly used items for convenience
pub use error::{OutputError, ParseError};
pub use format::{format_duration, plural_suffix};
