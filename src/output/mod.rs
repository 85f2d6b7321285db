//! Output writers for summary statistics.
//!
//! This module handles presenting aggregated data:
//! - Text summaries for the terminal
//! - Versioned JSON reports on disk

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report, SummaryReport};
pub use text::{generate_text_summary, summary_lines};
