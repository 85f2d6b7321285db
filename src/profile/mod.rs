//! Profiling database model and loading.
//!
//! This module handles:
//! - Defining rule and trace records
//! - Parsing the build tool's JSON database
//! - Checking that dependencies are in topological order

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_profile, parse_profile};
pub use schema::{RuleRecord, TraceSpan};
