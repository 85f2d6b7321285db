//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod summary;
pub mod utils;

// Re-export main command functions
pub use summary::{execute_summary, validate_args, SummaryArgs};
pub use utils::{display_version, validate_profile_file};
