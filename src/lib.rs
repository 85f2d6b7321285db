//! Build Profile
//!
//! Summary statistics for a build tool's profiling database: rule and
//! traced-command counts, timing totals and maxima, an estimate of the
//! parallelism achieved in the last run, and the critical path through the
//! rule dependency graph.
//!
//! ```ignore
//! use build_profile::{aggregate, load_profile};
//!
//! let records = load_profile("profile.json")?;
//! let summary = aggregate(&records);
//! println!("critical path: {:.2}s", summary.critical_path);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod profile;
pub mod utils;

pub use aggregator::{aggregate, SummaryStatistics};
pub use profile::{load_profile, RuleRecord, TraceSpan};
