//! Aggregation of profiling databases into summary statistics.
//!
//! This module transforms loaded rule records into:
//! - Rule, traced-command and run counts
//! - Timing sums and maxima
//! - A parallelism estimate for the most recent run
//! - The critical path through the rule dependency graph

pub mod critical_path;
pub mod summary;

// Re-export main types and functions
pub use critical_path::{critical_path_table, CriticalPathTable};
pub use summary::{aggregate, Longest, SummaryAccumulator, SummaryStatistics};
