//! Longest dependency-weighted path per rule.
//!
//! Rules arrive in topological order, so the table is filled front to back:
//!
//! ```text
//! path[i] = execution[i] + max(path[d] for d in depends[i], default 0)
//! ```
//!
//! Every `path[d]` a rule needs is already present when the rule is pushed,
//! so a flat vector indexed by rule position is all the graph we need.

use crate::profile::RuleRecord;

/// Per-rule critical path lengths, indexed by rule position
///
/// **Public** - built by the aggregator, exposed for inspection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriticalPathTable {
    paths: Vec<f64>,

    longest: f64,
}

impl CriticalPathTable {
    /// Create an empty table sized for `rules` entries
    pub fn with_capacity(rules: usize) -> Self {
        Self {
            paths: Vec::with_capacity(rules),
            longest: 0.0,
        }
    }

    /// Append the next rule and return its path length
    ///
    /// A dependency outside the table counts as zero. Callers must supply
    /// dependencies on earlier rules only; nothing here checks it.
    pub fn push_rule(&mut self, execution: f64, depends: &[usize]) -> f64 {
        let longest_dependency = depends
            .iter()
            .map(|&d| self.paths.get(d).copied().unwrap_or(0.0))
            .fold(0.0, f64::max);

        let path = longest_dependency + execution;
        self.longest = self.longest.max(path);
        self.paths.push(path);

        path
    }

    /// Path length ending at rule `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.paths.get(index).copied()
    }

    /// Largest path length seen so far (0 for an empty table)
    pub fn longest(&self) -> f64 {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.paths
    }
}

/// Compute the critical path table for a whole database
///
/// **Public** - same recurrence `aggregate` uses, without the other statistics
pub fn critical_path_table(records: &[RuleRecord]) -> CriticalPathTable {
    records.iter().fold(
        CriticalPathTable::with_capacity(records.len()),
        |mut table, record| {
            table.push_rule(record.execution, &record.depends);
            table
        },
    )
}
