//! Summary statistics over a whole profiling database.
//!
//! One forward pass over the rules, folding each record into a
//! [`SummaryAccumulator`] and finishing into [`SummaryStatistics`].

use super::critical_path::CriticalPathTable;
use crate::profile::RuleRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// A running maximum together with the name that owns it
///
/// **Public** - used for the longest rule and longest traced command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Longest {
    pub seconds: f64,
    pub name: String,
}

impl Longest {
    /// Take `seconds` if it is at least the current maximum
    ///
    /// Ties go to the newcomer, so the later of two equal entries is kept.
    fn offer(&mut self, seconds: f64, name: &str) {
        if seconds >= self.seconds {
            self.seconds = seconds;
            self.name.clear();
            self.name.push_str(name);
        }
    }
}

/// Aggregate statistics for a profiling database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of runs the database has tracked
    pub tracked_runs: u64,

    pub rule_count: usize,

    /// Rules rebuilt in the most recent run
    pub rule_count_last_run: usize,

    pub traced_count: usize,
    pub traced_count_last_run: usize,

    /// Sum of every rule's execution time (unparallelised build time)
    pub total_execution: f64,

    pub total_traced: f64,
    pub total_traced_last_run: f64,

    pub longest_rule: Longest,
    pub longest_traced: Longest,

    /// Latest stop offset of any traced command in the most recent run
    pub last_run_span: f64,

    /// Traced work in the last run divided by its span, or 0 with no span
    pub parallelism: f64,

    /// Longest dependency-weighted chain of execution times
    pub critical_path: f64,
}

/// Running state threaded through the aggregation pass
///
/// **Public** - `aggregate` is the usual entry point; the accumulator is
/// exposed for callers that receive rules incrementally
#[derive(Debug, Clone, Default)]
pub struct SummaryAccumulator {
    rule_count: usize,
    rule_count_last_run: usize,
    highest_run: u32,
    total_execution: f64,
    longest_rule: Longest,
    traced_count: usize,
    traced_count_last_run: usize,
    total_traced: f64,
    total_traced_last_run: f64,
    longest_traced: Longest,
    last_run_span: f64,
    paths: CriticalPathTable,
}

impl SummaryAccumulator {
    pub fn with_capacity(rules: usize) -> Self {
        Self {
            paths: CriticalPathTable::with_capacity(rules),
            ..Default::default()
        }
    }

    /// Fold one rule into the running totals
    ///
    /// The rule's position is the number of rules seen before it, and its
    /// dependencies must all be among those.
    pub fn step(mut self, record: &RuleRecord) -> Self {
        let is_last = record.is_last_run();

        self.rule_count += 1;
        if is_last {
            self.rule_count_last_run += 1;
        }

        self.total_execution += record.execution;
        self.longest_rule.offer(record.execution, &record.name);
        self.highest_run = self.highest_run.max(record.changed);

        for trace in &record.traces {
            let time = trace.duration();

            self.traced_count += 1;
            self.total_traced += time;
            self.longest_traced.offer(time, &trace.command);

            if is_last {
                self.traced_count_last_run += 1;
                self.total_traced_last_run += time;
                self.last_run_span = self.last_run_span.max(trace.stop);
            }
        }

        self.paths.push_rule(record.execution, &record.depends);

        self
    }

    /// Per-rule critical path lengths accumulated so far
    pub fn paths(&self) -> &CriticalPathTable {
        &self.paths
    }

    pub fn finish(self) -> SummaryStatistics {
        let parallelism = if self.last_run_span == 0.0 {
            0.0
        } else {
            self.total_traced_last_run / self.last_run_span
        };

        SummaryStatistics {
            tracked_runs: u64::from(self.highest_run) + 1,
            rule_count: self.rule_count,
            rule_count_last_run: self.rule_count_last_run,
            traced_count: self.traced_count,
            traced_count_last_run: self.traced_count_last_run,
            total_execution: self.total_execution,
            total_traced: self.total_traced,
            total_traced_last_run: self.total_traced_last_run,
            longest_rule: self.longest_rule,
            longest_traced: self.longest_traced,
            last_run_span: self.last_run_span,
            parallelism,
            critical_path: self.paths.longest(),
        }
    }
}

/// Summarize a profiling database
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Rules in topological order: every dependency index must be
///   smaller than the index of the rule that names it
///
/// # Returns
/// Summary statistics; never fails, and an empty database yields zeros with
/// one tracked run
pub fn aggregate(records: &[RuleRecord]) -> SummaryStatistics {
    debug!("Aggregating {} rules", records.len());

    let summary = records
        .iter()
        .fold(
            SummaryAccumulator::with_capacity(records.len()),
            SummaryAccumulator::step,
        )
        .finish();

    debug!(
        "Critical path {:.2}s over {} rules, parallelism {:.2}",
        summary.critical_path, summary.rule_count, summary.parallelism
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TraceSpan;

    fn two_rule_database() -> Vec<RuleRecord> {
        vec![
            RuleRecord::new("rule 0", 5.0, 1, 2),
            RuleRecord::new("rule 1", 3.0, 0, 3)
                .with_depends(vec![0])
                .with_traces(vec![TraceSpan::new("cc", 0.0, 3.0)]),
        ]
    }

    #[test]
    fn test_aggregate_empty() {
        let summary = aggregate(&[]);

        assert_eq!(summary.tracked_runs, 1);
        assert_eq!(summary.rule_count, 0);
        assert_eq!(summary.rule_count_last_run, 0);
        assert_eq!(summary.traced_count, 0);
        assert_eq!(summary.traced_count_last_run, 0);
        assert_eq!(summary.total_execution, 0.0);
        assert_eq!(summary.total_traced, 0.0);
        assert_eq!(summary.critical_path, 0.0);
        assert_eq!(summary.parallelism, 0.0);
        assert_eq!(summary.longest_rule.name, "");
    }

    #[test]
    fn test_aggregate_two_rules() {
        let summary = aggregate(&two_rule_database());

        assert_eq!(summary.rule_count, 2);
        assert_eq!(summary.rule_count_last_run, 1);
        assert_eq!(summary.tracked_runs, 4);
        assert_eq!(summary.total_execution, 8.0);
        assert_eq!(summary.longest_rule.seconds, 5.0);
        assert_eq!(summary.longest_rule.name, "rule 0");
        assert_eq!(summary.critical_path, 8.0);
        assert_eq!(summary.traced_count, 1);
        assert_eq!(summary.traced_count_last_run, 1);
        assert_eq!(summary.last_run_span, 3.0);
        assert_eq!(summary.total_traced_last_run, 3.0);
        assert_eq!(summary.parallelism, 1.0);
    }

    #[test]
    fn test_longest_rule_tie_goes_to_later() {
        let records = vec![
            RuleRecord::new("first", 2.0, 0, 0),
            RuleRecord::new("second", 2.0, 0, 0),
            RuleRecord::new("short", 1.0, 0, 0),
        ];
        let summary = aggregate(&records);
        assert_eq!(summary.longest_rule.name, "second");
    }

    #[test]
    fn test_longest_trace_tie_goes_to_later() {
        let records = vec![
            RuleRecord::new("a", 1.0, 1, 1).with_traces(vec![TraceSpan::new("ld", 0.0, 2.0)]),
            RuleRecord::new("b", 1.0, 1, 1).with_traces(vec![TraceSpan::new("as", 5.0, 7.0)]),
        ];
        let summary = aggregate(&records);
        assert_eq!(summary.longest_traced.name, "as");
        assert_eq!(summary.longest_traced.seconds, 2.0);
    }

    #[test]
    fn test_no_last_run_traces_gives_zero_parallelism() {
        let records = vec![
            RuleRecord::new("old", 4.0, 2, 2).with_traces(vec![TraceSpan::new("cc", 0.0, 4.0)]),
            RuleRecord::new("fresh", 1.0, 0, 2),
        ];
        let summary = aggregate(&records);

        assert_eq!(summary.traced_count, 1);
        assert_eq!(summary.traced_count_last_run, 0);
        assert_eq!(summary.last_run_span, 0.0);
        assert_eq!(summary.parallelism, 0.0);
    }

    #[test]
    fn test_parallelism_over_overlapping_traces() {
        let records = vec![RuleRecord::new("all", 4.0, 0, 0).with_traces(vec![
            TraceSpan::new("cc a", 0.0, 2.0),
            TraceSpan::new("cc b", 0.0, 2.0),
            TraceSpan::new("ld", 2.0, 4.0),
        ])];
        let summary = aggregate(&records);

        assert_eq!(summary.total_traced_last_run, 6.0);
        assert_eq!(summary.last_run_span, 4.0);
        assert_eq!(summary.parallelism, 1.5);
    }

    #[test]
    fn test_accumulator_matches_aggregate() {
        let records = two_rule_database();
        let acc = records
            .iter()
            .fold(SummaryAccumulator::with_capacity(2), SummaryAccumulator::step);

        assert_eq!(acc.paths().as_slice(), &[5.0, 8.0]);
        assert_eq!(acc.finish(), aggregate(&records));
    }
}
