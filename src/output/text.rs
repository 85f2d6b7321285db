//! Plain-text rendering of summary statistics.

use crate::aggregator::SummaryStatistics;
use crate::utils::format::{format_duration, plural_suffix};

/// Render the summary as one sentence per statistic
///
/// **Public** - used by the `summary` command and anything embedding the report
pub fn summary_lines(summary: &SummaryStatistics) -> Vec<String> {
    vec![
        format!(
            "This database has tracked {} run{}.",
            summary.tracked_runs,
            plural_suffix(summary.tracked_runs)
        ),
        format!(
            "There are {} rules ({} rebuilt in the last run).",
            summary.rule_count, summary.rule_count_last_run
        ),
        format!(
            "Building required {} traced commands ({} in the last run).",
            summary.traced_count, summary.traced_count_last_run
        ),
        format!(
            "The total (unparallelised) build time is {} of which {} is traced commands.",
            format_duration(summary.total_execution),
            format_duration(summary.total_traced)
        ),
        format!(
            "The longest rule takes {} ({}) and the longest traced command takes {} ({}).",
            format_duration(summary.longest_rule.seconds),
            summary.longest_rule.name,
            format_duration(summary.longest_traced.seconds),
            summary.longest_traced.name
        ),
        format!(
            "Last run gave an average parallelism of {:.2} times over {}.",
            summary.parallelism,
            format_duration(summary.last_run_span)
        ),
        format!(
            "The critical path was {}.",
            format_duration(summary.critical_path)
        ),
    ]
}

/// Render the summary as a bulleted block for the terminal
pub fn generate_text_summary(summary: &SummaryStatistics) -> String {
    summary_lines(summary)
        .iter()
        .map(|line| format!("  * {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::profile::{RuleRecord, TraceSpan};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_lines_two_rules() {
        let records = vec![
            RuleRecord::new("rule 0", 5.0, 1, 2),
            RuleRecord::new("rule 1", 3.0, 0, 3)
                .with_depends(vec![0])
                .with_traces(vec![TraceSpan::new("cc", 0.0, 3.0)]),
        ];
        let lines = summary_lines(&aggregate(&records));

        assert_eq!(
            lines,
            vec![
                "This database has tracked 4 runs.",
                "There are 2 rules (1 rebuilt in the last run).",
                "Building required 1 traced commands (1 in the last run).",
                "The total (unparallelised) build time is 8.00s of which 3.00s is traced commands.",
                "The longest rule takes 5.00s (rule 0) and the longest traced command takes 3.00s (cc).",
                "Last run gave an average parallelism of 1.00 times over 3.00s.",
                "The critical path was 8.00s.",
            ]
        );
    }

    #[test]
    fn test_single_run_is_not_plural() {
        let lines = summary_lines(&aggregate(&[]));
        assert_eq!(lines[0], "This database has tracked 1 run.");
    }

    #[test]
    fn test_text_summary_is_bulleted() {
        let text = generate_text_summary(&aggregate(&[]));
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().all(|l| l.starts_with("  * ")));
    }
}
