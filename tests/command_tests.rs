use build_profile::commands::{execute_summary, validate_args, validate_profile_file, SummaryArgs};
use build_profile::output::read_report;
use build_profile::utils::config::SCHEMA_VERSION;
use std::fs;
use std::path::PathBuf;

const DATABASE: &str = r#"[
    ["config.h", 0.5, 3, 5, [], [["configure", 0, 0.5]]],
    ["a.o", 2, 0, 0, [[0]], [["cc a.c", 0, 2]]],
    ["b.o", 4, 0, 0, [[0]], [["cc b.c", 0, 4]]],
    ["app", 1, 0, 0, [[1, 2]], [["ld", 4, 5]]]
]"#;

#[test]
fn test_summary_writes_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let profile = temp_dir.path().join("profile.json");
    let report_path = temp_dir.path().join("out/summary.json");
    fs::write(&profile, DATABASE).unwrap();

    let args = SummaryArgs {
        profile: profile.clone(),
        output_json: Some(report_path.clone()),
        print_summary: false,
    };
    validate_args(&args).unwrap();

    let summary = execute_summary(&args).unwrap();
    assert_eq!(summary.rule_count, 4);
    assert_eq!(summary.critical_path, 5.5);

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.version, SCHEMA_VERSION);
    assert_eq!(report.source, profile.display().to_string());
    assert_eq!(report.statistics.rule_count, summary.rule_count);
    assert_eq!(report.statistics.longest_rule.name, "b.o");
    assert_eq!(report.statistics.critical_path, 5.5);
}

#[test]
fn test_summary_without_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let profile = temp_dir.path().join("profile.json");
    fs::write(&profile, "[]").unwrap();

    let args = SummaryArgs {
        profile,
        output_json: None,
        print_summary: true,
    };

    let summary = execute_summary(&args).unwrap();
    assert_eq!(summary.tracked_runs, 1);
}

#[test]
fn test_summary_rejects_unordered_database() {
    let temp_dir = tempfile::tempdir().unwrap();
    let profile = temp_dir.path().join("profile.json");
    fs::write(&profile, r#"[["a", 1, 0, 0, [[1]]], ["b", 1, 0, 0]]"#).unwrap();

    let args = SummaryArgs {
        profile,
        print_summary: false,
        ..Default::default()
    };

    let err = execute_summary(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("does not come before it"));
}

#[test]
fn test_validate_profile_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let profile = temp_dir.path().join("profile.json");
    fs::write(&profile, DATABASE).unwrap();

    assert!(validate_profile_file(&profile).is_ok());
    assert!(validate_profile_file(&PathBuf::from("/nonexistent/profile.json")).is_err());
}
