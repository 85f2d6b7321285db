//! Summary command implementation.
//!
//! The summary command:
//! 1. Loads the profiling database
//! 2. Aggregates it into summary statistics
//! 3. Prints the text summary
//! 4. Optionally writes a JSON report

use crate::aggregator::{aggregate, SummaryStatistics};
use crate::output::{generate_text_summary, write_report, SummaryReport};
use crate::profile::load_profile;
use crate::utils::config::DEFAULT_PROFILE_PATH;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the summary command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    /// Profiling database to read
    pub profile: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for SummaryArgs {
    fn default() -> Self {
        Self {
            profile: PathBuf::from(DEFAULT_PROFILE_PATH),
            output_json: None,
            print_summary: true,
        }
    }
}

/// Execute the summary command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The computed statistics, so callers can reuse them
///
/// # Errors
/// * Profile loading or validation failures
/// * Report write errors
pub fn execute_summary(args: &SummaryArgs) -> Result<SummaryStatistics> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading profile database...");
    let records = load_profile(&args.profile).with_context(|| {
        format!("Failed to load profile database {}", args.profile.display())
    })?;

    debug!("Loaded {} rules", records.len());

    info!("Step 2/3: Aggregating statistics...");
    let summary = aggregate(&records);

    if args.print_summary {
        println!("{}", generate_text_summary(&summary));
    }

    match &args.output_json {
        Some(path) => {
            info!("Step 3/3: Writing summary report...");
            let report = SummaryReport::new(args.profile.display().to_string(), summary.clone());
            write_report(&report, path).context("Failed to write summary report")?;
            info!("✓ Summary report written to: {}", path.display());
        }
        None => info!("Step 3/3: Skipping summary report (not requested)"),
    }

    let elapsed = start_time.elapsed();
    info!("Summary completed in {:.2}s", elapsed.as_secs_f64());

    Ok(summary)
}

/// Validate summary arguments
///
/// **Public** - can be called before execute_summary for early validation
pub fn validate_args(args: &SummaryArgs) -> Result<()> {
    if args.profile.as_os_str().is_empty() {
        anyhow::bail!("Profile path cannot be empty");
    }

    if args.output_json.as_ref() == Some(&args.profile) {
        anyhow::bail!("Report output would overwrite the profile database");
    }

    Ok(())
}
