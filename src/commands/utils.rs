use crate::profile::load_profile;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a profiling database file
pub fn validate_profile_file(file_path: &Path) -> Result<()> {
    println!("Validating profile: {}", file_path.display());

    let records = load_profile(file_path)
        .with_context(|| format!("Invalid profile database {}", file_path.display()))?;

    let traces: usize = records.iter().map(|r| r.traces.len()).sum();
    let last_run = records.iter().filter(|r| r.is_last_run()).count();

    println!("✓ Valid profile database");
    println!("  Rules: {}", records.len());
    println!("  Rebuilt in last run: {}", last_run);
    println!("  Traced commands: {}", traces);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("build-profile v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Summary statistics and critical path analysis for build profiling databases.");
}
