//! Configuration and constants for the CLI.

/// Current summary report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Profiling database read when `--profile` is not given
pub const DEFAULT_PROFILE_PATH: &str = "profile.json";

/// Where `summary --output` writes when given without a value
pub const DEFAULT_REPORT_PATH: &str = "summary.json";

// Positional layout of a compact rule entry:
// [name, execution, built, changed, depends?, traces?]
pub const RULE_NAME: usize = 0;
pub const RULE_EXECUTION: usize = 1;
pub const RULE_BUILT: usize = 2;
pub const RULE_CHANGED: usize = 3;
pub const RULE_DEPENDS: usize = 4;
pub const RULE_TRACES: usize = 5;

/// Fewest elements a compact rule entry may have
pub const RULE_MIN_FIELDS: usize = 4;
