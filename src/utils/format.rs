//! Human-readable formatting helpers used when rendering summaries.

/// Render a duration in seconds for display
///
/// **Public** - used by the text summary
///
/// Durations of an hour or more are shown as `1h05m`, of a minute or more
/// as `2m07s`, and anything shorter with two decimals (`3.14s`).
pub fn format_duration(seconds: f64) -> String {
    if seconds >= 3600.0 {
        let minutes = (seconds / 60.0).round() as u64;
        format!("{}h{:02}m", minutes / 60, minutes % 60)
    } else if seconds >= 60.0 {
        let secs = seconds.round() as u64;
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{:.2}s", seconds)
    }
}

/// Plural marker for a count word: empty for exactly one, `"s"` otherwise
pub fn plural_suffix(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
