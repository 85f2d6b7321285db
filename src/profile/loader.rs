//! Profiling database loader.
//!
//! Reads the JSON database written by the build tool into an ordered list of
//! [`RuleRecord`]s. Two entry shapes are accepted:
//!
//! - the compact positional form `[name, execution, built, changed, depends?, traces?]`,
//!   where `depends` is a list of dependency groups and each trace is
//!   `[command, start, stop]`
//! - an object using the `RuleRecord` field names
//!
//! The loader guarantees that every dependency points at an earlier rule,
//! which is what the aggregator relies on.

use super::schema::{RuleRecord, TraceSpan};
use crate::utils::config::{
    RULE_BUILT, RULE_CHANGED, RULE_DEPENDS, RULE_EXECUTION, RULE_MIN_FIELDS, RULE_NAME,
    RULE_TRACES,
};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a profiling database from a JSON file
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `ParseError::IoError` - File cannot be opened
/// * `ParseError::JsonError` - File is not valid JSON
/// * `ParseError::InvalidFormat` - An entry has the wrong shape
/// * `ParseError::DependencyOrder` - A rule depends on a later rule
pub fn load_profile(path: impl AsRef<Path>) -> Result<Vec<RuleRecord>, ParseError> {
    let path = path.as_ref();

    info!("Loading profile database: {}", path.display());

    let file = File::open(path)?;
    let raw: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_profile(&raw)
}

/// Parse an already-decoded JSON database into rule records
///
/// **Public** - used by `load_profile` and tests
pub fn parse_profile(raw: &Value) -> Result<Vec<RuleRecord>, ParseError> {
    let entries = raw.as_array().ok_or_else(|| {
        ParseError::InvalidFormat("Profile database must be a JSON array of rules".to_string())
    })?;

    let records = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_rule(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    let trace_count: usize = records.iter().map(|r| r.traces.len()).sum();
    debug!("Parsed {} rules with {} traced commands", records.len(), trace_count);

    Ok(records)
}

/// Parse and check a single database entry
///
/// **Private** - dispatches on entry shape
fn parse_rule(index: usize, entry: &Value) -> Result<RuleRecord, ParseError> {
    let record = match entry {
        Value::Array(fields) => parse_compact_rule(index, fields)?,
        Value::Object(_) => RuleRecord::deserialize(entry)
            .map_err(|e| ParseError::InvalidFormat(format!("Rule {}: {}", index, e)))?,
        _ => {
            return Err(ParseError::InvalidFormat(format!(
                "Rule {}: expected an array or object",
                index
            )))
        }
    };

    check_rule(index, &record)?;

    Ok(record)
}

/// Parse the positional `[name, execution, built, changed, depends?, traces?]` form
///
/// **Private** - internal helper
fn parse_compact_rule(index: usize, fields: &[Value]) -> Result<RuleRecord, ParseError> {
    if fields.len() < RULE_MIN_FIELDS {
        return Err(ParseError::InvalidFormat(format!(
            "Rule {}: expected at least {} fields, found {}",
            index,
            RULE_MIN_FIELDS,
            fields.len()
        )));
    }

    let name = fields[RULE_NAME]
        .as_str()
        .ok_or_else(|| field_error(index, "name", "a string"))?
        .to_string();
    let execution = fields[RULE_EXECUTION]
        .as_f64()
        .ok_or_else(|| field_error(index, "execution", "a number"))?;
    let built = parse_run(index, "built", &fields[RULE_BUILT])?;
    let changed = parse_run(index, "changed", &fields[RULE_CHANGED])?;

    let depends = match fields.get(RULE_DEPENDS) {
        Some(groups) => parse_depends(index, groups)?,
        None => Vec::new(),
    };

    let traces = match fields.get(RULE_TRACES) {
        Some(traces) => parse_traces(index, traces)?,
        None => Vec::new(),
    };

    Ok(RuleRecord {
        name,
        execution,
        built,
        changed,
        depends,
        traces,
    })
}

/// Parse a run number (non-negative integer)
fn parse_run(index: usize, field: &str, value: &Value) -> Result<u32, ParseError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| field_error(index, field, "a run number"))
}

/// Flatten dependency groups, dropping repeats but keeping first-seen order
///
/// **Private** - internal helper
fn parse_depends(index: usize, groups: &Value) -> Result<Vec<usize>, ParseError> {
    let groups = groups
        .as_array()
        .ok_or_else(|| field_error(index, "depends", "a list of dependency groups"))?;

    let mut depends: Vec<usize> = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();
    for group in groups {
        let group = group
            .as_array()
            .ok_or_else(|| field_error(index, "depends", "a list of dependency groups"))?;

        for dep in group {
            let dep = dep
                .as_u64()
                .and_then(|d| usize::try_from(d).ok())
                .ok_or_else(|| field_error(index, "depends", "rule indices"))?;

            if seen.insert(dep) {
                depends.push(dep);
            }
        }
    }

    Ok(depends)
}

/// Parse `[command, start, stop]` trace triples
///
/// **Private** - internal helper
fn parse_traces(index: usize, traces: &Value) -> Result<Vec<TraceSpan>, ParseError> {
    let traces = traces
        .as_array()
        .ok_or_else(|| field_error(index, "traces", "a list of traces"))?;

    traces
        .iter()
        .map(|trace| match trace.as_array().map(Vec::as_slice) {
            Some([command, start, stop]) => {
                let command = command
                    .as_str()
                    .ok_or_else(|| field_error(index, "trace command", "a string"))?;
                let start = start
                    .as_f64()
                    .ok_or_else(|| field_error(index, "trace start", "a number"))?;
                let stop = stop
                    .as_f64()
                    .ok_or_else(|| field_error(index, "trace stop", "a number"))?;
                Ok(TraceSpan::new(command, start, stop))
            }
            _ => Err(field_error(index, "traces", "[command, start, stop] triples")),
        })
        .collect()
}

/// Enforce the ordering guarantee and flag suspicious values
///
/// **Private** - internal validation
fn check_rule(index: usize, record: &RuleRecord) -> Result<(), ParseError> {
    if let Some(&dependency) = record.depends.iter().find(|&&d| d >= index) {
        return Err(ParseError::DependencyOrder {
            rule: index,
            dependency,
        });
    }

    if record.changed < record.built {
        warn!(
            "Rule {} ({}) changed at run {} before it was built at run {}",
            index, record.name, record.changed, record.built
        );
    }

    for trace in record.traces.iter().filter(|t| t.stop < t.start) {
        warn!(
            "Rule {} ({}) has trace '{}' that stops before it starts",
            index, record.name, trace.command
        );
    }

    Ok(())
}

fn field_error(index: usize, field: &str, expected: &str) -> ParseError {
    ParseError::InvalidFormat(format!("Rule {}: {} must be {}", index, field, expected))
}
