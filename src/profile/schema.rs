//! Profiling database record definitions.
//!
//! A database is an ordered list of rules. A rule's position in that list is
//! its identity, and dependencies refer to rules by position.

use serde::{Deserialize, Serialize};

/// One build rule as it exists in the current database snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Display name of the rule
    pub name: String,

    /// Seconds the rule itself took to run
    pub execution: f64,

    /// Run at which the rule was last built (0 = most recent run)
    pub built: u32,

    /// Run at which the rule's result last changed, never less than `built`
    pub changed: u32,

    /// Positions of the rules this rule depends on, all earlier than this rule
    #[serde(default)]
    pub depends: Vec<usize>,

    /// Traced commands run while building this rule
    #[serde(default)]
    pub traces: Vec<TraceSpan>,
}

impl RuleRecord {
    /// Create a rule with no dependencies and no traces
    ///
    /// **Public** - constructor
    pub fn new(name: impl Into<String>, execution: f64, built: u32, changed: u32) -> Self {
        Self {
            name: name.into(),
            execution,
            built,
            changed,
            depends: Vec::new(),
            traces: Vec::new(),
        }
    }

    pub fn with_depends(mut self, depends: Vec<usize>) -> Self {
        self.depends = depends;
        self
    }

    pub fn with_traces(mut self, traces: Vec<TraceSpan>) -> Self {
        self.traces = traces;
        self
    }

    /// Whether this rule was rebuilt in the most recent run
    pub fn is_last_run(&self) -> bool {
        self.built == 0
    }
}

/// One traced external command invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSpan {
    pub command: String,

    /// Offset into the run's timeline, in seconds
    pub start: f64,

    pub stop: f64,
}

impl TraceSpan {
    pub fn new(command: impl Into<String>, start: f64, stop: f64) -> Self {
        Self {
            command: command.into(),
            start,
            stop,
        }
    }

    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }
}
