//! Shared result types produced by a pass and consumed by reporting.
//!
//! These types carry no behavior beyond small constructors; they must stay
//! deterministic so that two runs of the same root procedure compare equal.

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Resolved status of one spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    /// Declared as pending; its body never exists.
    Ignored,
}

/// Which collaborator produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// `Context::expect` did not match; the body kept running.
    ExpectFailed,
    /// `Context::assume` did not match; the rest of the pass was abandoned.
    AssumeFailed,
    /// The body panicked, or the spec could not be reached on re-run.
    Fault,
}

/// One source location in a failure trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl TraceLocation {
    /// File name without its directories.
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file.as_str())
    }
}

impl From<&Location<'_>> for TraceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
        }
    }
}

/// Details of a single failed expectation, assumption, or fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    /// What was expected, or the fault message.
    pub message: String,
    /// Debug rendering of the actual value; empty for faults.
    pub actual: String,
    /// Assertion site first, then enclosing spec declarations, innermost first.
    pub trace: Vec<TraceLocation>,
}

impl Failure {
    pub fn fault(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Fault,
            message: message.into(),
            actual: String::new(),
            trace: Vec::new(),
        }
    }
}
