//! Exit codes & stdout/stderr routing.

use crate::tolerance::band::Severity;

/// Domain outcome produced by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Ok,
    Tolerance,
    Action,
    Refusal,
}

/// Output mode chosen by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Target stream for output emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl Outcome {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Ok => Outcome::Ok,
            Severity::Tolerance => Outcome::Tolerance,
            Severity::Action => Outcome::Action,
        }
    }

    /// The more severe of two outcomes; a batch run reports its worst row.
    pub fn worst(self, other: Outcome) -> Outcome {
        self.max(other)
    }
}

/// Exit code for a given outcome (domain-level only).
pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Ok => 0,
        Outcome::Tolerance => 1,
        Outcome::Action => 2,
        Outcome::Refusal => 3,
    }
}

/// Output stream for a given outcome and output mode.
///
/// In JSON mode, all domain outcomes go to stdout.
/// In human mode, refusals go to stderr.
pub fn output_stream(outcome: Outcome, mode: OutputMode) -> OutputStream {
    match (mode, outcome) {
        (OutputMode::Json, _) => OutputStream::Stdout,
        (OutputMode::Human, Outcome::Refusal) => OutputStream::Stderr,
        (OutputMode::Human, _) => OutputStream::Stdout,
    }
}
