//! Non-fatal problems found while extracting placements.
//!
//! The extractor never logs directly. It reports to a [`DiagnosticSink`]
//! supplied by the caller, which may collect, count, forward to `log`, or
//! drop the warnings.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `INST` without a `DESIGNATOR`; the instance was skipped
    MissingDesignator,
    /// `INST` without a `POSE`; the instance was skipped
    MissingPose { designator: String },
    /// `SIDE` value other than top/bottom; treated as `Top`
    UnrecognizedSide { raw: String },
    /// The board produced no rows
    NoInstances { path: PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDesignator => write!(f, "Skipping INST with no DESIGNATOR attribute"),
            Self::MissingPose { designator } => {
                write!(f, "Skipping {designator}: no POSE element")
            }
            Self::UnrecognizedSide { raw } => {
                write!(f, "Unrecognized board side '{raw}', defaulting to 'Top'")
            }
            Self::NoInstances { path } => {
                write!(f, "No component instances found in {}", path.display())
            }
        }
    }
}

pub trait DiagnosticSink {
    fn warn(&mut self, warning: Warning);
}

/// Collects warnings for later inspection
impl DiagnosticSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

/// Discards warnings
impl DiagnosticSink for () {
    fn warn(&mut self, _warning: Warning) {}
}

/// Forwards warnings to `log::warn!`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
    }
}
