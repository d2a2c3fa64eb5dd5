//! Core error types for rhythmcheck-core.
//!
//! Every failure here is a reportable, user-correctable input problem;
//! nothing in the evaluation engine is fatal. The host layer owns the
//! translation into user-facing wording.

use thiserror::Error;

use crate::model::Dimension;

/// Which of the two clock inputs a time error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// Bed time ("went to sleep at")
    Bed,
    /// Wake time ("got up at")
    Wake,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeField::Bed => write!(f, "bed"),
            TimeField::Wake => write!(f, "wake"),
        }
    }
}

/// Errors surfaced by the evaluation engine.
///
/// Validation is first-failure: the engine checks grade, band, sleep times,
/// sleep plausibility, and then the remaining measurements in dimension
/// order, and returns the first problem it finds. No partial scoring is
/// ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// No grade label was supplied
    #[error("no grade selected")]
    MissingGradeSelection,

    /// The grade label matched none of the configured bands
    #[error("no grade band covers '{grade}'")]
    UnresolvedGradeBand { grade: String },

    /// A clock input was absent or not a valid HH:MM time
    #[error("missing or malformed {field} time (expected HH:MM)")]
    MissingOrMalformedTime { field: TimeField },

    /// Computed sleep duration fell outside the plausible (0, 16] hour window
    #[error("implausible sleep duration: {hours:.1} hours (expected more than 0 and at most 16)")]
    ImplausibleSleepDuration { hours: f64 },

    /// A measurement was absent, non-finite, or outside its declared input bounds
    #[error("missing or invalid measurement for {dimension}")]
    MissingOrInvalidMeasurement { dimension: Dimension },

    /// A reference model failed structural validation or could not be parsed
    #[error("invalid reference model: {0}")]
    InvalidModel(String),
}

/// Result type alias for EvaluationError
pub type Result<T, E = EvaluationError> = std::result::Result<T, E>;
