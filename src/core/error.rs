//! Error types for the grading core

use thiserror::Error;

/// Recoverable, user-facing validation failures.
///
/// The operation that produced one of these leaves all state untouched;
/// callers surface the message and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Semester name was blank after trimming
    #[error("Please enter a name for the semester.")]
    EmptySemesterName,

    /// No course row carried positive credit units
    #[error("Cannot store a semester with 0 credit units.")]
    ZeroCreditUnits,

    /// Grade letter is not part of the active scale
    #[error("Grade '{letter}' is not defined on the {scale} scale")]
    UnknownGrade {
        /// Letter that was rejected
        letter: String,
        /// Scale identifier it was checked against
        scale: String,
    },

    /// Units text could not be read as a positive number
    #[error("Invalid credit units: '{0}'")]
    InvalidUnits(String),
}

/// Top-level error for core operations
#[derive(Debug, Error)]
pub enum GpaError {
    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Positional reference outside the current sequence
    #[error("Index {index} is out of range (length {len})")]
    InvalidIndex {
        /// Index that was requested
        index: usize,
        /// Length of the sequence at the time of the call
        len: usize,
    },

    /// Scale identifier outside the supported set
    #[error("Unknown grading scale: '{0}' (expected one of 4.0, 5.0, 7.0, 10.0)")]
    UnknownScale(String),

    /// Attempted to remove the only remaining course row
    #[error("At least one course row must remain")]
    LastCourseRow,

    /// Transcript file could not be parsed
    #[error("Invalid transcript: {0}")]
    Transcript(String),

    /// Report rendering failed
    #[error("Failed to render report: {0}")]
    Report(String),

    /// Filesystem failure while reading input or writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
