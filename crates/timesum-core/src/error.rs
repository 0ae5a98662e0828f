//! Error types for time expression evaluation.

use std::fmt;
use thiserror::Error;

/// Which field of a clock time failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// The hours field, bounded at 23.
    Hour,
    /// The minutes field, bounded at 59.
    Minute,
}

impl TimeField {
    /// The largest value the field may hold.
    pub fn bound(self) -> u64 {
        match self {
            TimeField::Hour => 23,
            TimeField::Minute => 59,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Hour => write!(f, "hour"),
            TimeField::Minute => write!(f, "minutes"),
        }
    }
}

/// Errors that can occur while evaluating a time expression token.
///
/// Every failure is fatal to the whole invocation — nothing is retried or
/// aggregated. The variants carry the offending text so the boundary layer
/// can report which argument broke the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The token matched none of the three grammars in full.
    #[error("bad item [{token}]")]
    UnrecognizedFormat { token: String },

    /// A clock-time field parsed cleanly but exceeded its bound
    /// (23 for hours, 59 for minutes).
    #[error("{field} value [{text}] > {bound}", bound = .field.bound())]
    OutOfRange { field: TimeField, text: String },
}

/// Convenience alias used throughout timesum-core.
pub type Result<T> = std::result::Result<T, EvalError>;
