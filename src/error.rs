//! Error types.
//!
//! Two families of failure exist:
//! - [`FormatError`]: a time or time range that cannot be parsed reached
//!   the schedule comparator. Validated events never trigger it.
//! - [`ValidationError`]: raw input rejected at the repository boundary.

use thiserror::Error;

/// Result type for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A malformed `HH:MM` time or `HH:MM-HH:MM` range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time format '{value}': {reason}")]
pub struct FormatError {
    /// The offending text.
    pub value: String,
    /// What was wrong with it.
    pub reason: String,
}

impl FormatError {
    pub(crate) fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// An event field rejected by the repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value outside the field's allow-list.
    #[error("invalid {field}: {value}. Must be one of {allowed:?}")]
    InvalidField {
        field: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    /// Unknown day-of-week name.
    #[error("invalid day: {value}. Must be one of {allowed:?}")]
    InvalidDay { value: String, allowed: Vec<String> },

    /// Time text that is not strict 24-hour `HH:MM` (or `HH:MM-HH:MM`).
    #[error("invalid {field} format: {value}. Must be HH:MM in 24-hour format")]
    InvalidTime { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidField { field, .. } | Self::InvalidTime { field, .. } => *field,
            Self::InvalidDay { .. } => "day",
        }
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidField { value, .. }
            | Self::InvalidDay { value, .. }
            | Self::InvalidTime { value, .. } => value,
        }
    }
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
