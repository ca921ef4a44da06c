//! Error types for calendar and time-scale handling.

use thiserror::Error;

/// Errors from building, parsing or converting instants.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real UTC moment.
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
    /// Text could not be parsed as a timestamp.
    #[error("cannot parse timestamp {input:?}: {reason}")]
    Parse { input: String, reason: String },
    /// Julian Date cannot be represented as a calendar instant.
    #[error("julian date {jd} is outside the representable range")]
    OutOfRange { jd: f64 },
}
