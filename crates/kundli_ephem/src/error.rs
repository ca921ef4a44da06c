//! Error types for ephemeris queries.

use thiserror::Error;

/// Errors from an [`EphemerisProvider`](crate::EphemerisProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested epoch is outside the provider's supported span.
    #[error("epoch JD {jd} outside supported ephemeris range [{min}, {max}]")]
    OutOfRange { jd: f64, min: f64, max: f64 },
    /// Query arguments are malformed (non-finite epoch, bad location).
    #[error("invalid ephemeris query: {0}")]
    InvalidQuery(&'static str),
    /// Body is not covered by this provider.
    #[error("body {0} not supported by this provider")]
    UnsupportedBody(&'static str),
    /// Backend failure (I/O, kernel corruption) reported by an external provider.
    #[error("ephemeris backend error: {0}")]
    Backend(String),
}
