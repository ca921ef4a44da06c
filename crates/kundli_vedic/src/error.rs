//! Error types for Vedic calculations.

use kundli_ephem::EphemerisError;
use kundli_time::TimeError;
use thiserror::Error;

/// Errors from placement, ascendant, kattam and dasha computations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Malformed input: negative elapsed time, singular latitude, bad enum code.
    #[error("domain error: {0}")]
    Domain(&'static str),
    /// Time input could not be interpreted.
    #[error("invalid time: {0}")]
    InvalidTime(#[from] TimeError),
    /// Ephemeris query failed (including out-of-range epochs).
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// Dasha system id is not registered.
    #[error("unsupported dasha system: {0}")]
    UnsupportedSystem(u16),
    /// Dasha table carries no periods.
    #[error("planet period data is missing for dasha system {0}")]
    MissingPeriodData(u16),
    /// Walking the dasha table ended without a match.
    #[error("unable to determine the running dasha")]
    UnableToDetermineDasha,
}

impl VedicError {
    /// True for the static-table consistency failures that are never user-recoverable.
    pub const fn is_data_consistency(&self) -> bool {
        matches!(
            self,
            Self::MissingPeriodData(_) | Self::UnableToDetermineDasha
        )
    }
}
