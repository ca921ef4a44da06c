//! Error types for retrograde search and chart assembly.

use kundli_ephem::EphemerisError;
use kundli_time::TimeError;
use kundli_vedic::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Search parameters rejected before any ephemeris query.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(&'static str),
    /// Point has no longitude signal to search (the ascendant).
    #[error("{0} cannot be searched for retrograde motion")]
    NotSearchable(&'static str),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
