//! Calendar and time-scale support for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - ΔT (TT − UT) from the Espenak–Meeus polynomials
//! - Earth Rotation Angle, GMST and local sidereal time
//! - [`Instant`], a UTC moment with JD views on the UTC, UT1 and TT axes

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_seconds, ut_to_tt_jd};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, JD_1900_NOON_TT, SECONDS_PER_DAY, calendar_to_jd,
    days_between_years, jd_to_calendar,
};
pub use sidereal::{
    earth_rotation_angle_rad, gmst_hours, gmst_rad, local_sidereal_time_hours,
    local_sidereal_time_rad,
};
