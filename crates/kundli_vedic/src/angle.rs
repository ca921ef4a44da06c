//! Degree arithmetic shared by every placement computation.

use std::fmt::{Display, Formatter};

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed shortest difference `a − b` in degrees, in (-180, 180].
pub fn signed_delta(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}

/// −1 for negative input, otherwise 1.
pub fn sign(x: f64) -> i8 {
    if x < 0.0 { -1 } else { 1 }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Set when the source angle was negative.
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include a fractional part.
    pub seconds: f64,
}

impl Dms {
    /// Integer `(degrees, minutes, seconds)` with the sign on the degree part.
    /// Seconds are truncated, not rounded.
    pub fn truncated(&self) -> (i32, u8, u8) {
        let d = i32::from(self.degrees);
        let d = if self.negative { -d } else { d };
        (d, self.minutes, self.seconds.floor() as u8)
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}°{:02}′{:02}″",
            self.degrees,
            self.minutes,
            self.seconds.floor() as u8
        )
    }
}

/// Convert decimal degrees to degrees-minutes-seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let remainder = (d - degrees) * 60.0;
    let minutes = remainder.floor();
    let seconds = (remainder - minutes) * 60.0;
    Dms {
        negative: deg < 0.0,
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds,
    }
}

/// Convert DMS back to decimal degrees, applying the sign to the whole value.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    let magnitude = f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0;
    if dms.negative { -magnitude } else { magnitude }
}

/// Build decimal degrees from separate parts; the sign comes from `degrees`.
pub fn dms_parts_to_deg(degrees: i32, minutes: u8, seconds: f64) -> f64 {
    let magnitude = f64::from(degrees.unsigned_abs()) + f64::from(minutes) / 60.0 + seconds / 3600.0;
    if degrees < 0 { -magnitude } else { magnitude }
}
