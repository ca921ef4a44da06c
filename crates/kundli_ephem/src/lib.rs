//! Ephemeris seam for chart computation.
//!
//! The chart engine never opens an ephemeris itself. Every computation takes
//! a `&dyn EphemerisProvider` (or a generic `P: EphemerisProvider`) that
//! answers apparent geocentric ecliptic positions. [`MeanElementsEphemeris`]
//! is a built-in analytic provider good to about an arc-minute over
//! 1800–2050, enough for sign, mansion and station work.

pub mod analytic;
pub mod error;
pub mod kepler;
pub mod moon;
pub mod obliquity;
pub mod spherical;

use kundli_time::{Instant, local_sidereal_time_hours};

pub use analytic::MeanElementsEphemeris;
pub use error::EphemerisError;
pub use obliquity::{general_precession_deg, mean_obliquity_deg, nutation_in_longitude_deg};
pub use spherical::{SphericalCoords, cartesian_to_spherical};

/// Physical bodies an ephemeris provider can be asked about.
///
/// Lunar nodes and the ascendant are computed points and live in
/// `kundli_vedic`, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies in NAIF code order of the major planets, Sun and Moon first.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

/// Geographic observer location. East longitude and north latitude are positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Reject non-finite values and latitudes outside [-90, 90].
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !self.longitude_deg.is_finite() {
            return Err(EphemerisError::InvalidQuery("location must be finite"));
        }
        if self.latitude_deg.abs() > 90.0 {
            return Err(EphemerisError::InvalidQuery(
                "latitude must lie in [-90, 90]",
            ));
        }
        Ok(())
    }
}

/// Apparent ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Ecliptic latitude in degrees, [-90, 90].
    pub latitude_deg: f64,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Distance from the observer in AU.
    pub distance_au: f64,
}

/// Supplier of apparent positions and the Earth-orientation primitives the
/// ascendant needs.
///
/// Implementations must be deterministic and thread-safe so that independent
/// retrograde searches can share one provider.
pub trait EphemerisProvider: Send + Sync {
    /// Apparent ecliptic position of `body` for an observer at `location`.
    fn apparent_ecliptic_position(
        &self,
        body: Body,
        location: &GeoLocation,
        instant: &Instant,
    ) -> Result<EclipticPosition, EphemerisError>;

    /// Supported span as `(jd_min, jd_max)` on the UTC axis.
    fn supported_range(&self) -> (f64, f64);

    /// Mean obliquity of the ecliptic in degrees.
    fn mean_obliquity_deg(&self, instant: &Instant) -> f64 {
        mean_obliquity_deg(instant.jd_tt())
    }

    /// Local sidereal time in hours, [0, 24).
    fn sidereal_time_hours(&self, instant: &Instant, longitude_deg: f64) -> f64 {
        local_sidereal_time_hours(instant.jd_ut1(), longitude_deg)
    }

    /// Check `instant` against [`Self::supported_range`].
    fn check_range(&self, instant: &Instant) -> Result<(), EphemerisError> {
        let (min, max) = self.supported_range();
        let jd = instant.jd_utc();
        if jd < min || jd > max {
            return Err(EphemerisError::OutOfRange { jd, min, max });
        }
        Ok(())
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn apparent_ecliptic_position(
        &self,
        body: Body,
        location: &GeoLocation,
        instant: &Instant,
    ) -> Result<EclipticPosition, EphemerisError> {
        (**self).apparent_ecliptic_position(body, location, instant)
    }

    fn supported_range(&self) -> (f64, f64) {
        (**self).supported_range()
    }

    fn mean_obliquity_deg(&self, instant: &Instant) -> f64 {
        (**self).mean_obliquity_deg(instant)
    }

    fn sidereal_time_hours(&self, instant: &Instant, longitude_deg: f64) -> f64 {
        (**self).sidereal_time_hours(instant, longitude_deg)
    }
}
