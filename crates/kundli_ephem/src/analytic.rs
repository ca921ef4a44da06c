//! Built-in analytic provider: Keplerian planets, truncated lunar theory.
//!
//! Pipeline per query:
//! 1. Heliocentric J2000-ecliptic vectors for the target and the Earth–Moon
//!    barycenter, with one light-time iteration for planets.
//! 2. Geocentric vector → spherical.
//! 3. Precession to the ecliptic of date, then nutation in longitude, plus
//!    annual aberration for the Sun.
//!
//! Positions are geocentric; the observer location is validated but does not
//! shift the result. Lunar parallax (up to ~1°) is therefore not applied.

use kundli_time::Instant;
use tracing::trace;

use crate::kepler::{self, OrbitalElements};
use crate::moon::moon_geocentric;
use crate::obliquity::{centuries_since_j2000, general_precession_deg, nutation_in_longitude_deg};
use crate::spherical::cartesian_to_spherical;
use crate::{Body, EclipticPosition, EphemerisError, EphemerisProvider, GeoLocation};

/// Kilometres per astronomical unit (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Light travel time for one AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Constant of annual aberration, degrees.
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// 1800-Jan-01 00:00 UTC.
pub const RANGE_START_JD: f64 = 2_378_496.5;
/// 2051-Jan-01 00:00 UTC.
pub const RANGE_END_JD: f64 = 2_470_172.5;

/// Analytic ephemeris valid from 1800 through 2050.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementsEphemeris;

impl MeanElementsEphemeris {
    pub const fn new() -> Self {
        Self
    }

    fn elements(body: Body) -> Option<&'static OrbitalElements> {
        match body {
            Body::Mercury => Some(&kepler::MERCURY),
            Body::Venus => Some(&kepler::VENUS),
            Body::Mars => Some(&kepler::MARS),
            Body::Jupiter => Some(&kepler::JUPITER),
            Body::Saturn => Some(&kepler::SATURN),
            Body::Sun | Body::Moon => None,
        }
    }

    /// Geocentric `(lon_j2000_deg, lat_deg, distance_au)` of a planet with light time.
    fn planet_geocentric(elements: &OrbitalElements, t: f64) -> (f64, f64, f64) {
        let earth = kepler::EARTH_MOON_BARYCENTER.heliocentric_position(t);
        let mut tau_centuries = 0.0;
        let mut geo = [0.0; 3];
        for _ in 0..2 {
            let p = elements.heliocentric_position(t - tau_centuries);
            geo = [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
            let dist = (geo[0] * geo[0] + geo[1] * geo[1] + geo[2] * geo[2]).sqrt();
            tau_centuries = dist * LIGHT_TIME_DAYS_PER_AU / 36_525.0;
        }
        let s = cartesian_to_spherical(&geo);
        (s.lon_deg, s.lat_deg, s.distance)
    }

    fn sun_geocentric(t: f64) -> (f64, f64, f64) {
        let earth = kepler::EARTH_MOON_BARYCENTER.heliocentric_position(t);
        let s = cartesian_to_spherical(&[-earth[0], -earth[1], -earth[2]]);
        let lon = s.lon_deg - ABERRATION_DEG / s.distance;
        (lon, s.lat_deg, s.distance)
    }
}

impl EphemerisProvider for MeanElementsEphemeris {
    fn apparent_ecliptic_position(
        &self,
        body: Body,
        location: &GeoLocation,
        instant: &Instant,
    ) -> Result<EclipticPosition, EphemerisError> {
        location.validate()?;
        self.check_range(instant)?;

        let jd_tt = instant.jd_tt();
        let t = centuries_since_j2000(jd_tt);

        let (lon_of_date, lat, distance_au) = match body {
            Body::Moon => {
                let (lon, lat, km) = moon_geocentric(t);
                (lon, lat, km / AU_KM)
            }
            Body::Sun => {
                let (lon, lat, r) = Self::sun_geocentric(t);
                (lon + general_precession_deg(jd_tt), lat, r)
            }
            planet => {
                let elements =
                    Self::elements(planet).ok_or(EphemerisError::UnsupportedBody(planet.name()))?;
                let (lon, lat, r) = Self::planet_geocentric(elements, t);
                (lon + general_precession_deg(jd_tt), lat, r)
            }
        };

        let longitude_deg = (lon_of_date + nutation_in_longitude_deg(jd_tt)).rem_euclid(360.0);
        trace!(body = body.name(), jd_tt, longitude_deg, "analytic position");

        Ok(EclipticPosition {
            latitude_deg: lat,
            longitude_deg,
            distance_au,
        })
    }

    fn supported_range(&self) -> (f64, f64) {
        (RANGE_START_JD, RANGE_END_JD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: GeoLocation = GeoLocation::new(0.0, 0.0);

    fn angle_diff(a: f64, b: f64) -> f64 {
        ((a - b + 540.0).rem_euclid(360.0) - 180.0).abs()
    }

    #[test]
    fn sun_meeus_25a() {
        // 1992-Oct-13 0h TD: apparent λ☉ = 199.90988°, R = 0.99766 AU
        let t = Instant::from_utc(1992, 10, 13, 0, 0, 0.0).unwrap();
        let p = MeanElementsEphemeris
            .apparent_ecliptic_position(Body::Sun, &ORIGIN, &t)
            .unwrap();
        assert!(angle_diff(p.longitude_deg, 199.909_88) < 0.02, "λ = {}", p.longitude_deg);
        assert!((p.distance_au - 0.997_66).abs() < 1e-3, "R = {}", p.distance_au);
        assert!(p.latitude_deg.abs() < 0.01);
    }

    #[test]
    fn venus_meeus_33a() {
        // 1992-Dec-20 0h TD: λ = 313.08102°, β = −2.08474°, Δ = 0.910845 AU
        let t = Instant::from_utc(1992, 12, 20, 0, 0, 0.0).unwrap();
        let p = MeanElementsEphemeris
            .apparent_ecliptic_position(Body::Venus, &ORIGIN, &t)
            .unwrap();
        assert!(angle_diff(p.longitude_deg, 313.081_02) < 0.05, "λ = {}", p.longitude_deg);
        assert!((p.latitude_deg + 2.084_74).abs() < 0.05, "β = {}", p.latitude_deg);
        assert!((p.distance_au - 0.910_845).abs() < 1e-3, "Δ = {}", p.distance_au);
    }

    #[test]
    fn moon_meeus_47a_apparent() {
        // 1992-Apr-12 0h TD: apparent λ = 133.167265°
        let t = Instant::from_utc(1992, 4, 12, 0, 0, 0.0).unwrap();
        let p = MeanElementsEphemeris
            .apparent_ecliptic_position(Body::Moon, &ORIGIN, &t)
            .unwrap();
        // ~59 s of ΔT moves the Moon ~0.01°
        assert!(angle_diff(p.longitude_deg, 133.167_265) < 0.06, "λ = {}", p.longitude_deg);
    }

    #[test]
    fn out_of_range_rejected() {
        let t = Instant::from_utc(1750, 1, 1, 0, 0, 0.0).unwrap();
        let err = MeanElementsEphemeris
            .apparent_ecliptic_position(Body::Mars, &ORIGIN, &t)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::OutOfRange { .. }));
    }

    #[test]
    fn invalid_location_rejected() {
        let t = Instant::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        let err = MeanElementsEphemeris
            .apparent_ecliptic_position(Body::Mars, &GeoLocation::new(95.0, 0.0), &t)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidQuery(_)));
    }

    #[test]
    fn all_bodies_in_range() {
        let t = Instant::from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();
        for body in crate::ALL_BODIES {
            let p = MeanElementsEphemeris
                .apparent_ecliptic_position(body, &ORIGIN, &t)
                .unwrap();
            assert!((0.0..360.0).contains(&p.longitude_deg));
            assert!(p.latitude_deg.abs() < 10.0, "{} β = {}", body.name(), p.latitude_deg);
            assert!(p.distance_au > 0.0);
        }
    }
}
