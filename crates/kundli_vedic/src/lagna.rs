//! Lagna (ascendant) computation.
//!
//! The ascendant is the ecliptic point rising on the eastern horizon:
//!
//! ```text
//! Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))
//! ```
//!
//! with θ the local sidereal time, ε the mean obliquity and φ the geographic
//! latitude. Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 13.
//! The formula is singular at the poles, where no unique ascendant exists.

use kundli_ephem::{EphemerisProvider, GeoLocation};
use kundli_time::Instant;
use tracing::debug;

use crate::angle::normalize_360;
use crate::error::VedicError;
use crate::planet::Planet;
use crate::position::{PlanetPosition, TropicalPosition, sidereal_placement};

/// Tropical ascendant in degrees [0, 360) from LST, latitude and obliquity (all degrees).
pub fn ascendant_from_lst(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<f64, VedicError> {
    if !lst_deg.is_finite() || !latitude_deg.is_finite() || !obliquity_deg.is_finite() {
        return Err(VedicError::Domain("ascendant inputs must be finite"));
    }
    if latitude_deg.abs() >= 90.0 {
        return Err(VedicError::Domain(
            "ascendant is undefined at latitude ±90°",
        ));
    }
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    Ok(normalize_360(asc.to_degrees()))
}

/// Tropical ascendant for an observer, using the provider's obliquity and sidereal time.
pub fn tropical_ascendant_deg<P: EphemerisProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    instant: &Instant,
) -> Result<f64, VedicError> {
    let eps = provider.mean_obliquity_deg(instant);
    let lst_hours = provider.sidereal_time_hours(instant, location.longitude_deg);
    let lst_deg = lst_hours.rem_euclid(24.0) * 15.0;
    let asc = ascendant_from_lst(lst_deg, location.latitude_deg, eps)?;
    debug!(lst_hours, eps, asc, "tropical ascendant");
    Ok(asc)
}

/// Sidereal ascendant as a chart point: house 1, never retrograde.
pub fn ascendant_position<P: EphemerisProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    instant: &Instant,
    ayanamsa_deg: f64,
) -> Result<PlanetPosition, VedicError> {
    let tropical = TropicalPosition {
        planet: Planet::Ascendant,
        latitude_deg: 0.0,
        longitude_deg: tropical_ascendant_deg(provider, location, instant)?,
        distance_au: 0.0,
    };
    let placement = sidereal_placement(tropical.longitude_deg, ayanamsa_deg);
    Ok(PlanetPosition::from_placement(
        &tropical,
        &placement,
        placement.rasi,
        false,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_zero_obliquity_is_lst_plus_90() {
        for &lst in &[0.0, 45.0, 123.0, 300.0] {
            let asc = ascendant_from_lst(lst, 0.0, 0.0).unwrap();
            let expected = normalize_360(lst + 90.0);
            assert!((asc - expected).abs() < 1e-9, "lst {lst}: {asc} vs {expected}");
        }
    }

    #[test]
    fn aries_culminating_at_equator() {
        // LST 0: ascendant at the Cancer point for any obliquity on the equator
        let asc = ascendant_from_lst(0.0, 0.0, 23.44).unwrap();
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn london_lst_zero() {
        // atan2(1, −tan 51.5°·sin 23.44°) ≈ 116.6°
        let asc = ascendant_from_lst(0.0, 51.5, 23.44).unwrap();
        assert!((asc - 116.6).abs() < 0.1, "asc = {asc}");
    }

    #[test]
    fn poles_rejected() {
        assert!(matches!(
            ascendant_from_lst(10.0, 90.0, 23.44),
            Err(VedicError::Domain(_))
        ));
        assert!(matches!(
            ascendant_from_lst(10.0, -90.0, 23.44),
            Err(VedicError::Domain(_))
        ));
        assert!(ascendant_from_lst(f64::NAN, 0.0, 23.44).is_err());
    }

    #[test]
    fn southern_hemisphere_in_range() {
        for k in 0..24 {
            let asc = ascendant_from_lst(k as f64 * 15.0, -33.9, 23.44).unwrap();
            assert!((0.0..360.0).contains(&asc));
        }
    }
}
