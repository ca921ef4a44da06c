//! Tropical → sidereal placement pipeline.
//!
//! Each stage returns a new value: [`TropicalPosition`] straight from the
//! ephemeris, [`SiderealPlacement`] once the ayanamsa is removed, and the
//! final [`PlanetPosition`] once the ascendant's rasi and the retrograde
//! state are known. Nothing is filled in after construction.

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude, snap_to_pada_boundary};
use crate::planet::Planet;
use crate::rasi::{RASI_SPAN, Rasi, house_of};

/// Apparent tropical coordinates of a chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TropicalPosition {
    pub planet: Planet,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub distance_au: f64,
}

/// Sidereal placement of a longitude, independent of the ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPlacement {
    /// normalize(tropical − ayanamsa), [0, 360).
    pub sidereal_longitude_deg: f64,
    pub rasi: Rasi,
    /// Degrees advanced within the rasi, [0, 30).
    pub advanced_by_deg: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// Remove the ayanamsa and place the result in rasi, nakshatra and pada.
///
/// A result within half an arc-second of a pada boundary is moved onto it
/// before any placement, so the rasi always contains the pada.
pub fn sidereal_placement(tropical_longitude_deg: f64, ayanamsa_deg: f64) -> SiderealPlacement {
    let sidereal = snap_to_pada_boundary(tropical_longitude_deg - ayanamsa_deg);
    let rasi = Rasi::from_longitude(sidereal);
    let advanced_by = (sidereal - f64::from(rasi.index()) * RASI_SPAN).max(0.0);
    let nak = nakshatra_from_longitude(sidereal);
    SiderealPlacement {
        sidereal_longitude_deg: sidereal,
        rasi,
        advanced_by_deg: advanced_by,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
    }
}

/// Fully placed chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Tropical ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Tropical ecliptic longitude, degrees.
    pub longitude_deg: f64,
    pub distance_au: f64,
    /// Nirayana longitude, degrees [0, 360).
    pub sidereal_longitude_deg: f64,
    /// Degrees advanced within the occupied rasi, [0, 30).
    pub advanced_by_deg: f64,
    pub rasi: Rasi,
    /// House 1–12 counted from the ascendant's rasi.
    pub house: u8,
    pub nakshatra: Nakshatra,
    /// Pada 1–4.
    pub pada: u8,
    pub retrograde: bool,
    pub is_ascendant: bool,
}

impl PlanetPosition {
    /// Final stage: attach house and retrograde state to a tropical position.
    pub fn enrich(
        tropical: &TropicalPosition,
        ayanamsa_deg: f64,
        ascendant_rasi: Rasi,
        retrograde: bool,
    ) -> Self {
        let placement = sidereal_placement(tropical.longitude_deg, ayanamsa_deg);
        Self::from_placement(tropical, &placement, ascendant_rasi, retrograde)
    }

    pub fn from_placement(
        tropical: &TropicalPosition,
        placement: &SiderealPlacement,
        ascendant_rasi: Rasi,
        retrograde: bool,
    ) -> Self {
        let is_ascendant = tropical.planet == Planet::Ascendant;
        Self {
            planet: tropical.planet,
            latitude_deg: tropical.latitude_deg,
            longitude_deg: tropical.longitude_deg,
            distance_au: tropical.distance_au,
            sidereal_longitude_deg: placement.sidereal_longitude_deg,
            advanced_by_deg: placement.advanced_by_deg,
            rasi: placement.rasi,
            house: if is_ascendant {
                1
            } else {
                house_of(placement.rasi, ascendant_rasi)
            },
            nakshatra: placement.nakshatra,
            pada: placement.pada,
            retrograde,
            is_ascendant,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.planet.name()
    }

    pub const fn short_name(&self) -> &'static str {
        self.planet.short_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tropical(planet: Planet, lon: f64) -> TropicalPosition {
        TropicalPosition {
            planet,
            latitude_deg: 1.0,
            longitude_deg: lon,
            distance_au: 1.5,
        }
    }

    #[test]
    fn placement_subtracts_ayanamsa() {
        let p = sidereal_placement(100.0, 24.0);
        assert!((p.sidereal_longitude_deg - 76.0).abs() < 1e-12);
        assert_eq!(p.rasi, Rasi::Mithuna);
        assert!((p.advanced_by_deg - 16.0).abs() < 1e-12);
        assert_eq!(p.nakshatra, Nakshatra::Ardra);
    }

    #[test]
    fn placement_wraps_below_zero() {
        let p = sidereal_placement(14.0, 24.0);
        assert!((p.sidereal_longitude_deg - 350.0).abs() < 1e-12);
        assert_eq!(p.rasi, Rasi::Meena);
        assert_eq!(p.nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn enrich_counts_houses_from_ascendant() {
        let pos = PlanetPosition::enrich(&tropical(Planet::Mars, 100.0), 24.0, Rasi::Karka, true);
        assert_eq!(pos.rasi, Rasi::Mithuna);
        assert_eq!(pos.house, 12);
        assert!(pos.retrograde);
        assert!(!pos.is_ascendant);
        assert_eq!(pos.short_name(), "Ma");
        assert!((pos.longitude_deg - 100.0).abs() < 1e-12);
        assert!((pos.latitude_deg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ascendant_is_house_one() {
        let pos = PlanetPosition::enrich(&tropical(Planet::Ascendant, 130.0), 24.0, Rasi::Karka, false);
        assert!(pos.is_ascendant);
        assert_eq!(pos.house, 1);
        assert_eq!(pos.rasi, Rasi::Karka);
    }

    fn pada_rasi(p: &SiderealPlacement) -> u8 {
        let pada_index = (p.nakshatra.number() - 1) * 4 + (p.pada - 1);
        pada_index / 9
    }

    #[test]
    fn rasi_contains_pada_at_rasi_edges() {
        let p = sidereal_placement(29.9999, 0.0);
        assert_eq!(p.rasi, Rasi::Vrishabha);
        assert_eq!((p.nakshatra, p.pada), (Nakshatra::Krittika, 2));
        assert_eq!(p.advanced_by_deg, 0.0);

        let p = sidereal_placement(59.9999, 0.0);
        assert_eq!(p.rasi, Rasi::Mithuna);
        assert_eq!((p.nakshatra, p.pada), (Nakshatra::Mrigashira, 3));

        let p = sidereal_placement(359.9999, 0.0);
        assert_eq!(p.rasi, Rasi::Mesha);
        assert_eq!((p.nakshatra, p.pada), (Nakshatra::Ashwini, 1));
        assert_eq!(p.sidereal_longitude_deg, 0.0);

        for edge in 0..12 {
            for offset in [-2e-4, -1e-4, -1e-9, 0.0, 1e-9, 1e-4, 2e-4] {
                let p = sidereal_placement(f64::from(edge) * 30.0 + offset, 0.0);
                assert_eq!(pada_rasi(&p), p.rasi.index(), "edge {edge} offset {offset}: {p:?}");
                assert!((0.0..30.0).contains(&p.advanced_by_deg), "{p:?}");
            }
        }
    }

    #[test]
    fn ranges_hold_everywhere() {
        for k in 0..720 {
            let pos = PlanetPosition::enrich(
                &tropical(Planet::Jupiter, k as f64 * 0.5 - 90.0),
                23.85,
                Rasi::Tula,
                false,
            );
            assert!((0.0..360.0).contains(&pos.sidereal_longitude_deg));
            assert!((0.0..30.0).contains(&pos.advanced_by_deg));
            assert!((1..=12).contains(&pos.house));
            assert!((1..=4).contains(&pos.pada));
        }
    }
}
