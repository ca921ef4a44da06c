//! Ascendant placement and kattam assembly over a stub provider.

use kundli_ephem::{Body, EclipticPosition, EphemerisError, EphemerisProvider, GeoLocation};
use kundli_time::Instant;
use kundli_vedic::{
    Planet, PlanetPosition, Rasi, TropicalPosition, VedicError, ascendant_position, build_kattams,
    kattams_in_house_order, tropical_ascendant_deg,
};

/// Provider whose sidereal time is pinned, so the ascendant is predictable.
struct PinnedSky {
    lst_hours: f64,
    obliquity_deg: f64,
}

impl EphemerisProvider for PinnedSky {
    fn apparent_ecliptic_position(
        &self,
        _body: Body,
        _location: &GeoLocation,
        _instant: &Instant,
    ) -> Result<EclipticPosition, EphemerisError> {
        Err(EphemerisError::UnsupportedBody("pinned sky has no bodies"))
    }

    fn supported_range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn mean_obliquity_deg(&self, _instant: &Instant) -> f64 {
        self.obliquity_deg
    }

    fn sidereal_time_hours(&self, _instant: &Instant, _longitude_deg: f64) -> f64 {
        self.lst_hours
    }
}

fn now() -> Instant {
    Instant::from_utc(2024, 3, 20, 6, 0, 0.0).unwrap()
}

#[test]
fn equator_ascendant_is_lst_plus_quarter_turn() {
    let sky = PinnedSky { lst_hours: 6.0, obliquity_deg: 0.0 };
    let asc = tropical_ascendant_deg(&sky, &GeoLocation::new(0.0, 0.0), &now()).unwrap();
    assert!((asc - 180.0).abs() < 1e-9, "asc = {asc}");
}

#[test]
fn sidereal_ascendant_position() {
    let sky = PinnedSky { lst_hours: 0.0, obliquity_deg: 23.44 };
    let pos = ascendant_position(&sky, &GeoLocation::new(0.0, 80.0), &now(), 24.0).unwrap();
    assert!(pos.is_ascendant);
    assert_eq!(pos.planet, Planet::Ascendant);
    assert_eq!(pos.house, 1);
    assert!(!pos.retrograde);
    assert!((pos.sidereal_longitude_deg - 66.0).abs() < 1e-9);
    assert_eq!(pos.rasi, Rasi::Mithuna);
}

#[test]
fn polar_latitude_is_domain_error() {
    let sky = PinnedSky { lst_hours: 3.0, obliquity_deg: 23.44 };
    let err = ascendant_position(&sky, &GeoLocation::new(90.0, 0.0), &now(), 24.0).unwrap_err();
    assert!(matches!(err, VedicError::Domain(_)));
}

#[test]
fn full_chart_cells() {
    let sky = PinnedSky { lst_hours: 0.0, obliquity_deg: 23.44 };
    let asc = ascendant_position(&sky, &GeoLocation::new(0.0, 80.0), &now(), 24.0).unwrap();
    let tropical = [
        (Planet::Sun, 24.0 + 335.0),
        (Planet::Moon, 24.0 + 70.0),
        (Planet::Mars, 24.0 + 62.0),
        (Planet::Rahu, 24.0 + 10.0),
        (Planet::Ketu, 24.0 + 190.0),
    ];
    let planets: Vec<PlanetPosition> = tropical
        .iter()
        .map(|&(planet, lon)| {
            let trop = TropicalPosition {
                planet,
                latitude_deg: 0.0,
                longitude_deg: lon,
                distance_au: 1.0,
            };
            PlanetPosition::enrich(&trop, 24.0, asc.rasi, planet.is_node())
        })
        .collect();

    let kattams = build_kattams(&asc, &planets);
    assert_eq!(kattams.len(), 12);

    let mithuna = &kattams[2];
    assert_eq!(mithuna.rasi, Rasi::Mithuna);
    assert!(mithuna.is_ascendant);
    assert_eq!(mithuna.house, 1);
    let occupants: Vec<Planet> = mithuna.planets.iter().map(|p| p.planet).collect();
    assert_eq!(occupants, vec![Planet::Mars, Planet::Moon]);

    let meena = &kattams[11];
    assert_eq!(meena.house, 10);
    assert!(meena.planets[0].planet == Planet::Sun);

    let view = kattams_in_house_order(&kattams);
    assert_eq!(view[0].rasi, Rasi::Mithuna);
    assert_eq!(view[4].rasi, Rasi::Tula);
    assert!(view[4].planets.iter().any(|p| p.planet == Planet::Ketu && p.retrograde));
}
