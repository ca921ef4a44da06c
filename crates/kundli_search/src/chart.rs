//! Whole-chart assembly: ayanamsa, ascendant, nine grahas, retrograde flags, kattams.
//!
//! Each graha is an independent (planet, window) query, so with
//! `parallel` set they fan out over the rayon pool. The provider is shared
//! read-only across workers.

use kundli_ephem::{EphemerisProvider, GeoLocation};
use kundli_time::Instant;
use kundli_vedic::{
    ALL_PLANETS, AyanamsaSetting, Kattam, LunarNode, NodeMode, Planet, PlanetPosition,
    TropicalPosition, ascendant_position, build_kattams, lunar_node_deg,
};
use rayon::prelude::*;
use tracing::debug;

use crate::error::SearchError;
use crate::retrograde::is_retrograde_at;
use crate::retrograde_types::RetrogradeConfig;

/// Everything that shapes a chart besides time and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub ayanamsa: AyanamsaSetting,
    pub node_mode: NodeMode,
    pub retrograde: RetrogradeConfig,
    /// Compute the grahas on the rayon pool.
    pub parallel: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaSetting::default(),
            node_mode: NodeMode::default(),
            retrograde: RetrogradeConfig::default(),
            parallel: true,
        }
    }
}

/// A computed chart. Rebuilt from scratch on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub instant: Instant,
    pub location: GeoLocation,
    pub ayanamsa_deg: f64,
    pub ascendant: PlanetPosition,
    /// The nine grahas in code order (Sun … Ketu).
    pub planets: Vec<PlanetPosition>,
    /// Twelve cells ordered by rasi number.
    pub kattams: Vec<Kattam>,
}

impl Chart {
    pub fn planet(&self, planet: Planet) -> Option<&PlanetPosition> {
        if planet == Planet::Ascendant {
            return Some(&self.ascendant);
        }
        self.planets.iter().find(|p| p.planet == planet)
    }

    pub fn retrograde_planets(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.planets.iter().filter(|p| p.retrograde)
    }
}

/// Apparent tropical position of a graha: ephemeris bodies from the provider,
/// nodes from the lunar-node series.
pub fn tropical_position<P: EphemerisProvider + ?Sized>(
    provider: &P,
    planet: Planet,
    location: &GeoLocation,
    instant: &Instant,
    node_mode: NodeMode,
) -> Result<TropicalPosition, SearchError> {
    let (latitude_deg, longitude_deg, distance_au) = match planet {
        Planet::Rahu => (0.0, lunar_node_deg(LunarNode::Rahu, instant, node_mode), 0.0),
        Planet::Ketu => (0.0, lunar_node_deg(LunarNode::Ketu, instant, node_mode), 0.0),
        _ => {
            let body = planet
                .body()
                .ok_or(SearchError::NotSearchable(planet.name()))?;
            let pos = provider.apparent_ecliptic_position(body, location, instant)?;
            (pos.latitude_deg, pos.longitude_deg, pos.distance_au)
        }
    };
    Ok(TropicalPosition {
        planet,
        latitude_deg,
        longitude_deg,
        distance_au,
    })
}

fn graha_entry<P: EphemerisProvider + ?Sized>(
    provider: &P,
    planet: Planet,
    location: &GeoLocation,
    instant: &Instant,
    config: &ChartConfig,
) -> Result<(TropicalPosition, bool), SearchError> {
    let tropical = tropical_position(provider, planet, location, instant, config.node_mode)?;
    let retrograde = is_retrograde_at(provider, planet, location, instant, &config.retrograde)?;
    Ok((tropical, retrograde))
}

/// Compute the full chart for `instant` at `location`.
#[tracing::instrument(level = "debug", skip_all, fields(%instant))]
pub fn compute_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: &Instant,
    location: &GeoLocation,
    config: &ChartConfig,
) -> Result<Chart, SearchError> {
    location.validate()?;
    provider.check_range(instant)?;
    config
        .retrograde
        .validate()
        .map_err(SearchError::InvalidConfig)?;

    let ayanamsa_deg = config.ayanamsa.degrees(instant)?;
    let ascendant = ascendant_position(provider, location, instant, ayanamsa_deg)?;
    debug!(ayanamsa_deg, ascendant = ascendant.sidereal_longitude_deg, "chart anchors");

    let entries: Vec<(TropicalPosition, bool)> = if config.parallel {
        ALL_PLANETS
            .par_iter()
            .map(|&planet| graha_entry(provider, planet, location, instant, config))
            .collect::<Result<_, _>>()?
    } else {
        ALL_PLANETS
            .iter()
            .map(|&planet| graha_entry(provider, planet, location, instant, config))
            .collect::<Result<_, _>>()?
    };

    let planets: Vec<PlanetPosition> = entries
        .iter()
        .map(|(tropical, retrograde)| {
            PlanetPosition::enrich(tropical, ayanamsa_deg, ascendant.rasi, *retrograde)
        })
        .collect();
    let kattams = build_kattams(&ascendant, &planets);

    Ok(Chart {
        instant: *instant,
        location: *location,
        ayanamsa_deg,
        ascendant,
        planets,
        kattams,
    })
}

#[cfg(test)]
mod tests {
    use kundli_ephem::{Body, EclipticPosition, EphemerisError};
    use kundli_time::J2000_JD;
    use kundli_vedic::{NodePolicy, Rasi};

    use super::*;

    /// Every body parked at a fixed tropical longitude.
    struct Parked;

    impl EphemerisProvider for Parked {
        fn apparent_ecliptic_position(
            &self,
            body: Body,
            _location: &GeoLocation,
            instant: &Instant,
        ) -> Result<EclipticPosition, EphemerisError> {
            self.check_range(instant)?;
            let lon = match body {
                Body::Sun => 280.0,
                Body::Moon => 45.0,
                Body::Mars => 100.0,
                Body::Mercury => 270.0,
                Body::Venus => 300.0,
                Body::Jupiter => 25.0,
                Body::Saturn => 320.0,
            };
            Ok(EclipticPosition {
                latitude_deg: 0.0,
                longitude_deg: lon,
                distance_au: 1.0,
            })
        }

        fn supported_range(&self) -> (f64, f64) {
            (J2000_JD - 1000.0, J2000_JD + 1000.0)
        }
    }

    fn config(parallel: bool) -> ChartConfig {
        ChartConfig {
            ayanamsa: AyanamsaSetting::Fixed(24.0),
            parallel,
            ..ChartConfig::default()
        }
    }

    fn instant() -> Instant {
        Instant::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap()
    }

    #[test]
    fn parked_chart_places_everything() {
        let chart = compute_chart(&Parked, &instant(), &GeoLocation::new(13.08, 80.27), &config(false))
            .unwrap();
        assert_eq!(chart.planets.len(), 9);
        assert_eq!(chart.kattams.len(), 12);
        assert!((chart.ayanamsa_deg - 24.0).abs() < 1e-12);

        let sun = chart.planet(Planet::Sun).unwrap();
        assert!((sun.sidereal_longitude_deg - 256.0).abs() < 1e-9);
        assert_eq!(sun.rasi, Rasi::Dhanu);
        assert!(!sun.retrograde);

        // Parked planets never move, so none is retrograde.
        assert!(!chart.planet(Planet::Mars).unwrap().retrograde);
        assert!(chart.planet(Planet::Rahu).unwrap().retrograde);
        assert!(chart.planet(Planet::Ketu).unwrap().retrograde);

        let placed: usize = chart.kattams.iter().map(|k| k.planets.len()).sum();
        assert_eq!(placed, 9);
        assert_eq!(chart.kattams.iter().filter(|k| k.is_ascendant).count(), 1);
    }

    #[test]
    fn parallel_and_serial_agree() {
        let loc = GeoLocation::new(28.61, 77.21);
        let a = compute_chart(&Parked, &instant(), &loc, &config(false)).unwrap();
        let b = compute_chart(&Parked, &instant(), &loc, &config(true)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ketu_opposite_rahu() {
        let chart =
            compute_chart(&Parked, &instant(), &GeoLocation::default(), &config(true)).unwrap();
        let rahu = chart.planet(Planet::Rahu).unwrap().sidereal_longitude_deg;
        let ketu = chart.planet(Planet::Ketu).unwrap().sidereal_longitude_deg;
        assert!(((ketu - rahu).rem_euclid(360.0) - 180.0).abs() < 1e-9);
        assert_eq!(chart.planet(Planet::Rahu).unwrap().distance_au, 0.0);
    }

    #[test]
    fn node_policy_flows_through() {
        let mut cfg = config(false);
        cfg.retrograde = cfg.retrograde.with_node_policy(NodePolicy::NeverRetrograde);
        let chart = compute_chart(&Parked, &instant(), &GeoLocation::default(), &cfg).unwrap();
        assert_eq!(chart.retrograde_planets().count(), 0);
    }

    #[test]
    fn invalid_location_rejected() {
        let err = compute_chart(&Parked, &instant(), &GeoLocation::new(95.0, 0.0), &config(false))
            .unwrap_err();
        assert!(matches!(err, SearchError::Ephemeris(EphemerisError::InvalidQuery(_))));
    }

    #[test]
    fn pole_is_domain_error() {
        let err = compute_chart(&Parked, &instant(), &GeoLocation::new(90.0, 0.0), &config(false))
            .unwrap_err();
        assert!(matches!(err, SearchError::Vedic(kundli_vedic::VedicError::Domain(_))));
    }

    #[test]
    fn out_of_range_rejected() {
        let late = Instant::from_utc(2010, 1, 1, 0, 0, 0.0).unwrap();
        let err = compute_chart(&Parked, &late, &GeoLocation::default(), &config(false)).unwrap_err();
        assert!(matches!(err, SearchError::Ephemeris(EphemerisError::OutOfRange { .. })));
    }
}
