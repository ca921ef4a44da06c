//! Kattam (chart cell) assembly for the South-Indian fixed-square layout.
//!
//! Every cell is bound to a rasi. Houses are a cyclic rotation of the rasis
//! starting at the ascendant's rasi. The assembled list is ordered by rasi
//! number; use [`kattams_in_house_order`] for a house-anchored walk.

use crate::planet::Planet;
use crate::position::PlanetPosition;
use crate::rasi::Rasi;

/// One chart cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Kattam {
    /// Rasi number 1–12; the sort key of the assembled chart.
    pub order: u8,
    pub rasi: Rasi,
    /// Ruling planet of the rasi.
    pub owner: Planet,
    pub is_ascendant: bool,
    /// House 1–12 counted from the ascendant.
    pub house: u8,
    /// Sidereal ascendant longitude, set only on the ascendant's cell.
    pub ascendant_longitude_deg: Option<f64>,
    /// Occupants ordered by degrees advanced within the rasi.
    pub planets: Vec<PlanetPosition>,
}

impl Kattam {
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn contains(&self, planet: Planet) -> bool {
        self.planets.iter().any(|p| p.planet == planet)
    }
}

/// Rasis in house order: index `i` holds the rasi of house `i + 1`.
pub const fn house_sequence(ascendant: Rasi) -> [Rasi; 12] {
    let mut seq = [ascendant; 12];
    let mut i = 0;
    while i < 12 {
        seq[i] = ascendant.nth_from(i as u8);
        i += 1;
    }
    seq
}

/// Build the twelve cells from the ascendant and the enriched planet list.
///
/// Ascendant entries in `planets` are not placed as occupants; the cell
/// carries the ascendant through `is_ascendant` and `ascendant_longitude_deg`.
pub fn build_kattams(ascendant: &PlanetPosition, planets: &[PlanetPosition]) -> Vec<Kattam> {
    let mut groups: [Vec<PlanetPosition>; 12] = Default::default();
    for p in planets.iter().filter(|p| !p.is_ascendant) {
        groups[p.rasi.index() as usize].push(*p);
    }
    for group in &mut groups {
        group.sort_by(|a, b| a.advanced_by_deg.total_cmp(&b.advanced_by_deg));
    }

    let asc_rasi = ascendant.rasi;
    let mut kattams: Vec<Kattam> = house_sequence(asc_rasi)
        .into_iter()
        .enumerate()
        .map(|(i, rasi)| {
            let is_ascendant = rasi == asc_rasi;
            Kattam {
                order: rasi.number(),
                rasi,
                owner: rasi.lord(),
                is_ascendant,
                house: i as u8 + 1,
                ascendant_longitude_deg: is_ascendant.then_some(ascendant.sidereal_longitude_deg),
                planets: std::mem::take(&mut groups[rasi.index() as usize]),
            }
        })
        .collect();
    kattams.sort_by_key(|k| k.order);
    kattams
}

/// House-anchored view of an assembled chart: house 1 first.
pub fn kattams_in_house_order(kattams: &[Kattam]) -> Vec<&Kattam> {
    let mut view: Vec<&Kattam> = kattams.iter().collect();
    view.sort_by_key(|k| k.house);
    view
}

/// Cell holding `rasi`, if present.
pub fn kattam_for_rasi(kattams: &[Kattam], rasi: Rasi) -> Option<&Kattam> {
    kattams.iter().find(|k| k.rasi == rasi)
}
