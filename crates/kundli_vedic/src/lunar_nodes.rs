//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Mean node: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 47.7.
//! True node: mean node plus the five principal periodic corrections given
//! with it (errors ≈ 0.02°). Ketu is always Rahu + 180°.
//!
//! Output is a tropical longitude of date with nutation applied, the same
//! frame the ephemeris provider reports planets in.

use kundli_ephem::nutation_in_longitude_deg;
use kundli_ephem::obliquity::centuries_since_j2000;
use kundli_time::Instant;

use crate::angle::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    Rahu,
    Ketu,
}

pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

/// Mean ascending node, degrees [0, 360), mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// True ascending node, degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0)
        .to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2).to_radians();

    let correction = -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * m.sin()
        - 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        - 0.0801 * (2.0 * (mp - f)).sin();
    normalize_360(mean_rahu_deg(t) + correction)
}

/// Tropical longitude of a node at `instant`, nutation included.
pub fn lunar_node_deg(node: LunarNode, instant: &Instant, mode: NodeMode) -> f64 {
    let jd_tt = instant.jd_tt();
    let t = centuries_since_j2000(jd_tt);
    let rahu = match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    } + nutation_in_longitude_deg(jd_tt);
    match node {
        LunarNode::Rahu => normalize_360(rahu),
        LunarNode::Ketu => normalize_360(rahu + 180.0),
    }
}
