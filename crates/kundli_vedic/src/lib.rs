//! Sidereal (nirayana) chart calculations built on an ephemeris provider.
//!
//! This crate provides:
//! - Lahiri ayanamsa and tropical → sidereal placement
//! - Rasi, house, nakshatra and pada assignment
//! - Lagna (ascendant) and mean/true lunar nodes
//! - Kattam (chart cell) assembly
//! - Cyclic dasha lookup over a registry of period tables
//!
//! Retrograde detection and whole-chart assembly live in `kundli_search`,
//! since they drive the ephemeris through a root-finding search.

pub mod angle;
pub mod ayanamsa;
pub mod dasha;
pub mod error;
pub mod kattam;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod planet;
pub mod position;
pub mod rasi;

pub use angle::{Dms, deg_to_dms, dms_parts_to_deg, dms_to_deg, normalize_360, sign, signed_delta};
pub use ayanamsa::{
    AyanamsaSetting, LAHIRI_FIXED_DEG, lahiri_ayanamsa_deg, lahiri_ayanamsa_for_jd_tt,
    reference_century_days,
};
pub use dasha::{
    DashaEntry, DashaPeriod, DashaRegistry, DashaSystemId, DashaTable, dasha_timeline,
    find_running_dasha,
};
pub use error::VedicError;
pub use kattam::{Kattam, build_kattams, house_sequence, kattam_for_rasi, kattams_in_house_order};
pub use lagna::{ascendant_from_lst, ascendant_position, tropical_ascendant_deg};
pub use lunar_nodes::{ALL_NODES, LunarNode, NodeMode, lunar_node_deg, mean_rahu_deg, true_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude, snap_to_pada_boundary,
};
pub use planet::{ALL_PLANETS, EMPTY_CODE, NodePolicy, Planet};
pub use position::{PlanetPosition, SiderealPlacement, TropicalPosition, sidereal_placement};
pub use rasi::{ALL_RASIS, Rasi, RasiInfo, house_of, rasi_from_longitude};
