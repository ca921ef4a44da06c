//! Built-in dasha period tables.
//!
//! Slots are listed in chart-code order (Sun first), which is the order the
//! cyclic walk starts from at birth. Provenance of the year counts: BPHS
//! chapters on Vimshottari and Ashtottari; Kalachakra follows the 28-year
//! seven-graha scheme.

use crate::planet::Planet;

use super::types::{DashaEntry, DashaSystemId, DashaTable};

/// Vimshottari: 9 grahas, 120 years.
pub const VIMSHOTTARI_PERIODS: [DashaEntry; 9] = [
    DashaEntry::new(Planet::Sun, 6),
    DashaEntry::new(Planet::Moon, 10),
    DashaEntry::new(Planet::Mars, 7),
    DashaEntry::new(Planet::Mercury, 17),
    DashaEntry::new(Planet::Jupiter, 16),
    DashaEntry::new(Planet::Venus, 20),
    DashaEntry::new(Planet::Saturn, 19),
    DashaEntry::new(Planet::Rahu, 18),
    DashaEntry::new(Planet::Ketu, 7),
];

/// Ashtottari: same slots as Vimshottari with a 5-year Mercury, 108 years.
pub const ASHTOTTARI_PERIODS: [DashaEntry; 9] = [
    DashaEntry::new(Planet::Sun, 6),
    DashaEntry::new(Planet::Moon, 10),
    DashaEntry::new(Planet::Mars, 7),
    DashaEntry::new(Planet::Mercury, 5),
    DashaEntry::new(Planet::Jupiter, 16),
    DashaEntry::new(Planet::Venus, 20),
    DashaEntry::new(Planet::Saturn, 19),
    DashaEntry::new(Planet::Rahu, 18),
    DashaEntry::new(Planet::Ketu, 7),
];

/// Kalachakra: 7 grahas, 28 years.
pub const KALACHAKRA_PERIODS: [DashaEntry; 7] = [
    DashaEntry::new(Planet::Moon, 1),
    DashaEntry::new(Planet::Mercury, 3),
    DashaEntry::new(Planet::Mars, 2),
    DashaEntry::new(Planet::Venus, 4),
    DashaEntry::new(Planet::Jupiter, 5),
    DashaEntry::new(Planet::Sun, 6),
    DashaEntry::new(Planet::Saturn, 7),
];

pub fn vimshottari() -> DashaTable {
    DashaTable::from_parts(
        DashaSystemId::VIMSHOTTARI,
        "Vimshottari",
        120,
        VIMSHOTTARI_PERIODS.to_vec(),
    )
}

pub fn ashtottari() -> DashaTable {
    DashaTable::from_parts(
        DashaSystemId::ASHTOTTARI,
        "Ashtottari",
        108,
        ASHTOTTARI_PERIODS.to_vec(),
    )
}

pub fn kalachakra() -> DashaTable {
    DashaTable::from_parts(
        DashaSystemId::KALACHAKRA,
        "Kalachakra",
        28,
        KALACHAKRA_PERIODS.to_vec(),
    )
}

/// All built-in tables in id order.
pub fn builtin_tables() -> [DashaTable; 3] {
    [vimshottari(), ashtottari(), kalachakra()]
}
