//! Dasha (planetary period) lookup.
//!
//! A dasha system is an ordered table of (planet, years) slots whose years
//! sum to the cycle length. The running period is found by folding the
//! elapsed days since birth into one cycle and walking the table.

pub mod registry;
pub mod running;
pub mod tables;
pub mod types;

pub use registry::DashaRegistry;
pub use running::{dasha_timeline, find_running_dasha};
pub use tables::{
    ASHTOTTARI_PERIODS, KALACHAKRA_PERIODS, VIMSHOTTARI_PERIODS, ashtottari, builtin_tables,
    kalachakra, vimshottari,
};
pub use types::{DAYS_PER_DASHA_YEAR, DashaEntry, DashaPeriod, DashaSystemId, DashaTable};
