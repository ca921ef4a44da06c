//! Core types for cyclic dasha lookup.

use kundli_time::Instant;

use crate::error::VedicError;
use crate::planet::Planet;

/// Fixed year length for dasha arithmetic. Not calendar-aware.
pub const DAYS_PER_DASHA_YEAR: i64 = 365;

/// Identifier of a dasha system in a [`DashaRegistry`](super::DashaRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DashaSystemId(pub u16);

impl DashaSystemId {
    pub const VIMSHOTTARI: Self = Self(1);
    pub const ASHTOTTARI: Self = Self(2);
    pub const KALACHAKRA: Self = Self(3);

    pub const fn value(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for DashaSystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One (planet, years) slot of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaEntry {
    pub planet: Planet,
    pub years: u32,
}

impl DashaEntry {
    pub const fn new(planet: Planet, years: u32) -> Self {
        Self { planet, years }
    }

    pub const fn days(&self) -> i64 {
        self.years as i64 * DAYS_PER_DASHA_YEAR
    }
}

/// Ordered period table of one dasha system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashaTable {
    pub id: DashaSystemId,
    pub name: String,
    pub cycle_years: u32,
    pub periods: Vec<DashaEntry>,
}

impl DashaTable {
    /// Build a table without checking it. See [`DashaTable::validate`].
    pub fn from_parts(
        id: DashaSystemId,
        name: impl Into<String>,
        cycle_years: u32,
        periods: Vec<DashaEntry>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cycle_years,
            periods,
        }
    }

    /// Cycle length in days.
    pub const fn cycle_days(&self) -> i64 {
        self.cycle_years as i64 * DAYS_PER_DASHA_YEAR
    }

    /// Sum of the period years.
    pub fn total_years(&self) -> u32 {
        self.periods.iter().map(|e| e.years).sum()
    }

    /// Check the table is non-empty, has no zero-length periods, and sums to its cycle.
    pub fn validate(&self) -> Result<(), VedicError> {
        if self.periods.is_empty() {
            return Err(VedicError::MissingPeriodData(self.id.0));
        }
        if self.cycle_years == 0 {
            return Err(VedicError::Domain("dasha cycle length must be positive"));
        }
        if self.periods.iter().any(|e| e.years == 0) {
            return Err(VedicError::Domain("dasha period years must be positive"));
        }
        if self.total_years() != self.cycle_years {
            return Err(VedicError::Domain(
                "dasha period years must sum to the cycle length",
            ));
        }
        Ok(())
    }
}

/// One concrete period of a dasha cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    pub planet: Planet,
    /// Inclusive.
    pub start: Instant,
    /// Exclusive.
    pub end: Instant,
    pub is_running: bool,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end.days_since(&self.start)
    }

    /// Days left in the period at `now`, clamped to zero once it has ended.
    pub fn remaining_days(&self, now: &Instant) -> f64 {
        self.end.days_since(now).max(0.0)
    }

    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant < self.end
    }
}
