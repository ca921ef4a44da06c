//! Cyclic lookup of the running dasha.
//!
//! Elapsed whole days since birth are folded into one cycle
//! (`cycle_years × 365` days) and the ordered table is walked until the
//! cumulative end passes that position. Intervals are left-closed, so the
//! first day of a period belongs to it.

use kundli_time::Instant;
use tracing::trace;

use crate::error::VedicError;
use crate::planet::Planet;

use super::registry::DashaRegistry;
use super::types::{DashaPeriod, DashaSystemId, DashaTable};

/// Position inside the current cycle: (cycle index, day within cycle).
fn cycle_position(table: &DashaTable, birth: &Instant, now: &Instant) -> Result<(i64, i64), VedicError> {
    let total_days = now.whole_days_since(birth);
    if total_days < 0 {
        return Err(VedicError::Domain("dasha query precedes birth"));
    }
    if table.periods.is_empty() {
        return Err(VedicError::MissingPeriodData(table.id.0));
    }
    let cycle_days = table.cycle_days();
    if cycle_days <= 0 {
        return Err(VedicError::Domain("dasha cycle length must be positive"));
    }
    Ok((total_days / cycle_days, total_days % cycle_days))
}

impl DashaTable {
    /// Planet whose period contains `now` for a native born at `birth`.
    pub fn running_planet(&self, birth: &Instant, now: &Instant) -> Result<Planet, VedicError> {
        let (_, position) = cycle_position(self, birth, now)?;
        let mut elapsed = 0_i64;
        for entry in &self.periods {
            elapsed += entry.days();
            if elapsed > position {
                trace!(system = self.id.0, position, planet = entry.planet.name(), "running dasha");
                return Ok(entry.planet);
            }
        }
        Err(VedicError::UnableToDetermineDasha)
    }

    /// The running period with its concrete start and end instants.
    pub fn running_period(&self, birth: &Instant, now: &Instant) -> Result<DashaPeriod, VedicError> {
        dasha_timeline(self, birth, now)?
            .into_iter()
            .find(|p| p.is_running)
            .ok_or(VedicError::UnableToDetermineDasha)
    }
}

/// Running planet of system `id` looked up in `registry`.
pub fn find_running_dasha(
    registry: &DashaRegistry,
    birth: &Instant,
    now: &Instant,
    id: DashaSystemId,
) -> Result<Planet, VedicError> {
    registry.get(id)?.running_planet(birth, now)
}

/// Every period of the cycle containing `now`, in table order.
///
/// Exactly one entry has `is_running` set; a table whose years under-sum
/// its cycle fails with `UnableToDetermineDasha` when `now` falls in the gap.
pub fn dasha_timeline(
    table: &DashaTable,
    birth: &Instant,
    now: &Instant,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let (cycle, position) = cycle_position(table, birth, now)?;
    let cycle_start = cycle * table.cycle_days();

    let mut periods = Vec::with_capacity(table.periods.len());
    let mut offset = 0_i64;
    let mut found = false;
    for entry in &table.periods {
        let end_offset = offset + entry.days();
        let is_running = offset <= position && position < end_offset;
        found |= is_running;
        periods.push(DashaPeriod {
            planet: entry.planet,
            start: birth.add_whole_days(cycle_start + offset)?,
            end: birth.add_whole_days(cycle_start + end_offset)?,
            is_running,
        });
        offset = end_offset;
    }
    if !found {
        return Err(VedicError::UnableToDetermineDasha);
    }
    Ok(periods)
}
