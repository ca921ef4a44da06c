//! Registry of dasha systems keyed by [`DashaSystemId`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::VedicError;

use super::tables::builtin_tables;
use super::types::{DashaSystemId, DashaTable};

/// Lookup table of dasha systems.
#[derive(Debug, Clone, Default)]
pub struct DashaRegistry {
    tables: BTreeMap<DashaSystemId, DashaTable>,
}

impl DashaRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding Vimshottari, Ashtottari and Kalachakra.
    pub fn builtin() -> Self {
        let tables = builtin_tables()
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        Self { tables }
    }

    /// Table for `id`, or `UnsupportedSystem`.
    pub fn get(&self, id: DashaSystemId) -> Result<&DashaTable, VedicError> {
        self.tables
            .get(&id)
            .ok_or(VedicError::UnsupportedSystem(id.0))
    }

    /// Add or replace a table after validating it. Returns the displaced table.
    pub fn register(&mut self, table: DashaTable) -> Result<Option<DashaTable>, VedicError> {
        table.validate()?;
        debug!(id = table.id.0, name = %table.name, "registering dasha system");
        Ok(self.tables.insert(table.id, table))
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> Vec<DashaSystemId> {
        self.tables.keys().copied().collect()
    }

    /// Table whose name matches case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&DashaTable> {
        self.tables
            .values()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DashaEntry;
    use crate::planet::Planet;

    #[test]
    fn builtin_ids() {
        let reg = DashaRegistry::builtin();
        assert_eq!(
            reg.ids(),
            vec![
                DashaSystemId::VIMSHOTTARI,
                DashaSystemId::ASHTOTTARI,
                DashaSystemId::KALACHAKRA
            ]
        );
        assert_eq!(reg.get(DashaSystemId(1)).unwrap().cycle_years, 120);
        assert_eq!(reg.find_by_name("kalachakra").unwrap().cycle_years, 28);
    }

    #[test]
    fn unknown_id_is_unsupported() {
        let reg = DashaRegistry::builtin();
        assert_eq!(
            reg.get(DashaSystemId(99)).unwrap_err(),
            VedicError::UnsupportedSystem(99)
        );
    }

    #[test]
    fn register_validates() {
        let mut reg = DashaRegistry::new();
        let bad = DashaTable::from_parts(
            DashaSystemId(7),
            "bad",
            12,
            vec![DashaEntry::new(Planet::Sun, 5)],
        );
        assert!(reg.register(bad).is_err());
        assert!(reg.is_empty());

        let good = DashaTable::from_parts(
            DashaSystemId(7),
            "two-graha",
            12,
            vec![DashaEntry::new(Planet::Sun, 5), DashaEntry::new(Planet::Moon, 7)],
        );
        assert_eq!(reg.register(good).unwrap(), None);
        assert_eq!(reg.len(), 1);
    }
}
