//! The read-only settings seam the chart pipeline consults.

use kundli_ephem::GeoLocation;
use kundli_search::{ChartConfig, RetrogradeConfig};
use kundli_vedic::{AyanamsaSetting, DashaSystemId, NodeMode, NodePolicy};

/// Bengaluru, the customary default observer.
pub const DEFAULT_LOCATION: GeoLocation = GeoLocation::new(12.9716, 77.5946);

/// Supplier of the active chart settings.
pub trait SettingsSource {
    fn ayanamsa(&self) -> AyanamsaSetting;

    fn dasha_system(&self) -> DashaSystemId;

    fn node_policy(&self) -> NodePolicy;

    fn default_location(&self) -> GeoLocation;

    fn node_mode(&self) -> NodeMode {
        NodeMode::default()
    }

    fn retrograde_config(&self) -> RetrogradeConfig {
        RetrogradeConfig::default().with_node_policy(self.node_policy())
    }

    /// Chart configuration assembled from the other settings.
    fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            ayanamsa: self.ayanamsa(),
            node_mode: self.node_mode(),
            retrograde: self.retrograde_config(),
            ..ChartConfig::default()
        }
    }
}

/// In-memory settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticSettings {
    pub ayanamsa: AyanamsaSetting,
    pub dasha_system: DashaSystemId,
    pub node_policy: NodePolicy,
    pub location: GeoLocation,
}

impl StaticSettings {
    pub const fn new(
        ayanamsa: AyanamsaSetting,
        dasha_system: DashaSystemId,
        node_policy: NodePolicy,
        location: GeoLocation,
    ) -> Self {
        Self {
            ayanamsa,
            dasha_system,
            node_policy,
            location,
        }
    }
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self::new(
            AyanamsaSetting::Lahiri,
            DashaSystemId::VIMSHOTTARI,
            NodePolicy::AlwaysRetrograde,
            DEFAULT_LOCATION,
        )
    }
}

impl SettingsSource for StaticSettings {
    fn ayanamsa(&self) -> AyanamsaSetting {
        self.ayanamsa
    }

    fn dasha_system(&self) -> DashaSystemId {
        self.dasha_system
    }

    fn node_policy(&self) -> NodePolicy {
        self.node_policy
    }

    fn default_location(&self) -> GeoLocation {
        self.location
    }
}
