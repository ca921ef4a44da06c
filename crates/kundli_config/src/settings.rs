//! Settings loaded from a TOML file.
//!
//! Every key is optional; omitted keys keep their defaults.
//!
//! ```toml
//! ayanamsa = "lahiri"        # or a fixed value in degrees, e.g. 24.12
//! dasha_system = "vimshottari" # or a numeric id
//! node_policy = "always-retrograde"
//! node_mode = "mean"
//!
//! [location]
//! latitude = 12.9716
//! longitude = 77.5946
//!
//! [search]
//! window_days = 365
//! step_days = 1
//! parallel = true
//! ```

use std::fs;
use std::path::Path;

use kundli_ephem::GeoLocation;
use kundli_search::{ChartConfig, RetrogradeConfig};
use kundli_vedic::{AyanamsaSetting, DashaRegistry, DashaSystemId, NodeMode, NodePolicy};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::source::{DEFAULT_LOCATION, SettingsSource};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    ayanamsa: Option<AyanamsaToml>,
    #[serde(default)]
    dasha_system: Option<DashaSystemToml>,
    #[serde(default)]
    node_policy: Option<String>,
    #[serde(default)]
    node_mode: Option<String>,
    #[serde(default)]
    location: Option<LocationToml>,
    #[serde(default)]
    search: Option<SearchToml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AyanamsaToml {
    Fixed(f64),
    Named(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DashaSystemToml {
    Id(u16),
    Name(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationToml {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchToml {
    #[serde(default)]
    window_days: Option<f64>,
    #[serde(default)]
    step_days: Option<f64>,
    #[serde(default)]
    parallel: Option<bool>,
}

/// Resolved settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub ayanamsa: AyanamsaSetting,
    pub dasha_system: DashaSystemId,
    pub node_policy: NodePolicy,
    pub node_mode: NodeMode,
    pub location: GeoLocation,
    pub retrograde: RetrogradeConfig,
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaSetting::Lahiri,
            dasha_system: DashaSystemId::VIMSHOTTARI,
            node_policy: NodePolicy::AlwaysRetrograde,
            node_mode: NodeMode::Mean,
            location: DEFAULT_LOCATION,
            retrograde: RetrogradeConfig::default(),
            parallel: true,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: SettingsToml =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.message().to_string()))?;
        Self::from_raw(raw)
    }

    /// Read and parse a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    fn from_raw(raw: SettingsToml) -> Result<Self, ConfigError> {
        let mut s = Self::default();

        if let Some(aya) = raw.ayanamsa {
            s.ayanamsa = parse_ayanamsa(aya)?;
        }
        if let Some(system) = raw.dasha_system {
            s.dasha_system = parse_dasha_system(system)?;
        }
        if let Some(policy) = raw.node_policy {
            s.node_policy = parse_node_policy(&policy)?;
        }
        if let Some(mode) = raw.node_mode {
            s.node_mode = parse_node_mode(&mode)?;
        }
        if let Some(loc) = raw.location {
            let location = GeoLocation::new(loc.latitude, loc.longitude);
            location
                .validate()
                .map_err(|e| ConfigError::invalid("location", e.to_string()))?;
            s.location = location;
        }
        if let Some(search) = raw.search {
            if let Some(w) = search.window_days {
                s.retrograde.window_days = w;
            }
            if let Some(step) = search.step_days {
                s.retrograde.step_days = step;
            }
            if let Some(parallel) = search.parallel {
                s.parallel = parallel;
            }
        }
        s.retrograde.node_policy = s.node_policy;
        s.retrograde
            .validate()
            .map_err(|e| ConfigError::invalid("search", e))?;
        Ok(s)
    }
}

fn parse_ayanamsa(raw: AyanamsaToml) -> Result<AyanamsaSetting, ConfigError> {
    match raw {
        AyanamsaToml::Fixed(deg) if deg.is_finite() => Ok(AyanamsaSetting::Fixed(deg)),
        AyanamsaToml::Fixed(deg) => Err(ConfigError::invalid("ayanamsa", format!("{deg} is not finite"))),
        AyanamsaToml::Named(name) if name.eq_ignore_ascii_case("lahiri") => {
            Ok(AyanamsaSetting::Lahiri)
        }
        AyanamsaToml::Named(name) => Err(ConfigError::invalid(
            "ayanamsa",
            format!("unknown ayanamsa `{name}`"),
        )),
    }
}

fn parse_dasha_system(raw: DashaSystemToml) -> Result<DashaSystemId, ConfigError> {
    let registry = DashaRegistry::builtin();
    match raw {
        DashaSystemToml::Id(id) => registry
            .get(DashaSystemId(id))
            .map(|t| t.id)
            .map_err(|e| ConfigError::invalid("dasha_system", e.to_string())),
        DashaSystemToml::Name(name) => registry
            .find_by_name(&name)
            .map(|t| t.id)
            .ok_or_else(|| {
                ConfigError::invalid("dasha_system", format!("unknown dasha system `{name}`"))
            }),
    }
}

/// Parse a node policy name (`always-retrograde` / `never-retrograde`).
pub fn parse_node_policy(name: &str) -> Result<NodePolicy, ConfigError> {
    [NodePolicy::AlwaysRetrograde, NodePolicy::NeverRetrograde]
        .into_iter()
        .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ConfigError::invalid("node_policy", format!("unknown policy `{name}`")))
}

/// Parse a node mode name (`mean` / `true`).
pub fn parse_node_mode(name: &str) -> Result<NodeMode, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mean" => Ok(NodeMode::Mean),
        "true" => Ok(NodeMode::True),
        _ => Err(ConfigError::invalid("node_mode", format!("unknown mode `{name}`"))),
    }
}

impl SettingsSource for Settings {
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

    fn node_mode(&self) -> NodeMode {
        self.node_mode
    }

    fn retrograde_config(&self) -> RetrogradeConfig {
        self.retrograde.with_node_policy(self.node_policy)
    }

    fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            ayanamsa: self.ayanamsa,
            node_mode: self.node_mode,
            retrograde: self.retrograde_config(),
            parallel: self.parallel,
        }
    }
}
