//! Chart settings.
//!
//! [`SettingsSource`] is the read-only seam the pipeline consults for the
//! ayanamsa, dasha system, node policy and default observer. [`Settings`]
//! loads from TOML; [`StaticSettings`] is an in-memory implementation.

pub mod error;
pub mod settings;
pub mod source;

pub use error::ConfigError;
pub use settings::{Settings, parse_node_mode, parse_node_policy};
pub use source::{DEFAULT_LOCATION, SettingsSource, StaticSettings};
