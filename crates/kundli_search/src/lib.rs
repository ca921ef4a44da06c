//! Searches that drive the ephemeris through time.
//!
//! - Retrograde detection: coarse scan for direction changes, bisection
//!   refinement, interval membership
//! - Whole-chart assembly on top of `kundli_vedic`

pub mod chart;
pub mod error;
pub mod retrograde;
pub mod retrograde_types;

pub use chart::{Chart, ChartConfig, compute_chart, tropical_position};
pub use error::SearchError;
pub use retrograde::{
    direction_changes, is_retrograde_at, is_retrograde_sample, motion_intervals,
    retrograde_periods,
};
pub use retrograde_types::{
    DirectionChange, Motion, MotionInterval, RetrogradeConfig, RetrogradeInterval,
};
