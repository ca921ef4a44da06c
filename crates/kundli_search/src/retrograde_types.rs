//! Types for retrograde search.

use kundli_time::Instant;
use kundli_vedic::{NodePolicy, Planet};

/// Direction of apparent motion along the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Direct,
    Retrograde,
}

impl Motion {
    pub const fn is_retrograde(self) -> bool {
        matches!(self, Self::Retrograde)
    }

    pub const fn from_retrograde(retrograde: bool) -> Self {
        if retrograde {
            Self::Retrograde
        } else {
            Self::Direct
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Retrograde => "retrograde",
        }
    }
}

/// Instant where the sampled motion flips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionChange {
    /// Crossing time as Julian Date (UTC).
    pub jd_utc: f64,
    /// Motion after the crossing.
    pub motion_after: Motion,
}

/// Maximal stretch of uniform motion. `start` and `end` are both members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionInterval {
    pub start: Instant,
    pub end: Instant,
    pub motion: Motion,
}

impl MotionInterval {
    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    pub fn duration_days(&self) -> f64 {
        self.end.days_since(&self.start)
    }
}

/// A retrograde period of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeInterval {
    pub planet: Planet,
    pub start: Instant,
    pub end: Instant,
}

impl RetrogradeInterval {
    pub fn duration_days(&self) -> f64 {
        self.end.days_since(&self.start)
    }
}

/// Configuration for retrograde searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeConfig {
    /// Half-width of the search window around the queried instant, days.
    pub window_days: f64,
    /// Coarse scan step size in days.
    pub step_days: f64,
    /// Maximum bisection iterations.
    pub max_iterations: u32,
    /// Convergence threshold in days (1e-6 ≈ 0.09 s).
    pub convergence_days: f64,
    /// Lag of the instantaneous test lon(t) < lon(t − lag), days.
    pub sample_lag_days: f64,
    /// Retrograde state reported for Rahu and Ketu.
    pub node_policy: NodePolicy,
}

impl Default for RetrogradeConfig {
    fn default() -> Self {
        Self {
            window_days: 365.0,
            step_days: 1.0,
            max_iterations: 50,
            convergence_days: 1e-6,
            sample_lag_days: 1.0,
            node_policy: NodePolicy::default(),
        }
    }
}

impl RetrogradeConfig {
    /// Coarser 2-day scan; adequate for Jupiter and Saturn whose loops last months.
    pub fn outer_planet() -> Self {
        Self {
            step_days: 2.0,
            ..Self::default()
        }
    }

    pub fn with_node_policy(mut self, node_policy: NodePolicy) -> Self {
        self.node_policy = node_policy;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.window_days.is_finite() || self.window_days <= 0.0 {
            return Err("window_days must be positive");
        }
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        if !self.sample_lag_days.is_finite() || self.sample_lag_days <= 0.0 {
            return Err("sample_lag_days must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_valid() {
        let c = RetrogradeConfig::default();
        assert!((c.window_days - 365.0).abs() < 1e-10);
        assert!((c.sample_lag_days - 1.0).abs() < 1e-10);
        assert_eq!(c.node_policy, NodePolicy::AlwaysRetrograde);
        assert!(c.validate().is_ok());
        assert!(RetrogradeConfig::outer_planet().validate().is_ok());
    }

    #[test]
    fn rejects_zero_step() {
        let mut c = RetrogradeConfig::default();
        c.step_days = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_negative_window() {
        let mut c = RetrogradeConfig::default();
        c.window_days = -1.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut c = RetrogradeConfig::default();
        c.max_iterations = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_nan_lag() {
        let mut c = RetrogradeConfig::default();
        c.sample_lag_days = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn interval_membership_inclusive() {
        let start = Instant::from_utc(2024, 4, 1, 0, 0, 0.0).unwrap();
        let end = Instant::from_utc(2024, 4, 25, 0, 0, 0.0).unwrap();
        let iv = MotionInterval {
            start,
            end,
            motion: Motion::Retrograde,
        };
        assert!(iv.contains(&start));
        assert!(iv.contains(&end));
        assert!((iv.duration_days() - 24.0).abs() < 1e-9);
    }
}
