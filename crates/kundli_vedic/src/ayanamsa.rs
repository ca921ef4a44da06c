//! Ayanamsa: the offset between tropical and sidereal longitudes.
//!
//! Lahiri is modelled as a quadratic in the number of reference centuries
//! elapsed since 1900-Jan-01 12:00 TT:
//!
//! ```text
//! b   = (JD_TT − 2415021.0) / D,   D = days from 2000-Jan-01 12:00 to 2100-Jan-01 12:00
//! aya = 22.460148 + 1.396042·b + 0.000308·b²
//! ```

use kundli_time::{Instant, JD_1900_NOON_TT, TimeError, days_between_years};

use crate::error::VedicError;

/// Lahiri constant term, degrees.
pub const LAHIRI_C0: f64 = 22.460_148;
/// Lahiri linear term, degrees per reference century.
pub const LAHIRI_C1: f64 = 1.396_042;
/// Lahiri quadratic term, degrees per reference century².
pub const LAHIRI_C2: f64 = 0.000_308;

/// Customary fixed Lahiri value used when a constant ayanamsa is preferred.
pub const LAHIRI_FIXED_DEG: f64 = 24.12;

/// Days in the 2000–2100 reference century (36525).
pub fn reference_century_days() -> f64 {
    days_between_years(2000, 2100)
}

/// Lahiri ayanamsa in degrees for a JD on the TT axis.
pub fn lahiri_ayanamsa_for_jd_tt(jd_tt: f64) -> Result<f64, VedicError> {
    if !jd_tt.is_finite() {
        return Err(TimeError::OutOfRange { jd: jd_tt }.into());
    }
    let b = (jd_tt - JD_1900_NOON_TT) / reference_century_days();
    Ok(LAHIRI_C0 + LAHIRI_C1 * b + LAHIRI_C2 * b * b)
}

/// Lahiri ayanamsa in degrees at `instant`.
pub fn lahiri_ayanamsa_deg(instant: &Instant) -> Result<f64, VedicError> {
    lahiri_ayanamsa_for_jd_tt(instant.jd_tt())
}

/// Which ayanamsa a chart uses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AyanamsaSetting {
    /// Computed Lahiri value for the chart instant.
    #[default]
    Lahiri,
    /// Constant value in degrees.
    Fixed(f64),
}

impl AyanamsaSetting {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::Fixed(_) => "fixed",
        }
    }

    /// Ayanamsa value in degrees at `instant`.
    pub fn degrees(&self, instant: &Instant) -> Result<f64, VedicError> {
        match *self {
            Self::Lahiri => lahiri_ayanamsa_deg(instant),
            Self::Fixed(deg) if deg.is_finite() => Ok(deg),
            Self::Fixed(_) => Err(VedicError::Domain("fixed ayanamsa must be finite")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_century_is_36525_days() {
        assert!((reference_century_days() - 36_525.0).abs() < 1e-9);
    }

    #[test]
    fn equals_c0_at_1900() {
        let aya = lahiri_ayanamsa_for_jd_tt(JD_1900_NOON_TT).unwrap();
        assert!((aya - LAHIRI_C0).abs() < 1e-12);
    }

    #[test]
    fn near_23_86_at_j2000() {
        let aya = lahiri_ayanamsa_for_jd_tt(2_451_545.0).unwrap();
        assert!((aya - 23.856_5).abs() < 1e-3, "aya = {aya}");
    }

    #[test]
    fn grows_about_50_arcsec_per_year() {
        let a = lahiri_ayanamsa_for_jd_tt(2_451_545.0).unwrap();
        let b = lahiri_ayanamsa_for_jd_tt(2_451_545.0 + 365.25).unwrap();
        let rate = (b - a) * 3600.0;
        assert!((rate - 50.3).abs() < 0.5, "rate = {rate}″/yr");
    }

    #[test]
    fn instant_path_applies_tt() {
        let t = Instant::from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();
        let aya = lahiri_ayanamsa_deg(&t).unwrap();
        assert!((24.1..24.25).contains(&aya), "aya = {aya}");
    }

    #[test]
    fn non_finite_rejected() {
        assert!(matches!(
            lahiri_ayanamsa_for_jd_tt(f64::NAN),
            Err(VedicError::InvalidTime(_))
        ));
    }

    #[test]
    fn fixed_setting() {
        let t = Instant::from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(AyanamsaSetting::Fixed(LAHIRI_FIXED_DEG).degrees(&t), Ok(24.12));
        assert!(AyanamsaSetting::Fixed(f64::INFINITY).degrees(&t).is_err());
        assert_eq!(AyanamsaSetting::default(), AyanamsaSetting::Lahiri);
    }
}
