//! Earth-orientation angles in the ecliptic: obliquity, precession, nutation.
//!
//! Sources:
//! - Mean obliquity and general precession: IAU 2006 (Capitaine, Wallace &
//!   Chapront 2003, _A&A_ 412, 567), IERS Conventions 2010 ch. 5.
//! - Nutation in longitude: the four largest terms of IAU 1980, as tabulated
//!   in Meeus, *Astronomical Algorithms*, ch. 22 (≈0.5″ accuracy).

use kundli_time::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Julian centuries of TT since J2000.0.
pub fn centuries_since_j2000(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// IAU 2006 mean obliquity of the ecliptic in degrees.
///
/// ε₀ = 84381.406″ − 46.836769″T − 0.0001831″T² + 0.00200340″T³
///      − 0.000000576″T⁴ − 0.0000000434″T⁵
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    let t = centuries_since_j2000(jd_tt);
    let arcsec = 84_381.406
        + t * (-46.836_769
            + t * (-0.000_183_1 + t * (0.002_003_40 + t * (-0.000_000_576 - 0.000_000_043_4 * t))));
    arcsec / 3600.0
}

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// Positive values mean the equinox has moved westward since J2000, so a
/// fixed J2000 longitude grows by this amount when referred to the equinox
/// of date. The linear term is ≈1.3969°/century.
pub fn general_precession_deg(jd_tt: f64) -> f64 {
    let t = centuries_since_j2000(jd_tt);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3
        - 0.000023857 * t4
        - 0.0000000383 * t5;
    arcsec / 3600.0
}

/// Nutation in longitude Δψ in degrees.
pub fn nutation_in_longitude_deg(jd_tt: f64) -> f64 {
    let t = centuries_since_j2000(jd_tt);
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}
