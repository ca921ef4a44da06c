//! Earth Rotation Angle, Greenwich Mean Sidereal Time and local sidereal time.
//!
//! All functions take UT1 Julian Dates.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD_UT1 − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵)″.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut1);
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// GMST in hours, [0, 24).
pub fn gmst_hours(jd_ut1: f64) -> f64 {
    gmst_rad(jd_ut1) * 24.0 / TAU
}

/// Local sidereal time in radians from GMST and east longitude.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Local sidereal time in hours for an observer at `longitude_east_deg`.
pub fn local_sidereal_time_hours(jd_ut1: f64, longitude_east_deg: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_ut1), longitude_east_deg.to_radians());
    lst * 24.0 / TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!(
            (theta_deg - 280.46).abs() < 0.1,
            "ERA at J2000 = {theta_deg}°, expected ~280.46°"
        );
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT1: GMST ≈ 6h 39m 51s
        let h = gmst_hours(2_451_544.5);
        assert!((h - 6.664).abs() < 0.01, "GMST = {h} h");
    }

    #[test]
    fn lst_shifts_by_longitude() {
        let jd = 2_451_544.5;
        let greenwich = local_sidereal_time_hours(jd, 0.0);
        let chennai = local_sidereal_time_hours(jd, 80.27);
        let diff = (chennai - greenwich).rem_euclid(24.0);
        assert!((diff - 80.27 / 15.0).abs() < 1e-9, "diff = {diff}");
    }

    #[test]
    fn lst_west_longitude_wraps() {
        let h = local_sidereal_time_hours(2_451_544.5, -120.0);
        assert!((0.0..24.0).contains(&h), "LST out of range: {h}");
    }

    #[test]
    fn sidereal_day_gain() {
        // GMST gains ~3m56s per solar day
        let g1 = gmst_hours(2_451_545.0);
        let g2 = gmst_hours(2_451_546.0);
        let gain = (g2 - g1).rem_euclid(24.0);
        assert!((gain - 0.0657).abs() < 0.001, "gain = {gain} h");
    }
}
