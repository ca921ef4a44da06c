//! ΔT = TT − UT, the drift of Earth rotation against atomic time.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA Five Millennium Canon
//! of Solar Eclipses, 2006). Typical error is under one second after 1900
//! and grows to minutes in antiquity. Beyond 2150 the long-term parabola
//! of Morrison & Stephenson is used alone.

use crate::julian::{SECONDS_PER_DAY, decimal_year};

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds_for_year(y: f64) -> f64 {
    match y {
        y if y < -500.0 => long_term(y),
        y if y < 500.0 => {
            let u = y / 100.0;
            poly(
                u,
                &[
                    10_583.6,
                    -1_014.41,
                    33.783_11,
                    -5.952_053,
                    -0.179_845_2,
                    0.022_174_192,
                    0.009_031_652_1,
                ],
            )
        }
        y if y < 1600.0 => {
            let u = (y - 1000.0) / 100.0;
            poly(
                u,
                &[
                    1_574.2,
                    -556.01,
                    71.234_72,
                    0.319_781,
                    -0.850_346_3,
                    -0.005_050_998,
                    0.008_357_207_3,
                ],
            )
        }
        y if y < 1700.0 => {
            let t = y - 1600.0;
            120.0 - 0.9808 * t - 0.01532 * t * t + t * t * t / 7129.0
        }
        y if y < 1800.0 => {
            let t = y - 1700.0;
            poly(t, &[8.83, 0.1603, -0.005_928_5, 0.000_133_36]) - t.powi(4) / 1_174_000.0
        }
        y if y < 1860.0 => {
            let t = y - 1800.0;
            poly(
                t,
                &[
                    13.72,
                    -0.332_447,
                    0.006_861_2,
                    0.004_111_6,
                    -0.000_374_36,
                    0.000_012_127_2,
                    -0.000_000_169_9,
                    0.000_000_000_875,
                ],
            )
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            poly(t, &[7.62, 0.5737, -0.251_754, 0.016_806_68, -0.000_447_362_4])
                + t.powi(5) / 233_174.0
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            poly(t, &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197])
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            poly(t, &[21.20, 0.844_93, -0.076_100, 0.002_093_6])
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            poly(
                t,
                &[
                    63.86,
                    0.3345,
                    -0.060_374,
                    0.001_727_5,
                    0.000_651_814,
                    0.000_023_735_99,
                ],
            )
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            poly(t, &[62.92, 0.322_17, 0.005_589])
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// ΔT in seconds at a Julian Date on the UT axis.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    delta_t_seconds_for_year(decimal_year(jd_ut))
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Horner evaluation, coefficients in ascending order.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
