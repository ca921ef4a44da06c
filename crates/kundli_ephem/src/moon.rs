//! Geocentric Moon from the principal periodic terms of ELP-2000/82.
//!
//! Terms are the largest entries of Meeus, *Astronomical Algorithms*,
//! tables 47.A and 47.B. The truncation leaves errors of roughly 20″ in
//! longitude and 10″ in latitude. Output is referred to the mean equinox
//! of date.

/// Rows of `[D, M, M', F, Σl (1e-6 deg), Σr (1e-3 km)]`.
#[rustfmt::skip]
const LONGITUDE_DISTANCE_TERMS: [[f64; 6]; 32] = [
    [0.0,  0.0,  1.0, 0.0, 6_288_774.0, -20_905_355.0],
    [2.0,  0.0, -1.0, 0.0, 1_274_027.0,  -3_699_111.0],
    [2.0,  0.0,  0.0, 0.0,   658_314.0,  -2_955_968.0],
    [0.0,  0.0,  2.0, 0.0,   213_618.0,    -569_925.0],
    [0.0,  1.0,  0.0, 0.0,  -185_116.0,      48_888.0],
    [0.0,  0.0,  0.0, 2.0,  -114_332.0,      -3_149.0],
    [2.0,  0.0, -2.0, 0.0,    58_793.0,     246_158.0],
    [2.0, -1.0, -1.0, 0.0,    57_066.0,    -152_138.0],
    [2.0,  0.0,  1.0, 0.0,    53_322.0,    -170_733.0],
    [2.0, -1.0,  0.0, 0.0,    45_758.0,    -204_586.0],
    [0.0,  1.0, -1.0, 0.0,   -40_923.0,    -129_620.0],
    [1.0,  0.0,  0.0, 0.0,   -34_720.0,     108_743.0],
    [0.0,  1.0,  1.0, 0.0,   -30_383.0,     104_755.0],
    [2.0,  0.0,  0.0,-2.0,    15_327.0,      10_321.0],
    [0.0,  0.0,  1.0, 2.0,   -12_528.0,           0.0],
    [0.0,  0.0,  1.0,-2.0,    10_980.0,      79_661.0],
    [4.0,  0.0, -1.0, 0.0,    10_675.0,     -34_782.0],
    [0.0,  0.0,  3.0, 0.0,    10_034.0,     -23_210.0],
    [4.0,  0.0, -2.0, 0.0,     8_548.0,     -21_636.0],
    [2.0,  1.0, -1.0, 0.0,    -7_888.0,      24_208.0],
    [2.0,  1.0,  0.0, 0.0,    -6_766.0,      30_824.0],
    [1.0,  0.0, -1.0, 0.0,    -5_163.0,      -8_379.0],
    [1.0,  1.0,  0.0, 0.0,     4_987.0,     -16_675.0],
    [2.0, -1.0,  1.0, 0.0,     4_036.0,     -12_831.0],
    [2.0,  0.0,  2.0, 0.0,     3_994.0,     -10_445.0],
    [4.0,  0.0,  0.0, 0.0,     3_861.0,     -11_650.0],
    [2.0,  0.0, -3.0, 0.0,     3_665.0,      14_403.0],
    [0.0,  1.0, -2.0, 0.0,    -2_689.0,      -7_003.0],
    [2.0,  0.0, -1.0, 2.0,    -2_602.0,           0.0],
    [2.0, -1.0, -2.0, 0.0,     2_390.0,      10_056.0],
    [1.0,  0.0,  1.0, 0.0,    -2_348.0,       6_322.0],
    [2.0, -2.0,  0.0, 0.0,     2_236.0,      -9_884.0],
];

/// Rows of `[D, M, M', F, Σb (1e-6 deg)]`.
#[rustfmt::skip]
const LATITUDE_TERMS: [[f64; 5]; 17] = [
    [0.0,  0.0,  0.0,  1.0, 5_128_122.0],
    [0.0,  0.0,  1.0,  1.0,   280_602.0],
    [0.0,  0.0,  1.0, -1.0,   277_693.0],
    [2.0,  0.0,  0.0, -1.0,   173_237.0],
    [2.0,  0.0, -1.0,  1.0,    55_413.0],
    [2.0,  0.0, -1.0, -1.0,    46_271.0],
    [2.0,  0.0,  0.0,  1.0,    32_573.0],
    [0.0,  0.0,  2.0,  1.0,    17_198.0],
    [2.0,  0.0,  1.0, -1.0,     9_266.0],
    [0.0,  0.0,  2.0, -1.0,     8_822.0],
    [2.0, -1.0,  0.0, -1.0,     8_216.0],
    [2.0,  0.0, -2.0, -1.0,     4_324.0],
    [2.0,  0.0,  1.0,  1.0,     4_200.0],
    [2.0,  1.0,  0.0, -1.0,    -3_359.0],
    [2.0, -1.0, -1.0,  1.0,     2_463.0],
    [2.0, -1.0,  0.0,  1.0,     2_211.0],
    [2.0, -1.0, -1.0, -1.0,     2_065.0],
];

/// Mean Earth–Moon distance of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Geocentric Moon: `(longitude_deg, latitude_deg, distance_km)`, mean equinox of date.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn moon_geocentric(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    // Eccentricity of Earth's orbit scales terms in M
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let e_factor = |mult: f64| match mult.abs() as u8 {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let (lp_r, d_r, m_r, mp_r, f_r) = (
        lp.to_radians(),
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LONGITUDE_DISTANCE_TERMS {
        let arg = row[0] * d_r + row[1] * m_r + row[2] * mp_r + row[3] * f_r;
        let scale = e_factor(row[1]);
        sum_l += row[4] * scale * arg.sin();
        sum_r += row[5] * scale * arg.cos();
    }
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();

    let mut sum_b = 0.0;
    for row in &LATITUDE_TERMS {
        let arg = row[0] * d_r + row[1] * m_r + row[2] * mp_r + row[3] * f_r;
        sum_b += row[4] * e_factor(row[1]) * arg.sin();
    }
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    let lon = (lp + sum_l / 1e6).rem_euclid(360.0);
    let lat = sum_b / 1e6;
    let dist = MEAN_DISTANCE_KM + sum_r / 1000.0;
    (lon, lat, dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12 0h TD: λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let (lon, lat, dist) = moon_geocentric(t);
        assert!((lon - 133.162_655).abs() < 0.05, "λ = {lon}");
        assert!((lat + 3.229_126).abs() < 0.05, "β = {lat}");
        assert!((dist - 368_409.7).abs() < 100.0, "Δ = {dist}");
    }

    #[test]
    fn distance_within_perigee_apogee() {
        for k in 0..400 {
            let t = -1.0 + k as f64 * 0.005;
            let (_, lat, dist) = moon_geocentric(t);
            assert!((355_000.0..408_000.0).contains(&dist), "Δ = {dist}");
            assert!(lat.abs() < 5.4, "β = {lat}");
        }
    }

    #[test]
    fn moves_about_13_degrees_a_day() {
        let day = 1.0 / 36_525.0;
        let (l0, _, _) = moon_geocentric(0.0);
        let (l1, _, _) = moon_geocentric(day);
        let step = (l1 - l0).rem_euclid(360.0);
        assert!((11.5..15.5).contains(&step), "daily motion = {step}");
    }
}
