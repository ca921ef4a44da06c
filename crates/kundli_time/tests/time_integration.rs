//! Cross-module checks: calendar, Instant, ΔT and sidereal time together.

use kundli_time::{
    Instant, J2000_JD, JD_1900_NOON_TT, SECONDS_PER_DAY, calendar_to_jd, days_between_years,
    gmst_hours, jd_to_calendar, local_sidereal_time_hours,
};

#[test]
fn instant_jd_matches_calendar() {
    let t = Instant::from_utc(1987, 4, 10, 19, 21, 0.0).unwrap();
    let jd = calendar_to_jd(1987, 4, 10.0 + (19.0 + 21.0 / 60.0) / 24.0);
    assert!((t.jd_utc() - jd).abs() * SECONDS_PER_DAY < 1e-3);
}

#[test]
fn meeus_example_12b_gmst() {
    // Meeus 12.b: 1987-Apr-10 19:21:00 UT, GMST = 8h 34m 57.0896s
    let t = Instant::from_utc(1987, 4, 10, 19, 21, 0.0).unwrap();
    let h = gmst_hours(t.jd_ut1());
    let expected = 8.0 + 34.0 / 60.0 + 57.0896 / 3600.0;
    assert!((h - expected).abs() < 1e-3, "GMST = {h} h, expected {expected}");
}

#[test]
fn lahiri_reference_century() {
    let tt_1900 = Instant::from_utc(1900, 1, 1, 12, 0, 0.0).unwrap();
    // ΔT near 1900 is a few seconds, so JD(TT) lands within a minute of the constant
    assert!((tt_1900.jd_tt() - JD_1900_NOON_TT).abs() < 60.0 / SECONDS_PER_DAY);
    assert!((days_between_years(2000, 2100) - 36_525.0).abs() < 1e-9);
}

#[test]
fn calendar_roundtrip_over_centuries() {
    for &jd in &[2_415_020.5, J2000_JD, 2_469_807.5, 2_305_447.5] {
        let (y, m, d) = jd_to_calendar(jd);
        assert!((calendar_to_jd(y, m, d) - jd).abs() < 1e-9, "jd {jd}");
    }
}

#[test]
fn lst_for_observer() {
    let t = Instant::from_utc(2024, 3, 20, 0, 0, 0.0).unwrap();
    let lst = local_sidereal_time_hours(t.jd_ut1(), 80.27);
    let g = gmst_hours(t.jd_ut1());
    assert!(((lst - g).rem_euclid(24.0) - 80.27 / 15.0).abs() < 1e-9);
}
