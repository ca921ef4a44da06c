//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 7.

/// Julian Date of J2000.0 (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1900-Jan-01 12:00 TT, the Lahiri reference epoch.
pub const JD_1900_NOON_TT: f64 = 2_415_021.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Gregorian calendar date to Julian Date.
///
/// `day` carries the time of day as a fraction (e.g. 1.5 = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Date to Gregorian `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Days between two calendar noons, `from` and `to` given as Jan-01 of each year.
pub fn days_between_years(from_year: i32, to_year: i32) -> f64 {
    calendar_to_jd(to_year, 1, 1.5) - calendar_to_jd(from_year, 1, 1.5)
}

/// Decimal year of a Julian Date, good enough for Delta T lookup.
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_sputnik() {
        // Meeus example 7.a: 1957-Oct-4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn jan_february_shift() {
        // Meeus example 7.b (Gregorian date near a month boundary)
        let jd = calendar_to_jd(1988, 1, 27.0);
        assert!((jd - 2_447_187.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn roundtrip_calendar() {
        let (y, m, d) = jd_to_calendar(2_460_000.25);
        let back = calendar_to_jd(y, m, d);
        assert!((back - 2_460_000.25).abs() < 1e-9);
    }

    #[test]
    fn century_lengths() {
        assert!((days_between_years(1900, 2000) - 36_524.0).abs() < 1e-9);
        assert!((days_between_years(2000, 2100) - 36_525.0).abs() < 1e-9);
    }

    #[test]
    fn lahiri_epoch_constant() {
        assert!((calendar_to_jd(1900, 1, 1.5) - JD_1900_NOON_TT).abs() < 1e-9);
    }
}
