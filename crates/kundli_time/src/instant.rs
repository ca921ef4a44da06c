//! `Instant`, the UTC moment every chart computation is keyed on.
//!
//! UT1 is taken equal to UTC (|UT1 − UTC| < 0.9 s), and TT is derived
//! through [`crate::delta_t`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::TimeError;
use crate::delta_t::delta_t_seconds;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// A moment on the UTC time line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Build from UTC calendar fields. `second` may carry a fraction.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!("second {second} not in [0, 60)")));
        }
        let whole = second.floor();
        let nanos = ((second - whole) * 1e9).round() as u32;
        let dt = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, whole as u32)
            .single()
            .ok_or_else(|| {
                TimeError::InvalidDate(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second}"
                ))
            })?;
        let dt = dt + chrono::Duration::nanoseconds(i64::from(nanos));
        Ok(Self(dt))
    }

    /// Wrap an existing chrono timestamp.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Current system time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse RFC 3339 (`1990-01-01T06:30:00+05:30`), a naive
    /// `YYYY-MM-DDTHH:MM:SS` taken as UTC, or a bare `YYYY-MM-DD` at midnight UTC.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => {
                let naive = date.and_hms_opt(0, 0, 0).ok_or_else(|| parse_error(s, "midnight"))?;
                Ok(Self(Utc.from_utc_datetime(&naive)))
            }
            Err(e) => Err(parse_error(s, &e.to_string())),
        }
    }

    /// Build from a UTC Julian Date.
    pub fn from_jd_utc(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::OutOfRange { jd });
        }
        let total = (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
        let secs = total.floor();
        let nanos = ((total - secs) * 1e9).round().min(999_999_999.0) as u32;
        if secs.abs() > i64::MAX as f64 {
            return Err(TimeError::OutOfRange { jd });
        }
        DateTime::from_timestamp(secs as i64, nanos)
            .map(Self)
            .ok_or(TimeError::OutOfRange { jd })
    }

    /// Underlying chrono timestamp.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Julian Date on the UTC axis.
    pub fn jd_utc(&self) -> f64 {
        let secs = self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) * 1e-9;
        UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
    }

    /// Julian Date on the UT1 axis (UT1 ≈ UTC).
    pub fn jd_ut1(&self) -> f64 {
        self.jd_utc()
    }

    /// Julian Date on the TT axis.
    pub fn jd_tt(&self) -> f64 {
        let ut = self.jd_ut1();
        ut + delta_t_seconds(ut) / SECONDS_PER_DAY
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(&self, days: f64) -> Result<Self, TimeError> {
        Self::from_jd_utc(self.jd_utc() + days)
    }

    /// Shift by an exact number of 86 400 s days.
    pub fn add_whole_days(&self, days: i64) -> Result<Self, TimeError> {
        chrono::Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Self)
            .ok_or(TimeError::OutOfRange {
                jd: self.jd_utc() + days as f64,
            })
    }

    /// Signed days from `earlier` to `self`.
    pub fn days_since(&self, earlier: &Instant) -> f64 {
        let d = self.0 - earlier.0;
        match d.num_nanoseconds() {
            Some(ns) => ns as f64 / (SECONDS_PER_DAY * 1e9),
            None => d.num_seconds() as f64 / SECONDS_PER_DAY,
        }
    }

    /// Whole elapsed days from `earlier` to `self`, floored (−0.5 days gives −1).
    pub fn whole_days_since(&self, earlier: &Instant) -> i64 {
        let elapsed = self.0 - earlier.0;
        let days = elapsed.num_days();
        if elapsed < chrono::Duration::days(days) {
            days - 1
        } else {
            days
        }
    }
}

fn parse_error(input: &str, reason: &str) -> TimeError {
    TimeError::Parse {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
