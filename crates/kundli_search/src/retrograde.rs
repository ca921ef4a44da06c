//! Retrograde detection by coarse scan and bisection.
//!
//! The instantaneous test is `lon(t) < lon(t − lag)` with the difference
//! taken on the circle, so a body crossing 0° Aries is not mistaken for a
//! retrograde one. Direction changes are the sign changes of
//!
//! ```text
//! f(t) = wrap(lon(t) − lon(t − lag))
//! ```
//!
//! found by a fixed-step scan and refined by bisection. The crossings
//! partition a window into alternating direct/retrograde intervals, and
//! membership in those intervals answers "is the body retrograde at X".
//! Because intervals and samples share one signal, the two answers agree
//! everywhere except at the crossing instants themselves.

use kundli_ephem::{Body, EphemerisError, EphemerisProvider, GeoLocation};
use kundli_time::Instant;
use kundli_vedic::{Planet, signed_delta};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::retrograde_types::{
    DirectionChange, Motion, MotionInterval, RetrogradeConfig, RetrogradeInterval,
};

/// Keeps window edges clear of the provider's range limits after JD rounding.
const EDGE_MARGIN_DAYS: f64 = 1e-5;

fn longitude_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    location: &GeoLocation,
    jd_utc: f64,
) -> Result<f64, SearchError> {
    let instant = Instant::from_jd_utc(jd_utc)?;
    Ok(provider
        .apparent_ecliptic_position(body, location, &instant)?
        .longitude_deg)
}

/// Wrapped longitude change over the trailing `lag` days. Negative means retrograde.
fn motion_signal<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    location: &GeoLocation,
    jd_utc: f64,
    lag: f64,
) -> Result<f64, SearchError> {
    let now = longitude_at(provider, body, location, jd_utc)?;
    let before = longitude_at(provider, body, location, jd_utc - lag)?;
    Ok(signed_delta(now, before))
}

/// Bisect to the sign change of `f_at` between `t_a` and `t_b`.
///
/// The sign convention is "negative or not", matching the retrograde test,
/// so an exact zero sample is classified as direct.
fn bisect_crossing<F>(
    mut t_a: f64,
    f_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &F,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    let negative_a = f_a < 0.0;
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid)?;

        if (f_mid < 0.0) == negative_a {
            t_a = t_mid;
        } else {
            t_b = t_mid;
        }

        if (t_b - t_a).abs() < convergence_days {
            break;
        }
    }

    Ok(0.5 * (t_a + t_b))
}

fn searchable_body(planet: Planet) -> Result<Body, SearchError> {
    planet.body().ok_or(SearchError::NotSearchable(planet.name()))
}

fn validate(config: &RetrogradeConfig) -> Result<(), SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)
}

/// Direct sample: is `lon(t) < lon(t − lag)` at `instant`?
///
/// Sun, Moon and the ascendant are never retrograde; the nodes follow
/// `config.node_policy`. None of those touch the provider.
pub fn is_retrograde_sample<P: EphemerisProvider + ?Sized>(
    provider: &P,
    planet: Planet,
    location: &GeoLocation,
    instant: &Instant,
    config: &RetrogradeConfig,
) -> Result<bool, SearchError> {
    validate(config)?;
    if let Some(fixed) = planet.fixed_retrograde(config.node_policy) {
        return Ok(fixed);
    }
    let body = searchable_body(planet)?;
    let f = motion_signal(provider, body, location, instant.jd_utc(), config.sample_lag_days)?;
    Ok(f < 0.0)
}

/// All direction changes of `body` in `[jd_start, jd_end]` (Julian Dates, UTC).
pub fn direction_changes<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    location: &GeoLocation,
    jd_start: f64,
    jd_end: f64,
    config: &RetrogradeConfig,
) -> Result<Vec<DirectionChange>, SearchError> {
    validate(config)?;
    if jd_start.is_nan() || jd_end.is_nan() || jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let lag = config.sample_lag_days;
    let signal = |t: f64| motion_signal(provider, body, location, t, lag);

    let mut changes = Vec::new();
    let mut t_prev = jd_start;
    let mut v_prev = signal(t_prev)?;

    loop {
        let t_curr = (t_prev + config.step_days).min(jd_end);
        let v_curr = signal(t_curr)?;

        if (v_prev < 0.0) != (v_curr < 0.0) {
            let t_cross = bisect_crossing(
                t_prev,
                v_prev,
                t_curr,
                config.max_iterations,
                config.convergence_days,
                &signal,
            )?;
            let motion_after = Motion::from_retrograde(v_curr < 0.0);
            trace!(body = body.name(), jd = t_cross, motion = motion_after.name(), "direction change");
            changes.push(DirectionChange {
                jd_utc: t_cross,
                motion_after,
            });
        }

        if t_curr >= jd_end {
            break;
        }

        t_prev = t_curr;
        v_prev = v_curr;
    }

    Ok(changes)
}

/// Partition `[start, end]` into alternating direct/retrograde intervals.
///
/// Adjacent intervals share their boundary instant.
pub fn motion_intervals<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    location: &GeoLocation,
    start: &Instant,
    end: &Instant,
    config: &RetrogradeConfig,
) -> Result<Vec<MotionInterval>, SearchError> {
    let jd_start = start.jd_utc();
    let changes = direction_changes(provider, body, location, jd_start, end.jd_utc(), config)?;

    let initial = motion_signal(provider, body, location, jd_start, config.sample_lag_days)?;
    let mut motion = Motion::from_retrograde(initial < 0.0);
    let mut from = *start;
    let mut intervals = Vec::with_capacity(changes.len() + 1);

    for change in &changes {
        let at = Instant::from_jd_utc(change.jd_utc)?.clamp(*start, *end);
        intervals.push(MotionInterval {
            start: from,
            end: at,
            motion,
        });
        from = at;
        motion = change.motion_after;
    }
    intervals.push(MotionInterval {
        start: from,
        end: *end,
        motion,
    });
    Ok(intervals)
}

/// Retrograde periods of `planet` in `[start, end]`.
///
/// A period already running at `start` or still running at `end` is cut at
/// the window edge.
#[tracing::instrument(level = "debug", skip_all, fields(planet = planet.name()))]
pub fn retrograde_periods<P: EphemerisProvider + ?Sized>(
    provider: &P,
    planet: Planet,
    location: &GeoLocation,
    start: &Instant,
    end: &Instant,
    config: &RetrogradeConfig,
) -> Result<Vec<RetrogradeInterval>, SearchError> {
    validate(config)?;
    if end <= start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }
    match planet.fixed_retrograde(config.node_policy) {
        Some(false) => return Ok(Vec::new()),
        Some(true) => {
            return Ok(vec![RetrogradeInterval {
                planet,
                start: *start,
                end: *end,
            }]);
        }
        None => {}
    }

    let body = searchable_body(planet)?;
    let periods: Vec<RetrogradeInterval> =
        motion_intervals(provider, body, location, start, end, config)?
            .into_iter()
            .filter(|iv| iv.motion.is_retrograde() && iv.end > iv.start)
            .map(|iv| RetrogradeInterval {
                planet,
                start: iv.start,
                end: iv.end,
            })
            .collect();
    debug!(count = periods.len(), "retrograde periods");
    Ok(periods)
}

/// Is `planet` retrograde at `instant`, judged by interval membership.
///
/// Searches `instant ± config.window_days`, clamped to the provider's
/// supported range, and reports the motion of the first interval that
/// contains `instant`.
#[tracing::instrument(level = "debug", skip_all, fields(planet = planet.name(), %instant))]
pub fn is_retrograde_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    planet: Planet,
    location: &GeoLocation,
    instant: &Instant,
    config: &RetrogradeConfig,
) -> Result<bool, SearchError> {
    validate(config)?;
    if let Some(fixed) = planet.fixed_retrograde(config.node_policy) {
        return Ok(fixed);
    }
    let body = searchable_body(planet)?;

    let lag = config.sample_lag_days;
    let (min, max) = provider.supported_range();
    let jd = instant.jd_utc();
    if jd - lag < min || jd > max {
        return Err(EphemerisError::OutOfRange {
            jd: if jd > max { jd } else { jd - lag },
            min,
            max,
        }
        .into());
    }

    let jd_start = (jd - config.window_days).max(min + lag + EDGE_MARGIN_DAYS);
    let jd_end = (jd + config.window_days).min(max - EDGE_MARGIN_DAYS);
    if jd_end <= jd_start {
        return is_retrograde_sample(provider, planet, location, instant, config);
    }

    let start = Instant::from_jd_utc(jd_start)?.min(*instant);
    let end = Instant::from_jd_utc(jd_end)?.max(*instant);
    let intervals = motion_intervals(provider, body, location, &start, &end, config)?;
    match intervals.iter().find(|iv| iv.contains(instant)) {
        Some(iv) => Ok(iv.motion.is_retrograde()),
        None => is_retrograde_sample(provider, planet, location, instant, config),
    }
}
