//! Distance-to-time conversion.
//!
//! Arrival times are computed from exact fractional hours; the rounded hour
//! and day figures are presentation helpers only.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};

/// Fixed average vessel speed used for every estimate, in knots.
pub const AVERAGE_SPEED_KNOTS: f64 = 18.0;

const SECONDS_PER_HOUR: f64 = 3600.0;
const NANOS_PER_SECOND: f64 = 1e9;

/// Exact travel time in hours for `distance_nm` at `speed_knots`.
pub fn travel_hours(distance_nm: f64, speed_knots: f64) -> f64 {
    distance_nm / speed_knots
}

/// Travel time for `distance_nm` at `speed_knots`, at nanosecond precision.
pub fn travel_duration(distance_nm: f64, speed_knots: f64) -> Result<Duration> {
    if !distance_nm.is_finite() || distance_nm < 0.0 {
        return Err(Error::InvalidEstimate {
            message: format!("distance must be finite and non-negative, got {distance_nm}"),
        });
    }
    if !speed_knots.is_finite() || speed_knots <= 0.0 {
        return Err(Error::InvalidEstimate {
            message: format!("speed must be finite and positive, got {speed_knots}"),
        });
    }

    // Scale to seconds before dividing so whole-second results stay exact.
    let seconds = distance_nm * SECONDS_PER_HOUR / speed_knots;
    let whole = seconds.trunc();
    if whole >= i64::MAX as f64 {
        return Err(Error::TimestampOverflow);
    }
    let nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as i64;
    Duration::try_seconds(whole as i64)
        .and_then(|secs| secs.checked_add(&Duration::nanoseconds(nanos)))
        .ok_or(Error::TimestampOverflow)
}

/// Arrival timestamp for a voyage of `distance_nm` starting at `start`.
pub fn estimate_arrival(
    distance_nm: f64,
    start: DateTime<Utc>,
    speed_knots: f64,
) -> Result<DateTime<Utc>> {
    let duration = travel_duration(distance_nm, speed_knots)?;
    start
        .checked_add_signed(duration)
        .ok_or(Error::TimestampOverflow)
}

/// Hours rounded to the nearest whole hour.
pub fn whole_hours(hours: f64) -> f64 {
    hours.round()
}

/// Hours expressed as days, rounded to one decimal place.
pub fn hours_to_days(hours: f64) -> f64 {
    (hours / 24.0 * 10.0).round() / 10.0
}
