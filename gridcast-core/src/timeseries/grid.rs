use chrono::{DateTime, TimeDelta, Timelike, Utc};

use crate::GridcastError;
use crate::timeseries::codec::to_numeric;
use gridcast_types::{Cadence, GRID_LEN, StartRounding};

/// Build the target grid for `cadence` starting from `start`.
///
/// - `Hourly`: `start + 0h, +1h, ..., +11h`.
/// - `FiveMinute`: `start + 5m, +10m, ..., +60m` (the start instant itself is
///   not a target).
///
/// Every point goes through [`to_numeric`], so the whole grid is round-trip
/// checked. The result is strictly increasing and has `GRID_LEN` entries.
///
/// # Errors
/// - `RoundTrip` if `start` (or any offset from it) does not round-trip, e.g.
///   because it carries sub-microsecond precision.
/// - `InvalidArg` if a grid point falls outside the calendar's range.
pub fn grid(start: DateTime<Utc>, cadence: Cadence) -> Result<Vec<f64>, GridcastError> {
    let step = cadence.step_secs();
    let first = cadence.first_offset();
    (0..GRID_LEN)
        .map(|i| {
            let steps = first + i64::try_from(i).unwrap_or(i64::MAX);
            let at = step
                .checked_mul(steps)
                .and_then(TimeDelta::try_seconds)
                .and_then(|delta| start.checked_add_signed(delta))
                .ok_or_else(|| {
                    GridcastError::invalid_arg(format!(
                        "grid point {i} after {start} is out of range"
                    ))
                })?;
            to_numeric(at)
        })
        .collect()
}

/// Twelve hourly targets starting at `start` itself.
///
/// # Errors
/// See [`grid`].
pub fn hourly_grid(start: DateTime<Utc>) -> Result<Vec<f64>, GridcastError> {
    grid(start, Cadence::Hourly)
}

/// Twelve five-minute targets starting five minutes after `start`.
///
/// # Errors
/// See [`grid`].
pub fn five_minute_grid(start: DateTime<Utc>) -> Result<Vec<f64>, GridcastError> {
    grid(start, Cadence::FiveMinute)
}

fn zero_below_minute(dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
    dt.with_nanosecond(0).and_then(|d| d.with_second(0))
}

/// Round to the nearest whole hour.
///
/// Only the minute component decides: minutes below 30 round down, 30 and above
/// round up. Seconds and sub-seconds are dropped without affecting the
/// decision, so 10:29:59 rounds to 10:00.
///
/// # Errors
/// Returns `InvalidArg` if rounding up would leave the calendar's range.
pub fn round_to_nearest_hour(dt: DateTime<Utc>) -> Result<DateTime<Utc>, GridcastError> {
    let floor = zero_below_minute(dt)
        .and_then(|d| d.with_minute(0))
        .ok_or_else(|| GridcastError::invalid_arg(format!("cannot truncate {dt} to the hour")))?;
    if dt.minute() < 30 {
        return Ok(floor);
    }
    floor
        .checked_add_signed(TimeDelta::hours(1))
        .ok_or_else(|| GridcastError::invalid_arg(format!("cannot round {dt} up to the hour")))
}

/// Floor to the enclosing five-minute boundary, dropping seconds and sub-seconds.
///
/// # Errors
/// Returns `InvalidArg` if the calendar rejects the truncated value.
pub fn round_to_five_minutes(dt: DateTime<Utc>) -> Result<DateTime<Utc>, GridcastError> {
    zero_below_minute(dt)
        .and_then(|d| d.with_minute((dt.minute() / 5) * 5))
        .ok_or_else(|| {
            GridcastError::invalid_arg(format!("cannot truncate {dt} to five minutes"))
        })
}

/// Apply a configured [`StartRounding`] to a grid start.
///
/// # Errors
/// Propagates the error of the selected rounding helper.
pub fn round_start(dt: DateTime<Utc>, mode: StartRounding) -> Result<DateTime<Utc>, GridcastError> {
    match mode {
        StartRounding::NearestHour => round_to_nearest_hour(dt),
        StartRounding::FiveMinute => round_to_five_minutes(dt),
        _ => Ok(dt),
    }
}
