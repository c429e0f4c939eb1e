use chrono::{DateTime, Utc};
use core::fmt::Display;

use crate::GridcastError;

const MICROS_PER_SEC: f64 = 1_000_000.0;

/// Run `forward`, then `back`, and insist that `back` reproduces the input.
///
/// Shared by both codec directions so every conversion gets the same check.
fn round_trip_checked<A, B, F, G>(input: A, forward: F, back: G) -> Result<B, GridcastError>
where
    A: Copy + PartialEq + Display,
    F: FnOnce(A) -> Option<B>,
    G: FnOnce(&B) -> Option<A>,
{
    let out = forward(input).ok_or_else(|| GridcastError::round_trip(input, "out of range"))?;
    match back(&out) {
        Some(again) if again == input => Ok(out),
        Some(again) => Err(GridcastError::round_trip(input, again)),
        None => Err(GridcastError::round_trip(input, "out of range")),
    }
}

#[allow(clippy::cast_precision_loss)]
fn encode(dt: DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / MICROS_PER_SEC
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn decode(ut: f64) -> Option<DateTime<Utc>> {
    if !ut.is_finite() {
        return None;
    }
    let secs = ut.floor();
    if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
        return None;
    }
    let mut secs = secs as i64;
    let mut micros = ((ut - ut.floor()) * MICROS_PER_SEC).round() as u32;
    if micros >= 1_000_000 {
        secs = secs.checked_add(1)?;
        micros -= 1_000_000;
    }
    DateTime::from_timestamp(secs, micros * 1_000)
}

/// Convert a UTC calendar timestamp to epoch seconds.
///
/// Calendar values carry microsecond resolution at most; anything finer cannot
/// survive the trip through `f64` seconds and is rejected.
///
/// # Errors
/// Returns `GridcastError::RoundTrip` if converting the result back with
/// [`to_calendar`] does not reproduce `dt` exactly.
pub fn to_numeric(dt: DateTime<Utc>) -> Result<f64, GridcastError> {
    round_trip_checked(dt, |d| Some(encode(d)), |u| decode(*u))
}

/// Convert epoch seconds to a UTC calendar timestamp.
///
/// # Errors
/// Returns `GridcastError::RoundTrip` if `ut` is not finite, is outside the
/// calendar's range, or does not land exactly on a representable microsecond.
pub fn to_calendar(ut: f64) -> Result<DateTime<Utc>, GridcastError> {
    round_trip_checked(ut, decode, |d| Some(encode(*d)))
}

/// Apply [`to_numeric`] to every element, preserving order.
///
/// # Errors
/// Fails with the first element that does not round-trip.
pub fn to_numeric_all(dts: &[DateTime<Utc>]) -> Result<Vec<f64>, GridcastError> {
    dts.iter().copied().map(to_numeric).collect()
}

/// Apply [`to_calendar`] to every element, preserving order.
///
/// # Errors
/// Fails with the first element that does not round-trip.
pub fn to_calendar_all(uts: &[f64]) -> Result<Vec<DateTime<Utc>>, GridcastError> {
    uts.iter().copied().map(to_calendar).collect()
}
