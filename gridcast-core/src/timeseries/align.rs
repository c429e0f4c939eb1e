use crate::GridcastError;
use crate::report::pretty_time;
use crate::timeseries::codec::to_calendar;
use gridcast_types::DEFAULT_TOLERANCE_SECS;

/// Index and distance of the source sample closest to `target`.
///
/// Ties go to the lowest index. NaN timestamps never match.
fn nearest(source_ts: &[f64], target: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &ts) in source_ts.iter().enumerate() {
        let diff = (ts - target).abs();
        if diff.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, d)| diff < d) {
            best = Some((j, diff));
        }
    }
    best
}

/// Pick the source value nearest to each target, within the default 1 second tolerance.
///
/// # Errors
/// See [`align_within`].
pub fn align(
    targets: &[f64],
    source_ts: &[f64],
    source_vals: &[f64],
) -> Result<Vec<f64>, GridcastError> {
    align_within(targets, source_ts, source_vals, DEFAULT_TOLERANCE_SECS)
}

/// Pick the source value nearest to each target timestamp.
///
/// `source_ts` and `source_vals` are positionally paired and need not be
/// sorted. For every target the source sample with the smallest absolute time
/// difference wins; equal distances resolve to the earliest sample in source
/// order. A sample exactly `tolerance_secs` away still matches.
///
/// The output has one value per target, in target order.
///
/// # Errors
/// - `InvalidArg` if `tolerance_secs` is negative or not finite.
/// - `LengthMismatch` if `source_ts` and `source_vals` differ in length.
/// - `RoundTrip` if a target is not a representable timestamp.
/// - `AlignmentGap` naming the first target with no sample within tolerance.
///   Missing points are never interpolated or filled.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "gridcast_core::align",
        skip_all,
        fields(
            targets = targets.len(),
            sources = source_ts.len(),
            tolerance_secs = tolerance_secs,
        ),
    )
)]
pub fn align_within(
    targets: &[f64],
    source_ts: &[f64],
    source_vals: &[f64],
    tolerance_secs: f64,
) -> Result<Vec<f64>, GridcastError> {
    if !tolerance_secs.is_finite() || tolerance_secs < 0.0 {
        return Err(GridcastError::invalid_arg(format!(
            "tolerance must be a finite, non-negative number of seconds, got {tolerance_secs}"
        )));
    }
    if source_ts.len() != source_vals.len() {
        return Err(GridcastError::length_mismatch(
            "source timestamps vs source values",
            source_ts.len(),
            source_vals.len(),
        ));
    }

    targets
        .iter()
        .map(|&target| {
            let target_dt = to_calendar(target)?;
            match nearest(source_ts, target) {
                Some((j, diff)) if diff <= tolerance_secs => Ok(source_vals[j]),
                other => {
                    let nearest_secs = other.map(|(_, d)| d);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target_ts = %target_dt,
                        nearest_secs = ?nearest_secs,
                        "no source sample within tolerance"
                    );
                    Err(GridcastError::AlignmentGap {
                        target: pretty_time(target_dt),
                        nearest_secs,
                    })
                }
            }
        })
        .collect()
}
