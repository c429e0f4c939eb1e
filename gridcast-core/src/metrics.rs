use crate::GridcastError;

fn ensure_finite(what: &str, xs: &[f64]) -> Result<(), GridcastError> {
    match xs.iter().position(|x| !x.is_finite()) {
        Some(i) => Err(GridcastError::invalid_arg(format!(
            "{what}[{i}] is not a finite number: {}",
            xs[i]
        ))),
        None => Ok(()),
    }
}

/// Normalized squared error of `predicted` against `ground_truth`.
///
/// Both series are rescaled with the affine map that sends the ground truth's
/// minimum to 0 and its maximum to 1. The prediction is not rescaled on its
/// own, so a biased predictor stays biased after normalization.
///
/// With `g'` and `p'` the rescaled series, the score is
/// `sum((g' - p')^2) / sum(g'^2)`: 0 for a perfect match, dimensionless, and
/// not bounded above.
///
/// ```
/// use gridcast_core::normalized_error;
///
/// let truth = [100.0, 110.0, 90.0];
/// assert_eq!(normalized_error(&truth, &truth).unwrap(), 0.0);
///
/// let flat = [100.0, 100.0, 100.0];
/// let score = normalized_error(&truth, &flat).unwrap();
/// assert!((score - 0.4).abs() < 1e-12);
/// ```
///
/// # Errors
/// - `LengthMismatch` if the series are empty or differ in length.
/// - `InvalidArg` if either series contains NaN or an infinity.
/// - `DegenerateSeries` if the ground truth is constant (zero range), or the
///   normalization otherwise fails to produce a finite score.
pub fn normalized_error(ground_truth: &[f64], predicted: &[f64]) -> Result<f64, GridcastError> {
    if ground_truth.len() != predicted.len() {
        return Err(GridcastError::length_mismatch(
            "ground truth vs prediction",
            ground_truth.len(),
            predicted.len(),
        ));
    }
    if ground_truth.is_empty() {
        return Err(GridcastError::length_mismatch(
            "ground truth vs prediction (need at least one point)",
            1,
            0,
        ));
    }
    ensure_finite("ground truth", ground_truth)?;
    ensure_finite("prediction", predicted)?;

    let (min_g, max_g) = ground_truth
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &g| {
            (lo.min(g), hi.max(g))
        });
    let range_g = max_g - min_g;
    if range_g == 0.0 {
        #[cfg(feature = "tracing")]
        tracing::warn!(value = min_g, "constant ground truth cannot be normalized");
        return Err(GridcastError::DegenerateSeries(format!(
            "ground truth is constant at {min_g}"
        )));
    }

    let mut residual = 0.0;
    let mut energy = 0.0;
    for (&g, &p) in ground_truth.iter().zip(predicted) {
        let g01 = (g - min_g) / range_g;
        let p01 = (p - min_g) / range_g;
        residual += (g01 - p01).powi(2);
        energy += g01.powi(2);
    }
    if energy == 0.0 {
        return Err(GridcastError::DegenerateSeries(
            "normalized ground truth is all zero".into(),
        ));
    }

    let score = residual / energy;
    if !score.is_finite() {
        return Err(GridcastError::DegenerateSeries(format!(
            "normalization over range {range_g} produced a non-finite score"
        )));
    }
    Ok(score)
}
