use chrono::{DateTime, Utc};

use gridcast_core::source::{PredictionSource, PriceSource};
use gridcast_core::timeseries::codec::to_calendar;
use gridcast_core::timeseries::grid::{grid, round_start};
use gridcast_core::{Series, normalized_error};
use gridcast_types::{Cadence, ComparisonPoint, EvalConfig, EvalReport, GridcastError, StartRounding};

/// Scores predictions against a price source on a configured target grid.
#[derive(Debug, Clone)]
pub struct Evaluator {
    pub(crate) cfg: EvalConfig,
}

/// Builder for constructing an `Evaluator` with custom configuration.
#[derive(Debug, Clone)]
pub struct EvaluatorBuilder {
    cfg: EvalConfig,
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluatorBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: hourly grid, 1 second tolerance, start used as given.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: EvalConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one loaded from JSON.
    #[must_use]
    pub const fn config(mut self, cfg: EvalConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the target grid cadence.
    ///
    /// - `Hourly`: twelve points, the first at the start instant.
    /// - `FiveMinute`: twelve points, the first five minutes after the start.
    #[must_use]
    pub const fn cadence(mut self, cadence: Cadence) -> Self {
        self.cfg.cadence = cadence;
        self
    }

    /// Set the alignment tolerance in seconds.
    ///
    /// A wider tolerance accepts sparser source data but lets a sample stand in
    /// for a target it was not taken at.
    #[must_use]
    pub const fn tolerance(mut self, secs: f64) -> Self {
        self.cfg.tolerance_secs = secs;
        self
    }

    /// Choose how the start instant is rounded before building the grid.
    #[must_use]
    pub const fn start_rounding(mut self, mode: StartRounding) -> Self {
        self.cfg.start_rounding = mode;
        self
    }

    /// Build the `Evaluator`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the tolerance is negative or not finite.
    pub fn build(self) -> Result<Evaluator, GridcastError> {
        let tol = self.cfg.tolerance_secs;
        if !tol.is_finite() || tol < 0.0 {
            return Err(GridcastError::invalid_arg(format!(
                "tolerance must be a finite, non-negative number of seconds, got {tol}"
            )));
        }
        Ok(Evaluator { cfg: self.cfg })
    }
}

impl Evaluator {
    /// Start building a new `Evaluator`.
    ///
    /// ```rust
    /// use gridcast::{Cadence, Evaluator, StartRounding};
    ///
    /// let evaluator = Evaluator::builder()
    ///     .cadence(Cadence::FiveMinute)
    ///     .start_rounding(StartRounding::FiveMinute)
    ///     .tolerance(1.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(evaluator.config().cadence, Cadence::FiveMinute);
    /// ```
    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.cfg
    }

    /// Target grid for `start` after applying the configured rounding.
    ///
    /// # Errors
    /// Propagates rounding and codec errors from the grid helpers.
    pub fn targets(&self, start: DateTime<Utc>) -> Result<Vec<f64>, GridcastError> {
        let start = round_start(start, self.cfg.start_rounding)?;
        grid(start, self.cfg.cadence)
    }

    /// Align `source` onto the grid for `start` and score `predictions` against it.
    ///
    /// # Errors
    /// - Any error from the sources themselves (`Io`, `Parse`).
    /// - `AlignmentGap` if the source lacks a sample near some target.
    /// - `LengthMismatch` if the prediction count differs from the grid size.
    /// - `DegenerateSeries` if the aligned ground truth is constant.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "gridcast::evaluate",
            skip_all,
            fields(
                source = source.name(),
                cadence = ?self.cfg.cadence,
                start = %start,
            ),
        )
    )]
    pub fn evaluate(
        &self,
        start: DateTime<Utc>,
        source: &dyn PriceSource,
        predictions: &dyn PredictionSource,
    ) -> Result<EvalReport, GridcastError> {
        let series = source.close_series()?;
        let predicted = predictions.predictions()?;
        self.evaluate_series(start, &series, predicted)
    }

    /// Same as [`evaluate`](Self::evaluate) for data already in memory.
    ///
    /// # Errors
    /// See [`evaluate`](Self::evaluate).
    pub fn evaluate_series(
        &self,
        start: DateTime<Utc>,
        series: &Series,
        predicted: Vec<f64>,
    ) -> Result<EvalReport, GridcastError> {
        let targets = self.targets(start)?;
        if predicted.len() != targets.len() {
            return Err(GridcastError::length_mismatch(
                "prediction vs target grid",
                targets.len(),
                predicted.len(),
            ));
        }
        let ground_truth = series.align_onto(&targets, self.cfg.tolerance_secs)?;
        let score = normalized_error(&ground_truth, &predicted)?;

        let points = targets
            .iter()
            .zip(ground_truth.iter().zip(&predicted))
            .map(|(&ut, (&actual, &guess))| {
                Ok(ComparisonPoint {
                    ts: to_calendar(ut)?,
                    actual,
                    predicted: guess,
                    error: guess - actual,
                })
            })
            .collect::<Result<Vec<_>, GridcastError>>()?;

        #[cfg(feature = "tracing")]
        tracing::info!(score, points = points.len(), "scored prediction");

        Ok(EvalReport {
            cadence: self.cfg.cadence,
            targets,
            ground_truth,
            predicted,
            score,
            points,
        })
    }
}
