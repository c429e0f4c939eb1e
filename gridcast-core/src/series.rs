use serde::Serialize;

use crate::GridcastError;
use crate::timeseries::align::align_within;

/// An ordered series of `(timestamp, value)` samples held as two paired columns.
///
/// Timestamps are epoch seconds. The columns always have equal length; the
/// series cannot be mutated once built, and every transformation returns a new
/// vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    timestamps: Vec<f64>,
    values: Vec<f64>,
}

impl Series {
    /// Pair two columns into a series.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the columns differ in length.
    pub fn new(timestamps: Vec<f64>, values: Vec<f64>) -> Result<Self, GridcastError> {
        if timestamps.len() != values.len() {
            return Err(GridcastError::length_mismatch(
                "series timestamps vs values",
                timestamps.len(),
                values.len(),
            ));
        }
        Ok(Self { timestamps, values })
    }

    /// Build a series from `(timestamp, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (timestamps, values) = pairs.into_iter().unzip();
        Self { timestamps, values }
    }

    /// Timestamp column.
    #[must_use]
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Value column.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Split back into `(timestamps, values)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.timestamps, self.values)
    }

    /// Values of this series nearest to each target, within `tolerance_secs`.
    ///
    /// # Errors
    /// See [`align_within`].
    pub fn align_onto(&self, targets: &[f64], tolerance_secs: f64) -> Result<Vec<f64>, GridcastError> {
        align_within(targets, &self.timestamps, &self.values, tolerance_secs)
    }
}
