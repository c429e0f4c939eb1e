//! Deterministic fixtures and mock sources for gridcast tests and demos.

use gridcast_core::{GridcastError, PredictionSource, PriceSource, Series};

pub mod fixtures;

/// Mock price source serving a fixed series, or failing on demand.
#[derive(Debug, Clone)]
pub struct MockSource {
    series: Option<Series>,
}

impl MockSource {
    #[must_use]
    pub const fn new(series: Series) -> Self {
        Self {
            series: Some(series),
        }
    }

    /// A source whose every read fails with an `Io` error.
    #[must_use]
    pub const fn failing() -> Self {
        Self { series: None }
    }
}

impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        "gridcast-mock"
    }

    fn close_series(&self) -> Result<Series, GridcastError> {
        self.series
            .clone()
            .ok_or_else(|| GridcastError::io("gridcast-mock", "forced failure: close series"))
    }
}

/// Mock prediction source serving fixed values, or failing on demand.
#[derive(Debug, Clone)]
pub struct MockPredictions {
    values: Option<Vec<f64>>,
}

impl MockPredictions {
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// A source whose every read fails with a `Parse` error.
    #[must_use]
    pub const fn failing() -> Self {
        Self { values: None }
    }
}

impl PredictionSource for MockPredictions {
    fn predictions(&self) -> Result<Vec<f64>, GridcastError> {
        self.values
            .clone()
            .ok_or_else(|| GridcastError::parse("forced failure: predictions"))
    }
}
