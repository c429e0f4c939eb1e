//! Report envelopes produced by the evaluator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Cadence;

/// One target timestamp with the aligned actual value and the prediction for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    /// Target timestamp.
    pub ts: DateTime<Utc>,
    /// Ground-truth value aligned to `ts`.
    pub actual: f64,
    /// Predicted value for `ts`.
    pub predicted: f64,
    /// `predicted - actual`, in price units.
    pub error: f64,
}

/// Outcome of scoring a prediction against aligned ground truth.
///
/// `targets`, `ground_truth`, `predicted`, and `points` are positionally aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Cadence of the target grid.
    pub cadence: Cadence,
    /// Target grid in epoch seconds.
    pub targets: Vec<f64>,
    /// Source values aligned onto `targets`.
    pub ground_truth: Vec<f64>,
    /// Prediction scored against `ground_truth`.
    pub predicted: Vec<f64>,
    /// Range-normalized squared error; 0 is a perfect match.
    pub score: f64,
    /// Per-point breakdown for display.
    pub points: Vec<ComparisonPoint>,
}
