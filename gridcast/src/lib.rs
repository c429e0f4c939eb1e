//! Gridcast scores price forecasts against what the market actually did.
//!
//! Overview
//! - Builds a target grid (twelve hourly points, or twelve five-minute points)
//!   from a start instant, optionally rounding the start first.
//! - Aligns an irregular source price series onto that grid by nearest sample,
//!   failing loudly when a target has no sample within tolerance.
//! - Scores a prediction with a range-normalized squared error, where the
//!   prediction shares the ground truth's normalization.
//!
//! Key behaviors and trade-offs
//! - Timestamps are UTC only and every conversion is round-trip checked; an
//!   input that would silently drift is rejected instead.
//! - Missing data is never interpolated. A gap fails the whole evaluation,
//!   since a filled-in point would distort the score.
//! - Constant ground truth cannot be normalized and is reported as
//!   `DegenerateSeries` rather than as NaN.
//!
//! Examples
//! Scoring a persisted prediction against a vendor kline file:
//! ```rust,no_run
//! use chrono::{TimeZone, Utc};
//! use gridcast::{Cadence, Evaluator, KlineFile, ListFile};
//!
//! let evaluator = Evaluator::builder().cadence(Cadence::Hourly).build()?;
//! let start = Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap();
//! let report = evaluator.evaluate(
//!     start,
//!     &KlineFile::new("ETHUSDT-1h.json"),
//!     &ListFile::new("predictions.txt"),
//! )?;
//! println!("nmse = {:.4}", report.score);
//! # Ok::<(), gridcast::GridcastError>(())
//! ```
//!
//! See `demos/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use crate::core::{Evaluator, EvaluatorBuilder};

// Re-export core types for convenience
pub use gridcast_core::{
    Cadence, ComparisonPoint, DEFAULT_TOLERANCE_SECS, EvalConfig, EvalReport, GRID_LEN,
    GridcastError, Kline, KlineFile, KlineSeries, ListFile, PredictionSource, PriceSource,
    Series, StartRounding, TimestampSummary, align, align_within, describe, five_minute_grid,
    grid, hourly_grid, load_klines, load_list, normalized_error, parse_klines, pretty_time,
    round_to_five_minutes, round_to_nearest_hour, save_list, to_calendar, to_numeric,
};
