//! gridcast-core
//!
//! Building blocks for scoring a price forecast against what the market
//! actually did.
//!
//! - `timeseries::codec`: round-trip-checked conversion between epoch seconds
//!   and UTC calendar timestamps.
//! - `timeseries::grid`: hourly and five-minute target grids, plus the rounding
//!   helpers used to pick a clean grid start.
//! - `timeseries::align`: nearest-sample alignment of an irregular source
//!   series onto a target grid, within a strict tolerance.
//! - `metrics`: range-normalized squared error between truth and prediction.
//! - `persist`: save/load a flat numeric list as text.
//! - `source`: strict kline (OHLC) decoding and the source traits.
//! - `report`: human-readable timestamp summaries.
//!
//! Everything here is synchronous and pure apart from the file helpers in
//! `persist` and `source`, which perform one whole-file read or write.
#![warn(missing_docs)]

/// Range-normalized forecast error.
pub mod metrics;
/// Flat numeric list persistence.
pub mod persist;
/// Console diagnostics for timestamp sequences.
pub mod report;
/// Positionally paired timestamp/value series.
pub mod series;
/// Source data decoding and the price/prediction source traits.
pub mod source;
/// Timestamp codec, target grids, and alignment.
pub mod timeseries;
pub mod types;

pub use metrics::normalized_error;
pub use persist::{load_list, parse_list, render_list, save_list};
pub use report::{TimestampSummary, describe, pretty_time};
pub use series::Series;
pub use source::{
    Kline, KlineFile, KlineSeries, ListFile, PredictionSource, PriceSource, load_klines,
    parse_klines,
};
pub use timeseries::align::{align, align_within};
pub use timeseries::codec::{to_calendar, to_calendar_all, to_numeric, to_numeric_all};
pub use timeseries::grid::{
    five_minute_grid, grid, hourly_grid, round_start, round_to_five_minutes,
    round_to_nearest_hour,
};
pub use types::*;
