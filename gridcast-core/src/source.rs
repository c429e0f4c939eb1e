//! Source data at the edge of the core: vendor kline files and prediction lists.
//!
//! Kline files are the vendor's JSON dump of OHLC candles, one record per
//! candle: `[open_time_ms, open, high, low, close, ...]`. Prices are usually
//! quoted strings (`"1650.52"`), sometimes bare numbers. Trailing fields such
//! as volume and close time are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::GridcastError;
use crate::persist::load_list;
use crate::series::Series;

/// A price series provider feeding the aligner.
pub trait PriceSource {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Close prices keyed by epoch seconds.
    ///
    /// # Errors
    /// Implementations return `Io`/`Parse` for unreadable input.
    fn close_series(&self) -> Result<Series, GridcastError>;
}

/// A provider of predicted values, positionally aligned to a target grid.
pub trait PredictionSource {
    /// The predicted values.
    ///
    /// # Errors
    /// Implementations return `Io`/`Parse` for unreadable input.
    fn predictions(&self) -> Result<Vec<f64>, GridcastError>;
}

impl PriceSource for Series {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn close_series(&self) -> Result<Series, GridcastError> {
        Ok(self.clone())
    }
}

impl PredictionSource for Vec<f64> {
    fn predictions(&self) -> Result<Vec<f64>, GridcastError> {
        Ok(self.clone())
    }
}

/// One decoded OHLC candle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kline {
    /// Candle open time, milliseconds since the UTC epoch.
    pub open_time_ms: i64,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
}

/// Candles in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KlineSeries {
    /// Decoded candles.
    pub klines: Vec<Kline>,
}

impl KlineSeries {
    /// Close prices keyed by open time in epoch seconds (`open_time_ms / 1000`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn close_series(&self) -> Series {
        Series::from_pairs(
            self.klines
                .iter()
                .map(|k| (k.open_time_ms as f64 / 1000.0, k.close)),
        )
    }
}

// 2^53: beyond this f64 no longer holds every integer
const MAX_EXACT_MS: f64 = 9_007_199_254_740_992.0;

/// A scalar field as it appears on the wire: number or numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Field {
    Number(f64),
    Text(String),
}

impl Field {
    fn to_f64(&self, row: usize, col: usize) -> Result<f64, GridcastError> {
        let v = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                GridcastError::parse(format!("record {row} field {col}: {s:?} is not a number"))
            })?,
        };
        if !v.is_finite() {
            return Err(GridcastError::parse(format!(
                "record {row} field {col}: {v} is not a finite number"
            )));
        }
        Ok(v)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn open_time_ms(field: &Field, row: usize) -> Result<i64, GridcastError> {
    let v = field.to_f64(row, 0)?;
    if v.fract() != 0.0 || v.abs() > MAX_EXACT_MS {
        return Err(GridcastError::parse(format!(
            "record {row}: open time {v} is not a whole number of milliseconds"
        )));
    }
    Ok(v as i64)
}

/// Decode kline JSON text.
///
/// # Errors
/// Returns `Parse` unless the text is an array of records where each record is
/// an array of at least five numbers or numeric strings, with a whole-number
/// millisecond open time first. Nested structures, nulls, and non-finite
/// prices are all rejected.
pub fn parse_klines(text: &str) -> Result<KlineSeries, GridcastError> {
    let rows: Vec<Vec<Field>> = serde_json::from_str(text.trim())
        .map_err(|e| GridcastError::parse(format!("expected a list of kline records: {e}")))?;
    let klines = rows
        .iter()
        .enumerate()
        .map(|(row, fields)| {
            let [t, o, h, l, c, ..] = fields.as_slice() else {
                return Err(GridcastError::parse(format!(
                    "record {row} has {} fields, need at least 5",
                    fields.len()
                )));
            };
            Ok(Kline {
                open_time_ms: open_time_ms(t, row)?,
                open: o.to_f64(row, 1)?,
                high: h.to_f64(row, 2)?,
                low: l.to_f64(row, 3)?,
                close: c.to_f64(row, 4)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(KlineSeries { klines })
}

/// Read and decode a kline file.
///
/// # Errors
/// - `Io` if the file cannot be read.
/// - `Parse` as for [`parse_klines`].
pub fn load_klines(path: impl AsRef<Path>) -> Result<KlineSeries, GridcastError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| GridcastError::io(path.display(), e))?;
    parse_klines(&text)
}

/// A kline file on disk, read afresh on every call.
#[derive(Debug, Clone)]
pub struct KlineFile {
    path: PathBuf,
}

impl KlineFile {
    /// Point at a kline file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSource for KlineFile {
    fn name(&self) -> &'static str {
        "kline-file"
    }

    fn close_series(&self) -> Result<Series, GridcastError> {
        Ok(load_klines(&self.path)?.close_series())
    }
}

/// A persisted flat list of predictions.
#[derive(Debug, Clone)]
pub struct ListFile {
    path: PathBuf,
}

impl ListFile {
    /// Point at a list file written by `save_list`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PredictionSource for ListFile {
    fn predictions(&self) -> Result<Vec<f64>, GridcastError> {
        load_list(&self.path)
    }
}
