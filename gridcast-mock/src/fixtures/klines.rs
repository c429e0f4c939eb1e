use chrono::{DateTime, Utc};
use gridcast_core::{Kline, KlineSeries};

// Close-price offsets cycled through by every fixture; never constant over a grid
const WAVE: [f64; 12] = [
    0.0, 4.5, 9.25, 6.0, -2.5, -8.75, -4.0, 1.5, 7.0, 12.25, 3.5, -6.0,
];

/// Close price of the `i`-th fixture candle around `base`.
#[must_use]
pub fn close_at(base: f64, i: usize) -> f64 {
    base + WAVE[i % WAVE.len()]
}

fn build(start: DateTime<Utc>, step_ms: i64, n: usize, base: f64) -> KlineSeries {
    let start_ms = start.timestamp_millis();
    let klines = (0..n)
        .map(|i| {
            let close = close_at(base, i);
            let open = if i == 0 { base } else { close_at(base, i - 1) };
            let offset = i64::try_from(i).unwrap_or(i64::MAX).saturating_mul(step_ms);
            Kline {
                open_time_ms: start_ms.saturating_add(offset),
                open,
                high: open.max(close) + 1.25,
                low: open.min(close) - 1.25,
                close,
            }
        })
        .collect();
    KlineSeries { klines }
}

/// `n` hourly candles opening at `start`, closes oscillating around `base`.
#[must_use]
pub fn hourly(start: DateTime<Utc>, n: usize, base: f64) -> KlineSeries {
    build(start, 3_600_000, n, base)
}

/// `n` five-minute candles opening at `start`, closes oscillating around `base`.
#[must_use]
pub fn five_minute(start: DateTime<Utc>, n: usize, base: f64) -> KlineSeries {
    build(start, 300_000, n, base)
}

/// Shift each candle's open time by a small deterministic amount, at most
/// `max_jitter_ms` either way, the way exchange timestamps wobble.
#[must_use]
pub fn jittered(series: &KlineSeries, max_jitter_ms: i64) -> KlineSeries {
    const PATTERN: [i64; 5] = [0, 1, -1, 2, -2];
    let klines = series
        .klines
        .iter()
        .enumerate()
        .map(|(i, k)| {
            let step = PATTERN[i % PATTERN.len()];
            Kline {
                open_time_ms: k.open_time_ms + step * max_jitter_ms / 2,
                ..*k
            }
        })
        .collect();
    KlineSeries { klines }
}

/// Render candles the way the vendor dumps them: quoted prices plus the
/// trailing fields the decoder ignores.
#[must_use]
pub fn to_vendor_json(series: &KlineSeries) -> String {
    let rows: Vec<serde_json::Value> = series
        .klines
        .iter()
        .map(|k| {
            serde_json::json!([
                k.open_time_ms,
                k.open.to_string(),
                k.high.to_string(),
                k.low.to_string(),
                k.close.to_string(),
                "100.0",
                k.open_time_ms + 59_999,
                "0",
                42,
                "0",
                "0",
                "0"
            ])
        })
        .collect();
    serde_json::Value::Array(rows).to_string()
}
