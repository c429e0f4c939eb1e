use chrono::{DateTime, TimeZone, Utc};
use gridcast::{KlineFile, PriceSource};
use gridcast_mock::MockSource;
use gridcast_mock::fixtures::klines;

/// Base price the mock fixtures oscillate around.
pub const MOCK_BASE: f64 = 1_650.0;

/// Fixed start instant used by every demo.
///
/// # Panics
/// Never: the literal date is valid.
#[must_use]
pub fn demo_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0)
        .single()
        .expect("valid demo start")
}

/// Return a price source for demos.
///
/// Reads the kline file named by `GRIDCAST_DEMOS_KLINES` when set; otherwise
/// serves a day of jittered hourly mock candles starting at [`demo_start`].
#[must_use]
pub fn get_source() -> Box<dyn PriceSource> {
    if let Ok(path) = std::env::var("GRIDCAST_DEMOS_KLINES") {
        println!("--- (Using kline file {path}) ---");
        Box::new(KlineFile::new(path))
    } else {
        let candles = klines::jittered(&klines::hourly(demo_start(), 24, MOCK_BASE), 400);
        Box::new(MockSource::new(candles.close_series()))
    }
}
