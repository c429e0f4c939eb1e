use chrono::{TimeZone, Utc};
use gridcast_core::{GridcastError, PredictionSource, PriceSource, parse_klines};
use gridcast_mock::fixtures::{klines, predictions};
use gridcast_mock::{MockPredictions, MockSource};

#[test]
fn vendor_json_decodes_back_to_the_fixture() {
    let start = Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0).unwrap();
    let series = klines::hourly(start, 24, 1_650.0);
    let decoded = parse_klines(&klines::to_vendor_json(&series)).unwrap();
    assert_eq!(decoded, series);
}

#[test]
fn jitter_stays_within_bound() {
    let start = Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0).unwrap();
    let series = klines::five_minute(start, 30, 1_650.0);
    let shaken = klines::jittered(&series, 800);
    for (a, b) in series.klines.iter().zip(&shaken.klines) {
        assert!((a.open_time_ms - b.open_time_ms).abs() <= 800);
        assert_eq!(a.close, b.close);
    }
    assert!(series.klines.iter().zip(&shaken.klines).any(|(a, b)| a != b));
}

#[test]
fn perfect_prediction_follows_the_wave() {
    let start = Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0).unwrap();
    let series = klines::hourly(start, 12, 100.0);
    let closes: Vec<f64> = series.klines.iter().map(|k| k.close).collect();
    assert_eq!(predictions::perfect(100.0, 0), closes);
    assert_eq!(predictions::flat(3.0), vec![3.0; 12]);
    assert_eq!(predictions::biased(100.0, 0, 1.0)[0], closes[0] + 1.0);
}

#[test]
fn failing_mocks_fail() {
    assert!(matches!(
        MockSource::failing().close_series(),
        Err(GridcastError::Io(_))
    ));
    assert!(matches!(
        MockPredictions::failing().predictions(),
        Err(GridcastError::Parse(_))
    ));
}
