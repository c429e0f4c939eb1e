use chrono::{DateTime, TimeZone, Utc};
use gridcast_core::{
    Cadence, GRID_LEN, GridcastError, StartRounding, five_minute_grid, grid, hourly_grid,
    round_start, round_to_five_minutes, round_to_nearest_hour, to_numeric,
};
use proptest::prelude::*;

fn arb_start() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_000_000_000i64).prop_map(|s| DateTime::from_timestamp(s, 0).unwrap())
}

proptest! {
    #[test]
    fn grids_are_strictly_increasing_with_twelve_points(
        start in arb_start(),
        cadence in prop::sample::select(vec![Cadence::Hourly, Cadence::FiveMinute]),
    ) {
        let g = grid(start, cadence).unwrap();
        prop_assert_eq!(g.len(), GRID_LEN);
        for w in g.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn hourly_spacing(start in arb_start()) {
        let g = hourly_grid(start).unwrap();
        prop_assert_eq!(g[0], to_numeric(start).unwrap());
        for w in g.windows(2) {
            prop_assert_eq!(w[1] - w[0], 3_600.0);
        }
    }

    #[test]
    fn five_minute_spacing_skips_start(start in arb_start()) {
        let g = five_minute_grid(start).unwrap();
        prop_assert_eq!(g[0] - to_numeric(start).unwrap(), 300.0);
        prop_assert_eq!(g[GRID_LEN - 1] - to_numeric(start).unwrap(), 3_600.0);
        for w in g.windows(2) {
            prop_assert_eq!(w[1] - w[0], 300.0);
        }
    }

    #[test]
    fn rounding_lands_on_boundaries(s in 0i64..4_000_000_000i64, nanos in 0u32..1_000_000_000u32) {
        let dt = DateTime::from_timestamp(s, nanos).unwrap();
        let hour = round_to_nearest_hour(dt).unwrap();
        prop_assert_eq!(hour.timestamp().rem_euclid(3_600), 0);
        prop_assert!((hour - dt).num_seconds().abs() <= 1_800);
        let five = round_to_five_minutes(dt).unwrap();
        prop_assert_eq!(five.timestamp().rem_euclid(300), 0);
        prop_assert!(five <= dt);
        prop_assert!((dt - five).num_seconds() < 300);
    }
}

#[test]
fn nearest_hour_decides_on_minutes_only() {
    let at = |h, m, s| Utc.with_ymd_and_hms(2023, 3, 15, h, m, s).unwrap();
    assert_eq!(round_to_nearest_hour(at(10, 29, 59)).unwrap(), at(10, 0, 0));
    assert_eq!(round_to_nearest_hour(at(10, 30, 0)).unwrap(), at(11, 0, 0));
    assert_eq!(round_to_nearest_hour(at(10, 0, 0)).unwrap(), at(10, 0, 0));
    assert_eq!(
        round_to_nearest_hour(at(23, 45, 0)).unwrap(),
        Utc.with_ymd_and_hms(2023, 3, 16, 0, 0, 0).unwrap()
    );
}

#[test]
fn five_minute_floor() {
    let at = |h, m, s| Utc.with_ymd_and_hms(2023, 3, 15, h, m, s).unwrap();
    assert_eq!(round_to_five_minutes(at(10, 29, 59)).unwrap(), at(10, 25, 0));
    assert_eq!(round_to_five_minutes(at(10, 30, 0)).unwrap(), at(10, 30, 0));
    assert_eq!(round_to_five_minutes(at(10, 4, 1)).unwrap(), at(10, 0, 0));
}

#[test]
fn round_start_dispatches_on_mode() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 15, 10, 37, 12).unwrap();
    assert_eq!(round_start(dt, StartRounding::None).unwrap(), dt);
    assert_eq!(
        round_start(dt, StartRounding::NearestHour).unwrap(),
        Utc.with_ymd_and_hms(2023, 3, 15, 11, 0, 0).unwrap()
    );
    assert_eq!(
        round_start(dt, StartRounding::FiveMinute).unwrap(),
        Utc.with_ymd_and_hms(2023, 3, 15, 10, 35, 0).unwrap()
    );
}

#[test]
fn grid_start_with_nanoseconds_fails_round_trip() {
    let start = DateTime::from_timestamp(1_678_881_600, 5).unwrap();
    assert!(matches!(
        hourly_grid(start),
        Err(GridcastError::RoundTrip { .. })
    ));
}

#[test]
fn grid_at_end_of_calendar_is_invalid() {
    assert!(matches!(
        hourly_grid(DateTime::<Utc>::MAX_UTC),
        Err(GridcastError::InvalidArg(_) | GridcastError::RoundTrip { .. })
    ));
}
