use chrono::{TimeZone, Utc};
use gridcast::{
    Cadence, Evaluator, StartRounding, describe, five_minute_grid, hourly_grid,
    round_to_five_minutes, round_to_nearest_hour,
};
use gridcast_mock::fixtures::{klines, predictions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A wall-clock instant that is not on any boundary.
    let now = Utc
        .with_ymd_and_hms(2023, 3, 15, 12, 3, 41)
        .single()
        .ok_or("invalid wall-clock instant")?;

    // The two rounding helpers derive clean grid starts from it.
    let hour_start = round_to_nearest_hour(now)?;
    let five_start = round_to_five_minutes(now)?;
    println!("{}", describe("hourly grid", &hourly_grid(hour_start)?)?);
    println!("{}", describe("five-minute grid", &five_minute_grid(five_start)?)?);
    println!();

    // Score a five-minute forecast; the evaluator applies the same rounding itself.
    let series = klines::jittered(&klines::five_minute(five_start, 13, 100.0), 900).close_series();
    let evaluator = Evaluator::builder()
        .cadence(Cadence::FiveMinute)
        .start_rounding(StartRounding::FiveMinute)
        .build()?;
    let report = evaluator.evaluate_series(now, &series, predictions::biased(100.0, 1, 0.5))?;
    println!("five-minute nmse with a 0.5 bias = {:.4}", report.score);

    Ok(())
}
