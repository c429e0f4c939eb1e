use gridcast::{Evaluator, GridcastError};
use gridcast_demos::common::{MOCK_BASE, demo_start};
use gridcast_mock::fixtures::{klines, predictions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only eight hours of data for a twelve-hour grid.
    let series = klines::hourly(demo_start(), 8, MOCK_BASE).close_series();
    let evaluator = Evaluator::builder().build()?;

    match evaluator.evaluate_series(demo_start(), &series, predictions::flat(MOCK_BASE)) {
        Err(GridcastError::AlignmentGap {
            target,
            nearest_secs,
        }) => {
            println!("source is missing target time: {target}");
            if let Some(d) = nearest_secs {
                println!("closest sample was {d:.0}s away");
            }
        }
        Err(e) => return Err(e.into()),
        Ok(report) => println!("unexpectedly scored: {:.4}", report.score),
    }

    // Widening the tolerance does not paper over a missing hour.
    let lenient = Evaluator::builder().tolerance(60.0).build()?;
    let still = lenient.evaluate_series(demo_start(), &series, predictions::flat(MOCK_BASE));
    println!(
        "with 60s tolerance: {}",
        still.map_or_else(|e| e.to_string(), |r| r.score.to_string())
    );

    Ok(())
}
