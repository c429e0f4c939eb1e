use gridcast::{Evaluator, describe, pretty_time};
use gridcast_demos::common::{MOCK_BASE, demo_start, get_source};
use gridcast_mock::MockPredictions;
use gridcast_mock::fixtures::predictions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build an evaluator for the default twelve-hour grid.
    let evaluator = Evaluator::builder().build()?;

    // 2. Pick the price source (mock candles unless GRIDCAST_DEMOS_KLINES is set).
    let source = get_source();

    // 3. A forecast that is right about the level but misses every swing.
    let forecast = MockPredictions::new(predictions::flat(MOCK_BASE));

    // 4. Align and score.
    let report = evaluator.evaluate(demo_start(), source.as_ref(), &forecast)?;

    println!("{}", describe("target grid", &report.targets)?);
    println!();
    println!("{:<22} {:>10} {:>10} {:>8}", "time", "actual", "predicted", "error");
    for p in &report.points {
        println!(
            "{:<22} {:>10.2} {:>10.2} {:>8.2}",
            pretty_time(p.ts),
            p.actual,
            p.predicted,
            p.error
        );
    }
    println!();
    println!("nmse = {:.4}", report.score);

    Ok(())
}
