use gridcast::Evaluator;
use gridcast_demos::common::{MOCK_BASE, demo_start, get_source};
use gridcast_mock::MockPredictions;
use gridcast_mock::fixtures::predictions;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,gridcast=trace,gridcast_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let evaluator = Evaluator::builder().build()?;
    let source = get_source();

    // A good forecast, then one that misses the grid entirely
    let _ = evaluator.evaluate(
        demo_start(),
        source.as_ref(),
        &MockPredictions::new(predictions::perfect(MOCK_BASE, 0)),
    )?;
    let late = demo_start() + chrono::TimeDelta::days(30);
    if let Err(e) = evaluator.evaluate(
        late,
        source.as_ref(),
        &MockPredictions::new(predictions::flat(MOCK_BASE)),
    ) {
        tracing::warn!(error = %e, "evaluation rejected");
    }

    Ok(())
}
