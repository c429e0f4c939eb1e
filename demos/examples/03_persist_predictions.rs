use gridcast::{Evaluator, ListFile, load_list, save_list};
use gridcast_demos::common::{MOCK_BASE, demo_start, get_source};
use gridcast_mock::fixtures::predictions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Save a forecast between "runs".
    let path = std::env::temp_dir().join(format!("gridcast-demo-{}.txt", std::process::id()));
    let forecast = predictions::biased(MOCK_BASE, 0, 3.0);
    save_list(&forecast, &path)?;
    println!("saved {} predictions to {}", forecast.len(), path.display());

    // 2. Load it back; the list survives exactly.
    let loaded = load_list(&path)?;
    assert_eq!(loaded, forecast);

    // 3. Score straight from the file.
    let evaluator = Evaluator::builder().build()?;
    let report = evaluator.evaluate(demo_start(), get_source().as_ref(), &ListFile::new(&path))?;
    std::fs::remove_file(&path)?;

    println!("nmse of a forecast biased by +3.0 = {:.4}", report.score);
    Ok(())
}
