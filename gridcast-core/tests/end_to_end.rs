use gridcast_core::{GridcastError, Series, align, normalized_error};

fn source() -> Series {
    Series::from_pairs([(0.0, 100.0), (3_600.0, 110.0), (7_200.0, 90.0)])
}

#[test]
fn aligned_truth_scores_perfect_prediction_at_zero() {
    let src = source();
    let targets = [0.0, 3_600.0, 7_200.0];
    let truth = align(&targets, src.timestamps(), src.values()).unwrap();
    assert_eq!(truth, vec![100.0, 110.0, 90.0]);
    assert_eq!(normalized_error(&truth, &[100.0, 110.0, 90.0]).unwrap(), 0.0);
}

#[test]
fn aligned_truth_scores_flat_prediction_by_hand() {
    let truth = source().align_onto(&[0.0, 3_600.0, 7_200.0], 1.0).unwrap();
    let score = normalized_error(&truth, &[100.0, 100.0, 100.0]).unwrap();
    assert!((score - 0.4).abs() < 1e-12);
}

#[test]
fn hourly_grid_over_short_source_reports_gap() {
    let start = chrono::DateTime::from_timestamp(0, 0).unwrap();
    let targets = gridcast_core::hourly_grid(start).unwrap();
    let err = source().align_onto(&targets, 1.0).unwrap_err();
    assert!(matches!(
        err,
        GridcastError::AlignmentGap { ref target, .. } if target == "1970/01/01, 03:00:00"
    ));
}

#[test]
fn series_requires_paired_columns() {
    assert!(matches!(
        Series::new(vec![0.0, 1.0], vec![1.0]),
        Err(GridcastError::LengthMismatch { .. })
    ));
    let s = Series::new(vec![0.0], vec![1.0]).unwrap();
    assert_eq!(s.len(), 1);
    assert!(!s.is_empty());
    assert_eq!(s.into_parts(), (vec![0.0], vec![1.0]));
}
