use std::path::PathBuf;

use gridcast_core::{GridcastError, ListFile, PredictionSource, load_list, save_list};
use proptest::prelude::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gridcast-{}-{name}.txt", std::process::id()))
}

proptest! {
    #[test]
    fn load_of_save_is_identity(values in proptest::collection::vec(any::<f64>().prop_filter("finite", |v| v.is_finite()), 0..64)) {
        let path = temp_path("prop");
        save_list(&values, &path).unwrap();
        let back = load_list(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        prop_assert_eq!(back.len(), values.len());
        for (a, b) in back.iter().zip(&values) {
            prop_assert_eq!(a, b);
        }
    }
}

#[test]
fn file_has_legacy_shape() {
    let path = temp_path("shape");
    save_list(&[1.2, 3.4, 5.6], &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(text, "[1.2, 3.4, 5.6]");
}

#[test]
fn reads_legacy_files() {
    let path = temp_path("legacy");
    std::fs::write(&path, "[1650.5, 1651, 1649.25]\n").unwrap();
    let back = load_list(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(back, vec![1650.5, 1651.0, 1649.25]);
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_path("does-not-exist");
    assert!(matches!(load_list(&path), Err(GridcastError::Io(_))));
}

#[test]
fn malformed_file_is_parse_error() {
    let path = temp_path("malformed");
    std::fs::write(&path, "[1.0, [2.0]]").unwrap();
    let res = load_list(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(res, Err(GridcastError::Parse(_))));
}

#[test]
fn list_file_is_a_prediction_source() {
    let path = temp_path("source");
    save_list(&[10.0, 11.0], &path).unwrap();
    let preds = ListFile::new(&path).predictions().unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(preds, vec![10.0, 11.0]);
}
