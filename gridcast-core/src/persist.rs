//! Save and load a flat numeric list as text shaped `[1.2, 3.4, 5.6]`.
//!
//! The text is a JSON array of numbers, so any structured-literal parser can
//! read it back. Loading is strict: the document must be exactly one flat
//! array of numbers, and nothing in it is ever evaluated.

use std::fs;
use std::path::Path;

use crate::GridcastError;

/// Render values in the persisted list shape.
///
/// Each value is written in its shortest form that parses back to the same
/// `f64`.
///
/// # Errors
/// Returns `InvalidArg` if a value is NaN or infinite; the text form has no
/// spelling for them.
pub fn render_list(values: &[f64]) -> Result<String, GridcastError> {
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(GridcastError::invalid_arg(format!(
            "cannot persist non-finite value {} at index {i}",
            values[i]
        )));
    }
    let items: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    Ok(format!("[{}]", items.join(", ")))
}

/// Parse text in the persisted list shape.
///
/// Integers are accepted and widened to `f64`. Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `Parse` for anything other than a flat JSON array of numbers.
pub fn parse_list(text: &str) -> Result<Vec<f64>, GridcastError> {
    serde_json::from_str::<Vec<f64>>(text.trim())
        .map_err(|e| GridcastError::parse(format!("expected a flat list of numbers: {e}")))
}

/// Write `values` to `path`, replacing any existing file.
///
/// # Errors
/// - `InvalidArg` for non-finite values (nothing is written).
/// - `Io` if the file cannot be written.
pub fn save_list(values: &[f64], path: impl AsRef<Path>) -> Result<(), GridcastError> {
    let path = path.as_ref();
    let text = render_list(values)?;
    fs::write(path, text).map_err(|e| GridcastError::io(path.display(), e))
}

/// Read a list previously written by [`save_list`].
///
/// # Errors
/// - `Io` if the file cannot be read.
/// - `Parse` if its contents are not a flat list of numbers.
pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<f64>, GridcastError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| GridcastError::io(path.display(), e))?;
    parse_list(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_legacy_shape() {
        assert_eq!(render_list(&[1.2, 3.4, 5.6]).unwrap(), "[1.2, 3.4, 5.6]");
        assert_eq!(render_list(&[]).unwrap(), "[]");
        assert_eq!(render_list(&[2.0]).unwrap(), "[2.0]");
    }

    #[test]
    fn parses_integers_and_whitespace() {
        assert_eq!(parse_list(" [1, 2.5,\n3]\n").unwrap(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn rejects_anything_but_flat_numbers() {
        for bad in [
            "",
            "1.0",
            "[[1.0]]",
            "[\"1.0\"]",
            "[null]",
            "{\"a\": 1}",
            "[1.0, 2.0] trailing",
            "__import__('os').system('true')",
            "[nan]",
        ] {
            assert!(
                matches!(parse_list(bad), Err(GridcastError::Parse(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn non_finite_values_are_not_persisted() {
        assert!(matches!(
            render_list(&[1.0, f64::NAN]),
            Err(GridcastError::InvalidArg(_))
        ));
        assert!(matches!(
            render_list(&[f64::INFINITY]),
            Err(GridcastError::InvalidArg(_))
        ));
    }
}
