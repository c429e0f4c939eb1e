use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gridcast workspace.
///
/// Every variant describes bad input rather than a transient fault, so none of
/// them is retried internally: they propagate straight to the caller.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum GridcastError {
    /// A timestamp did not survive a numeric/calendar conversion round trip.
    #[error("timestamp round trip failed: {input} came back as {output}")]
    RoundTrip {
        /// The value handed to the conversion, rendered for humans.
        input: String,
        /// What the reverse conversion produced (or why it could not).
        output: String,
    },

    /// No source sample lies within tolerance of a required target timestamp.
    #[error("source series is missing target time: {target}")]
    AlignmentGap {
        /// Target timestamp formatted as `%Y/%m/%d, %H:%M:%S` (UTC).
        target: String,
        /// Distance in seconds to the closest source sample, if any sample existed.
        nearest_secs: Option<f64>,
    },

    /// Two sequences expected to be positionally paired have unequal (or zero) length.
    #[error("length mismatch in {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Which pairing was violated, e.g. "ground truth vs prediction".
        what: String,
        /// Length of the reference sequence.
        expected: usize,
        /// Length of the offending sequence.
        actual: usize,
    },

    /// Ground truth has no dynamic range, so normalization is undefined.
    #[error("degenerate series: {0}")]
    DegenerateSeries(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Textual input did not match the expected structured shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),
}

impl GridcastError {
    /// Helper: build a `RoundTrip` error from anything displayable.
    pub fn round_trip(input: impl ToString, output: impl ToString) -> Self {
        Self::RoundTrip {
            input: input.to_string(),
            output: output.to_string(),
        }
    }

    /// Helper: build a `LengthMismatch` error.
    pub fn length_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Parse` error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Helper: build an `Io` error tagged with the path it concerns.
    pub fn io(path: impl core::fmt::Display, err: impl core::fmt::Display) -> Self {
        Self::Io(format!("{path}: {err}"))
    }
}
