//! Gridcast error, configuration, and report types shared across the workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;

pub use config::{Cadence, DEFAULT_TOLERANCE_SECS, EvalConfig, GRID_LEN, StartRounding};
pub use error::GridcastError;
pub use reports::{ComparisonPoint, EvalReport};
