//! Re-export of foundational types from `gridcast-types`.
// Consolidated re-exports so downstream crates can depend on `gridcast-core` only

pub use gridcast_types::{
    Cadence, ComparisonPoint, DEFAULT_TOLERANCE_SECS, EvalConfig, EvalReport, GRID_LEN,
    GridcastError, StartRounding,
};
