//! Configuration types shared by the core helpers and the evaluator.

use serde::{Deserialize, Serialize};

/// Maximum distance, in seconds, between a target timestamp and the source
/// sample matched to it.
pub const DEFAULT_TOLERANCE_SECS: f64 = 1.0;

/// Number of points in every target grid.
pub const GRID_LEN: usize = 12;

/// Cadence of a target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Cadence {
    /// Twelve hourly points starting at the start instant itself.
    #[default]
    Hourly,
    /// Twelve five-minute points starting one step after the start instant.
    FiveMinute,
}

impl Cadence {
    /// Spacing between adjacent grid points, in seconds.
    #[must_use]
    pub const fn step_secs(self) -> i64 {
        match self {
            Self::Hourly => 3_600,
            Self::FiveMinute => 300,
        }
    }

    /// Offset of the first grid point from the start instant, in steps.
    #[must_use]
    pub const fn first_offset(self) -> i64 {
        match self {
            Self::Hourly => 0,
            Self::FiveMinute => 1,
        }
    }
}

/// How the evaluator derives a clean grid start from the caller's instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StartRounding {
    /// Use the start instant as given.
    #[default]
    None,
    /// Round to the nearest hour (minutes >= 30 advance the hour).
    NearestHour,
    /// Floor to the enclosing five-minute boundary.
    FiveMinute,
}

/// Configuration for a forecast evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Target grid cadence.
    pub cadence: Cadence,
    /// Alignment tolerance in seconds; a sample exactly this far away still matches.
    pub tolerance_secs: f64,
    /// Rounding applied to the start instant before building the grid.
    pub start_rounding: StartRounding,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            cadence: Cadence::default(),
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
            start_rounding: StartRounding::default(),
        }
    }
}
