use core::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::GridcastError;
use crate::timeseries::codec::to_calendar_all;

/// Format a timestamp as `YYYY/MM/DD, HH:MM:SS` (UTC).
#[must_use]
pub fn pretty_time(dt: DateTime<Utc>) -> String {
    dt.format("%Y/%m/%d, %H:%M:%S").to_string()
}

/// Human-readable overview of a timestamp sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampSummary {
    /// Caller-supplied heading.
    pub label: String,
    /// First timestamp.
    pub start: DateTime<Utc>,
    /// Last timestamp.
    pub end: DateTime<Utc>,
    /// Number of timestamps.
    pub count: usize,
    /// Distance from the first to the second timestamp, if there are two.
    pub spacing: Option<TimeDelta>,
}

fn fmt_spacing(f: &mut fmt::Formatter<'_>, delta: TimeDelta) -> fmt::Result {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let secs = delta.num_seconds().unsigned_abs();
    write!(
        f,
        "{sign}{}:{:02}:{:02}",
        secs / 3_600,
        (secs % 3_600) / 60,
        secs % 60
    )
}

impl fmt::Display for TimestampSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label)?;
        writeln!(f, "  starts on: {}", pretty_time(self.start))?;
        writeln!(f, "    ends on: {}", pretty_time(self.end))?;
        writeln!(f, "  {} datapoints", self.count)?;
        write!(f, "  time interval between datapoints: ")?;
        match self.spacing {
            Some(delta) => fmt_spacing(f, delta),
            None => write!(f, "n/a"),
        }
    }
}

/// Summarize a sequence of epoch-second timestamps for console output.
///
/// # Errors
/// - `InvalidArg` if `uts` is empty.
/// - `RoundTrip` if any timestamp fails the codec check.
pub fn describe(label: &str, uts: &[f64]) -> Result<TimestampSummary, GridcastError> {
    let dts = to_calendar_all(uts)?;
    let (Some(&start), Some(&end)) = (dts.first(), dts.last()) else {
        return Err(GridcastError::invalid_arg(format!(
            "cannot describe '{label}': no timestamps"
        )));
    };
    Ok(TimestampSummary {
        label: label.to_string(),
        start,
        end,
        count: dts.len(),
        spacing: dts.get(1).map(|second| *second - start),
    })
}
