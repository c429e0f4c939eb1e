use gridcast_core::GRID_LEN;

use super::klines::close_at;

/// A prediction that tracks the fixture wave exactly from candle `offset` on.
#[must_use]
pub fn perfect(base: f64, offset: usize) -> Vec<f64> {
    (0..GRID_LEN).map(|i| close_at(base, offset + i)).collect()
}

/// A flat prediction at `level`.
#[must_use]
pub fn flat(level: f64) -> Vec<f64> {
    vec![level; GRID_LEN]
}

/// The perfect prediction with every point moved by `bias`.
#[must_use]
pub fn biased(base: f64, offset: usize, bias: f64) -> Vec<f64> {
    perfect(base, offset).into_iter().map(|v| v + bias).collect()
}
