//! Time-series utilities shared by the evaluator and callers.
//!
//! Modules include:
//! - `codec`: epoch seconds <-> UTC calendar conversion with round-trip checks
//! - `grid`: target grid generation and start rounding
//! - `align`: nearest-sample alignment within a tolerance
/// Nearest-sample alignment onto a target grid.
pub mod align;
/// Round-trip-checked timestamp conversion.
pub mod codec;
/// Target grids and start rounding.
pub mod grid;
