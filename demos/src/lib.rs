//! Shared helpers for the gridcast demos.

pub mod common;
