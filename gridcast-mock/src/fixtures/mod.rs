pub mod klines;
pub mod predictions;
