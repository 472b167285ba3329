//! Trend indicators (moving averages).

pub mod ma;

pub use ma::moving_average_series;
