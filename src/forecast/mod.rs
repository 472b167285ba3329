//! Windowed sequence forecasting over the enriched series.

pub mod regressor;
pub mod windows;

pub use regressor::{SequenceRegressor, WindowRegressor};
pub use windows::{prepare_data, TrainingData};
