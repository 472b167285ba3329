//! Error taxonomy for the analysis pipeline.
//!
//! The core performs no local recovery: any failure aborts the current
//! analysis run and surfaces the specific error kind to the caller. Missing
//! indicator values are never silently replaced with defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Not enough history to fill the largest requested lookback window.
    #[error("insufficient data: need at least {required} rows, got {provided}")]
    InsufficientData { required: usize, provided: usize },

    /// Malformed or empty training data.
    #[error("training failed: {0}")]
    Training(String),

    /// Forecast requested before the model was trained.
    #[error("model has not been trained")]
    NotTrained,

    /// Invalid input series (non-increasing timestamps, non-positive close).
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// Propagated unchanged from the data-fetch collaborator.
    #[error("upstream fetch failed: {0}")]
    UpstreamFetch(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
