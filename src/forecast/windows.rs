//! Sliding-window training example construction.

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::EnrichedSeries;

/// Parallel feature windows and targets for the sequence model.
///
/// `features[i]` is a fixed-width window of consecutive closes and
/// `targets[i]` is the close at the step immediately following it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingData {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl TrainingData {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Slide a fixed-width window over the close column to build overlapping
/// training examples.
///
/// A series of `n` rows yields `n - window` windows; the first `window`
/// rows cannot seed a window and are excluded. Fails with
/// [`AnalysisError::InsufficientData`] when no window fits.
pub fn prepare_data(series: &EnrichedSeries, window: usize) -> AnalysisResult<TrainingData> {
    if series.len() <= window {
        return Err(AnalysisError::InsufficientData {
            required: window + 1,
            provided: series.len(),
        });
    }

    let closes = series.closes();
    let count = closes.len() - window;
    let mut features = Vec::with_capacity(count);
    let mut targets = Vec::with_capacity(count);

    for i in 0..count {
        features.push(closes[i..i + window].to_vec());
        targets.push(closes[i + window]);
    }

    Ok(TrainingData { features, targets })
}

/// The most recent window of closes, used to forecast one step past the
/// series end.
pub fn latest_window(series: &EnrichedSeries, window: usize) -> AnalysisResult<Vec<f64>> {
    if series.len() < window {
        return Err(AnalysisError::InsufficientData {
            required: window,
            provided: series.len(),
        });
    }
    let closes = series.closes();
    Ok(closes[closes.len() - window..].to_vec())
}
