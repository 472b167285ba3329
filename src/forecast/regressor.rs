//! Sequence regressor abstraction and the linear window model.

use crate::error::{AnalysisError, AnalysisResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Capability interface for sequence-prediction models.
///
/// Lifecycle: `build` configures an empty model for an input shape, `train`
/// fits it in place, `predict` maps feature windows to one forecast each
/// without mutating model state.
pub trait SequenceRegressor {
    /// Instantiate an untrained model for `(window_len, feature_dim)` input.
    /// Calling this again discards any previously fitted weights.
    fn build(&mut self, input_shape: (usize, usize));

    /// Fit the model to parallel features/targets.
    fn train(&mut self, features: &[Vec<f64>], targets: &[f64]) -> AnalysisResult<()>;

    /// One forecast per input window. Valid only after `train`.
    fn predict(&self, features: &[Vec<f64>]) -> AnalysisResult<Vec<f64>>;
}

#[derive(Debug, Clone)]
enum ModelState {
    Untrained,
    Built { weights: Vec<f64>, bias: f64 },
    Trained { weights: Vec<f64>, bias: f64 },
}

/// Linear autoregressor over a normalized close window.
///
/// Each window is scaled relative to its final close, so the model learns
/// relative moves rather than absolute price levels. Weights start from a
/// seeded RNG and are fitted by full-batch gradient descent, which makes a
/// run fully deterministic for a fixed seed.
#[derive(Debug, Clone)]
pub struct WindowRegressor {
    epochs: usize,
    learning_rate: f64,
    seed: u64,
    state: ModelState,
}

impl WindowRegressor {
    pub fn new(epochs: usize, learning_rate: f64, seed: u64) -> Self {
        Self {
            epochs,
            learning_rate,
            seed,
            state: ModelState::Untrained,
        }
    }

    /// Normalize a window relative to its last close.
    fn normalize(window: &[f64]) -> (Vec<f64>, f64) {
        let base = *window.last().unwrap_or(&1.0);
        let base = if base != 0.0 { base } else { 1.0 };
        let scaled = window.iter().map(|v| v / base - 1.0).collect();
        (scaled, base)
    }

    fn forward(weights: &[f64], bias: f64, inputs: &[f64]) -> f64 {
        bias + weights.iter().zip(inputs).map(|(w, x)| w * x).sum::<f64>()
    }
}

impl SequenceRegressor for WindowRegressor {
    fn build(&mut self, input_shape: (usize, usize)) {
        let (window_len, feature_dim) = input_shape;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let weights = (0..window_len * feature_dim)
            .map(|_| rng.gen_range(-0.05..0.05))
            .collect();
        self.state = ModelState::Built { weights, bias: 0.0 };
    }

    fn train(&mut self, features: &[Vec<f64>], targets: &[f64]) -> AnalysisResult<()> {
        if features.is_empty() || targets.is_empty() {
            return Err(AnalysisError::Training(
                "empty training data".to_string(),
            ));
        }
        if features.len() != targets.len() {
            return Err(AnalysisError::Training(format!(
                "feature/target length mismatch: {} vs {}",
                features.len(),
                targets.len()
            )));
        }

        let (mut weights, mut bias) = match &self.state {
            ModelState::Built { weights, bias } | ModelState::Trained { weights, bias } => {
                (weights.clone(), *bias)
            }
            ModelState::Untrained => {
                return Err(AnalysisError::Training(
                    "model has not been built".to_string(),
                ))
            }
        };

        if features.iter().any(|w| w.len() != weights.len()) {
            return Err(AnalysisError::Training(format!(
                "window width does not match model input shape ({})",
                weights.len()
            )));
        }

        let n = features.len() as f64;
        let mut prev_mse = f64::INFINITY;

        for epoch in 0..self.epochs {
            let mut weight_grads = vec![0.0; weights.len()];
            let mut bias_grad = 0.0;
            let mut mse = 0.0;

            for (window, &target) in features.iter().zip(targets) {
                let (inputs, base) = Self::normalize(window);
                let scaled_target = target / base - 1.0;
                let error = Self::forward(&weights, bias, &inputs) - scaled_target;
                mse += error * error;
                for (grad, x) in weight_grads.iter_mut().zip(&inputs) {
                    *grad += error * x;
                }
                bias_grad += error;
            }
            mse /= n;

            for (w, grad) in weights.iter_mut().zip(&weight_grads) {
                *w -= self.learning_rate * grad / n;
            }
            bias -= self.learning_rate * bias_grad / n;

            // Converged: loss no longer moving.
            if (prev_mse - mse).abs() < 1e-12 {
                debug!(epoch, mse, "training converged early");
                break;
            }
            prev_mse = mse;
        }

        debug!(
            examples = features.len(),
            epochs = self.epochs,
            "trained window regressor"
        );
        self.state = ModelState::Trained { weights, bias };
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> AnalysisResult<Vec<f64>> {
        let (weights, bias) = match &self.state {
            ModelState::Trained { weights, bias } => (weights, *bias),
            _ => return Err(AnalysisError::NotTrained),
        };

        let mut forecasts = Vec::with_capacity(features.len());
        for window in features {
            let (inputs, base) = Self::normalize(window);
            let scaled = Self::forward(weights, bias, &inputs);
            forecasts.push((scaled + 1.0) * base);
        }
        Ok(forecasts)
    }
}
