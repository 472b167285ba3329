//! Unit tests for the window regressor lifecycle

use coinsight::error::AnalysisError;
use coinsight::forecast::{SequenceRegressor, WindowRegressor};

fn constant_data(windows: usize, width: usize, value: f64) -> (Vec<Vec<f64>>, Vec<f64>) {
    (vec![vec![value; width]; windows], vec![value; windows])
}

#[test]
fn test_predict_before_train_fails() {
    let model = WindowRegressor::new(50, 0.01, 42);
    let result = model.predict(&[vec![100.0; 10]]);
    assert!(matches!(result, Err(AnalysisError::NotTrained)));
}

#[test]
fn test_predict_after_build_but_before_train_fails() {
    let mut model = WindowRegressor::new(50, 0.01, 42);
    model.build((10, 1));
    let result = model.predict(&[vec![100.0; 10]]);
    assert!(matches!(result, Err(AnalysisError::NotTrained)));
}

#[test]
fn test_train_without_build_fails() {
    let mut model = WindowRegressor::new(50, 0.01, 42);
    let (features, targets) = constant_data(5, 10, 100.0);
    let result = model.train(&features, &targets);
    assert!(matches!(result, Err(AnalysisError::Training(_))));
}

#[test]
fn test_train_rejects_empty_data() {
    let mut model = WindowRegressor::new(50, 0.01, 42);
    model.build((10, 1));
    let result = model.train(&[], &[]);
    assert!(matches!(result, Err(AnalysisError::Training(_))));
}

#[test]
fn test_train_rejects_mismatched_lengths() {
    let mut model = WindowRegressor::new(50, 0.01, 42);
    model.build((10, 1));
    let (features, _) = constant_data(5, 10, 100.0);
    let result = model.train(&features, &[100.0; 4]);
    assert!(matches!(result, Err(AnalysisError::Training(_))));
}

#[test]
fn test_one_forecast_per_window() {
    let mut model = WindowRegressor::new(100, 0.01, 42);
    model.build((10, 1));
    let (features, targets) = constant_data(25, 10, 100.0);
    model.train(&features, &targets).unwrap();

    let forecasts = model.predict(&features).unwrap();
    assert_eq!(forecasts.len(), 25);
    assert!(forecasts.iter().all(|f| f.is_finite()));
}

#[test]
fn test_constant_series_forecasts_the_constant() {
    let mut model = WindowRegressor::new(100, 0.01, 42);
    model.build((10, 1));
    let (features, targets) = constant_data(25, 10, 100.0);
    model.train(&features, &targets).unwrap();

    let forecasts = model.predict(&[vec![100.0; 10]]).unwrap();
    assert!((forecasts[0] - 100.0).abs() < 1e-6);
}

#[test]
fn test_deterministic_for_fixed_seed() {
    let (features, targets) = constant_data(20, 10, 100.0);

    let mut first = WindowRegressor::new(100, 0.01, 7);
    first.build((10, 1));
    first.train(&features, &targets).unwrap();

    let mut second = WindowRegressor::new(100, 0.01, 7);
    second.build((10, 1));
    second.train(&features, &targets).unwrap();

    assert_eq!(
        first.predict(&features).unwrap(),
        second.predict(&features).unwrap()
    );
}

#[test]
fn test_rebuild_discards_training() {
    let mut model = WindowRegressor::new(100, 0.01, 42);
    model.build((10, 1));
    let (features, targets) = constant_data(20, 10, 100.0);
    model.train(&features, &targets).unwrap();
    assert!(model.predict(&features).is_ok());

    model.build((10, 1));
    let result = model.predict(&features);
    assert!(matches!(result, Err(AnalysisError::NotTrained)));
}

#[test]
fn test_predict_does_not_mutate_state() {
    let mut model = WindowRegressor::new(100, 0.01, 42);
    model.build((10, 1));
    let (features, targets) = constant_data(20, 10, 100.0);
    model.train(&features, &targets).unwrap();

    let first = model.predict(&features).unwrap();
    let second = model.predict(&features).unwrap();
    assert_eq!(first, second);
}
