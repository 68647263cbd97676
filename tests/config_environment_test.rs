// ABOUTME: Tests for prediction policy environment overrides
// ABOUTME: Validates parsing, validation errors, and the effect of overrides on predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use calview_trends::errors::{AppError, ErrorCode};
use calview_trends::{ConfigError, FixedClock, PredictionConfig, WeightPredictor, WeightTrend};
use common::{day, samples};
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: &[&str] = &[
    "CALVIEW_PREDICTION_MIN_SAMPLES",
    "CALVIEW_PREDICTION_WINDOW_DAYS",
    "CALVIEW_PREDICTION_MAX_WEEKLY_CHANGE_KG",
    "CALVIEW_PREDICTION_TREND_DEAD_BAND_KG",
    "CALVIEW_PREDICTION_MIN_WEIGHT_KG",
];

fn clear_overrides() {
    for name in OVERRIDE_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_uses_defaults() {
    clear_overrides();
    assert_eq!(PredictionConfig::load().unwrap(), PredictionConfig::default());
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_overrides();
    env::set_var("CALVIEW_PREDICTION_WINDOW_DAYS", "90");
    env::set_var("CALVIEW_PREDICTION_MAX_WEEKLY_CHANGE_KG", " 1.5 ");

    let config = PredictionConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.window_days, 90);
    assert!((config.max_weekly_change_kg - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.min_samples, 3);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("CALVIEW_PREDICTION_MIN_SAMPLES", "three");

    let error = PredictionConfig::load().unwrap_err();
    clear_overrides();

    assert!(matches!(error, ConfigError::Parse(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("CALVIEW_PREDICTION_TREND_DEAD_BAND_KG", "3.0");

    let error = PredictionConfig::load().unwrap_err();
    clear_overrides();

    assert!(matches!(error, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_tighter_cap_changes_prediction() {
    clear_overrides();
    env::set_var("CALVIEW_PREDICTION_MAX_WEEKLY_CHANGE_KG", "0.5");

    let config = PredictionConfig::load().unwrap();
    clear_overrides();

    let history = samples(&[(0, 80.0), (10, 79.0), (20, 78.0)]);
    let predictor = WeightPredictor::with_clock(config, FixedClock::new(day(20)));
    let result = predictor.predict(&history, 70.0);

    assert_eq!(result.trend, WeightTrend::Losing);
    assert!((result.weekly_change_kg - (-0.5)).abs() < 1e-9);
}

#[test]
#[serial]
fn test_window_override_beyond_bound_is_rejected() {
    clear_overrides();
    env::set_var("CALVIEW_PREDICTION_WINDOW_DAYS", "200000000");

    let error = PredictionConfig::load().unwrap_err();
    clear_overrides();

    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
}
