// ABOUTME: Weight trend intelligence crate: regression, heuristics, and goal projection
// ABOUTME: Exposes WeightPredictor plus the individual pipeline stages for testing and diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CalView` Intelligence
//!
//! Fits a linear trend to a sparse, irregularly sampled body-weight series,
//! guards it against short or noisy histories, projects a future weight and
//! estimates when a goal weight will be reached.
//!
//! The engine is a pure function of its inputs and the injected [`Clock`]:
//! no I/O, no shared mutable state, no persisted intermediate results.

/// Injectable time source
pub mod clock;

/// Prediction policy configuration with environment overrides
pub mod config;

/// Ordinary least squares fit of weight against elapsed days
pub mod statistical_analysis;

/// Damping, capping, and anchoring rules applied to a fitted trend line
pub mod trend_heuristics;

/// Windowing, pipeline composition, classification, and goal projection
pub mod weight_prediction;

pub use calview_core::models::{GoalProjection, PredictionResult, WeightSample, WeightTrend};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, PredictionConfig};
pub use statistical_analysis::{RegressionFit, StatisticalAnalyzer, TrendLine};
pub use weight_prediction::{PredictionRequest, SampleWindow, TrendAnalysis, WeightPredictor};
