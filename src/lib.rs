// ABOUTME: Main library entry point for CalView weight trend prediction
// ABOUTME: Wires history sources, the prediction engine, presentation summaries, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CalView` Trends
//!
//! Weight trend prediction for a nutrition-tracking application. Given a
//! sparse, irregularly sampled log of body-weight measurements and a goal
//! weight, the engine fits a damped, capped and anchored linear trend,
//! projects the weight 30 days out and estimates when the goal is reached.
//!
//! ## Architecture
//!
//! - **`calview-core`**: samples, results, errors, policy constants
//! - **`calview-intelligence`**: regression, heuristics, [`WeightPredictor`]
//! - **history**: read-only [`WeightHistorySource`] implementations
//! - **`prediction_service`**: [`WeightPredictionService`] producing a [`PredictionSummary`]
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use calview_trends::{FixedClock, PredictionConfig, WeightPredictor, WeightSample, WeightTrend};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
//! let history: Vec<WeightSample> = [80.0, 79.0, 78.0]
//!     .iter()
//!     .zip(0..)
//!     .map(|(&weight, i)| WeightSample::new(start + Duration::days(10 * i), weight))
//!     .collect();
//!
//! let now = start + Duration::days(20);
//! let predictor = WeightPredictor::with_clock(PredictionConfig::default(), FixedClock::new(now));
//! let result = predictor.predict(&history, 70.0);
//!
//! assert_eq!(result.trend, WeightTrend::Losing);
//! assert_eq!(result.days_to_goal(), Some(80));
//! ```

/// Constants re-exported from the core crate plus service identifiers
pub mod constants;

/// Read-only weight history sources
pub mod history;

/// Structured logging configuration
pub mod logging;

/// History-backed prediction service and presentation summary
pub mod prediction_service;

/// Unified error types
pub mod errors {
    pub use calview_core::errors::{AppError, AppResult, ErrorCode};
}

/// Data models
pub mod models {
    pub use calview_core::models::*;
}

/// Trend engine modules
pub mod intelligence {
    pub use calview_intelligence::*;
}

pub use calview_core::models::{GoalProjection, PredictionResult, WeightSample, WeightTrend};
pub use calview_intelligence::{
    Clock, ConfigError, FixedClock, PredictionConfig, PredictionRequest, SampleWindow,
    SystemClock, TrendAnalysis, TrendLine, WeightPredictor,
};
pub use history::{InMemoryWeightHistory, JsonFileWeightHistory, WeightHistorySource};
pub use prediction_service::{PredictionSummary, WeightPredictionService};
