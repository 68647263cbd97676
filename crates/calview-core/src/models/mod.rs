// ABOUTME: Core data models for weight trend prediction
// ABOUTME: Weight samples read from the measurement log and prediction results handed to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Timestamped body-weight measurements
pub mod weight;

/// Prediction output types (trend classification, goal projection, result)
pub mod prediction;

pub use prediction::{GoalProjection, PredictionResult, WeightTrend};
pub use weight::WeightSample;
