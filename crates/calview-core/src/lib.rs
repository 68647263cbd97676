// ABOUTME: Core types and constants for CalView weight trend prediction
// ABOUTME: Foundation crate with weight samples, prediction results, errors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CalView` Core
//!
//! Foundation crate providing shared types and constants for weight trend
//! prediction. This crate changes infrequently so that the algorithm crate and
//! the integration surfaces can build against a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Tunable prediction policy constants
//! - **models**: `WeightSample`, `PredictionResult`, `GoalProjection`, `WeightTrend`

/// Unified error handling system with standard error codes
pub mod errors;

/// Prediction policy constants organized by concern
pub mod constants;

/// Core data models (weight samples, prediction results)
pub mod models;
