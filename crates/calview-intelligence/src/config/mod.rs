// ABOUTME: Configuration module for calview-intelligence crate
// ABOUTME: Re-exports prediction policy configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Prediction policy configuration (windowing, damping, caps, horizons)
pub mod prediction;

pub use error::ConfigError;
pub use prediction::PredictionConfig;
