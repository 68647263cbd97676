// ABOUTME: Prediction policy configuration with defaults, environment overrides, and validation
// ABOUTME: Every empirically tuned constant of the weight trend engine is adjustable here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction Configuration
//!
//! The weight trend engine relies on a handful of empirically tuned policy
//! constants. Their defaults live in `calview_core::constants::prediction`;
//! deployments can override them through environment variables:
//!
//! ```bash
//! export CALVIEW_PREDICTION_WINDOW_DAYS=90
//! export CALVIEW_PREDICTION_MAX_WEEKLY_CHANGE_KG=1.5
//! ```
//!
//! # Examples
//!
//! ```rust
//! use calview_intelligence::config::PredictionConfig;
//!
//! let config = PredictionConfig::default();
//! assert_eq!(config.window_days, 60);
//! assert!(config.validate().is_ok());
//! ```

use super::ConfigError;
use calview_core::constants::prediction;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Tunable policy for the weight trend engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Minimum samples required to fit a trend
    pub min_samples: usize,
    /// Lookback window ending at "now" (days)
    pub window_days: u32,
    /// Spans shorter than this (days) are damped
    pub damping_span_days: f64,
    /// Lower bound of the damping factor
    pub min_damping_factor: f64,
    /// Weekly change cap in either direction (kg)
    pub max_weekly_change_kg: f64,
    /// Re-anchor when the fitted "today" value misses the latest sample by more than this (kg)
    pub anchor_deviation_kg: f64,
    /// Days after "now" for the headline projection
    pub projection_days: u32,
    /// Goal projections must land strictly inside this many days
    pub goal_horizon_days: f64,
    /// Floor for projected weights (kg)
    pub min_predicted_weight_kg: f64,
    /// Half-width of the stable band for weekly change (kg)
    pub trend_dead_band_kg: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_samples: prediction::MIN_SAMPLES,
            window_days: prediction::WINDOW_DAYS,
            damping_span_days: prediction::DAMPING_SPAN_DAYS,
            min_damping_factor: prediction::MIN_DAMPING_FACTOR,
            max_weekly_change_kg: prediction::MAX_WEEKLY_CHANGE_KG,
            anchor_deviation_kg: prediction::ANCHOR_DEVIATION_KG,
            projection_days: prediction::PROJECTION_DAYS,
            goal_horizon_days: prediction::GOAL_HORIZON_DAYS,
            min_predicted_weight_kg: prediction::MIN_PREDICTED_WEIGHT_KG,
            trend_dead_band_kg: prediction::TREND_DEAD_BAND_KG,
        }
    }
}

impl PredictionConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first rule the configuration violates
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_samples < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_samples must be at least 2 for a linear fit",
            ));
        }

        if self.window_days == 0 || self.window_days > prediction::MAX_WINDOW_DAYS {
            return Err(ConfigError::ValueOutOfRange(
                "window_days must be in (0, 36500]",
            ));
        }

        if !is_positive(self.damping_span_days) {
            return Err(ConfigError::ValueOutOfRange(
                "damping_span_days must be > 0",
            ));
        }

        if !is_positive(self.min_damping_factor) || self.min_damping_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_damping_factor must be in (0, 1]",
            ));
        }

        if !is_positive(self.max_weekly_change_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "max_weekly_change_kg must be > 0",
            ));
        }

        if !is_non_negative(self.anchor_deviation_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "anchor_deviation_kg must be >= 0",
            ));
        }

        if self.projection_days == 0 {
            return Err(ConfigError::ValueOutOfRange("projection_days must be > 0"));
        }

        if !is_positive(self.goal_horizon_days)
            || self.goal_horizon_days > prediction::MAX_GOAL_HORIZON_DAYS
        {
            return Err(ConfigError::ValueOutOfRange(
                "goal_horizon_days must be in (0, 36500]",
            ));
        }

        if !is_non_negative(self.min_predicted_weight_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "min_predicted_weight_kg must be >= 0",
            ));
        }

        if !is_non_negative(self.trend_dead_band_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "trend_dead_band_kg must be >= 0",
            ));
        }

        if self.trend_dead_band_kg >= self.max_weekly_change_kg {
            return Err(ConfigError::InvalidRange(
                "trend_dead_band_kg must be < max_weekly_change_kg",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("CALVIEW_PREDICTION_MIN_SAMPLES")? {
            self.min_samples = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_WINDOW_DAYS")? {
            self.window_days = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_DAMPING_SPAN_DAYS")? {
            self.damping_span_days = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_MIN_DAMPING_FACTOR")? {
            self.min_damping_factor = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_MAX_WEEKLY_CHANGE_KG")? {
            self.max_weekly_change_kg = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_ANCHOR_DEVIATION_KG")? {
            self.anchor_deviation_kg = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_PROJECTION_DAYS")? {
            self.projection_days = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_GOAL_HORIZON_DAYS")? {
            self.goal_horizon_days = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_MIN_WEIGHT_KG")? {
            self.min_predicted_weight_kg = val;
        }
        if let Some(val) = env_override("CALVIEW_PREDICTION_TREND_DEAD_BAND_KG")? {
            self.trend_dead_band_kg = val;
        }
        Ok(self)
    }
}

/// `false` for NaN
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// `false` for NaN
fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

/// Parse an environment variable if it is set
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    env::var(name).map_or(Ok(None), |val| {
        val.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val:?}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PredictionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_dead_band_must_be_inside_weekly_cap() {
        let config = PredictionConfig {
            trend_dead_band_kg: 2.5,
            ..PredictionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_nan_values_are_rejected() {
        let config = PredictionConfig {
            damping_span_days: f64::NAN,
            ..PredictionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PredictionConfig =
            serde_json::from_str(r#"{"window_days": 90, "max_weekly_change_kg": 1.5}"#).unwrap();
        assert_eq!(config.window_days, 90);
        assert!((config.max_weekly_change_kg - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.min_samples, 3);
    }

    #[test]
    fn test_unbounded_window_and_horizon_are_rejected() {
        let wide_window = PredictionConfig {
            window_days: 200_000_000,
            ..PredictionConfig::default()
        };
        assert!(matches!(
            wide_window.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let far_horizon = PredictionConfig {
            goal_horizon_days: 1e12,
            ..PredictionConfig::default()
        };
        assert!(matches!(
            far_horizon.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let longest = PredictionConfig {
            window_days: prediction::MAX_WINDOW_DAYS,
            goal_horizon_days: prediction::MAX_GOAL_HORIZON_DAYS,
            ..PredictionConfig::default()
        };
        assert!(longest.validate().is_ok());
    }
}
