// ABOUTME: Prediction service combining a weight history source, the predictor, and a goal weight
// ABOUTME: Produces the PredictionSummary shown on the progress screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::formats;
use crate::history::WeightHistorySource;
use calview_core::errors::{AppError, AppResult};
use calview_core::models::{PredictionResult, WeightTrend};
use calview_intelligence::clock::{Clock, SystemClock};
use calview_intelligence::{PredictionConfig, TrendAnalysis, WeightPredictor};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything the progress screen needs to render a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    /// Latest recorded weight (kg), 0 when nothing is recorded
    pub current_weight: f64,
    /// Goal weight (kg)
    pub goal_weight: f64,
    /// Projected weight 30 days from now (kg)
    pub predicted_weight_30_days: f64,
    /// Weekly rate of change (kg)
    pub weekly_change_kg: f64,
    /// Days until the goal is reached, if projected
    pub days_to_goal: Option<u32>,
    /// Goal date formatted for display, e.g. `Mar 05, 2026`
    pub projected_date: Option<String>,
    /// Trend classification
    pub trend: WeightTrend,
    /// Whether there was enough data to fit a trend
    pub has_enough_data: bool,
}

impl PredictionSummary {
    /// Build a summary from an engine result
    #[must_use]
    pub fn from_result(result: &PredictionResult, current_weight: f64, goal_weight: f64) -> Self {
        Self {
            current_weight,
            goal_weight,
            predicted_weight_30_days: result.predicted_weight_30_days,
            weekly_change_kg: result.weekly_change_kg,
            days_to_goal: result.days_to_goal(),
            projected_date: result
                .projected_date()
                .map(|date| date.format(formats::PROJECTED_DATE).to_string()),
            trend: result.trend,
            has_enough_data: result.has_enough_data(),
        }
    }
}

/// Runs predictions against a history source
pub struct WeightPredictionService<S, C = SystemClock>
where
    S: WeightHistorySource,
    C: Clock,
{
    source: S,
    predictor: WeightPredictor<C>,
}

impl<S: WeightHistorySource> WeightPredictionService<S, SystemClock> {
    /// Service reading the wall clock
    #[must_use]
    pub const fn new(source: S, config: PredictionConfig) -> Self {
        Self {
            source,
            predictor: WeightPredictor::new(config),
        }
    }
}

impl<S, C> WeightPredictionService<S, C>
where
    S: WeightHistorySource,
    C: Clock,
{
    /// Service reading "now" from `clock`
    #[must_use]
    pub const fn with_clock(source: S, config: PredictionConfig, clock: C) -> Self {
        Self {
            source,
            predictor: WeightPredictor::with_clock(config, clock),
        }
    }

    /// The underlying predictor
    #[must_use]
    pub const fn predictor(&self) -> &WeightPredictor<C> {
        &self.predictor
    }

    /// Predict progress toward `goal_weight`
    ///
    /// # Errors
    ///
    /// Returns an error if `goal_weight` is not a positive finite number or the
    /// history source cannot be read
    pub fn summarize(&self, goal_weight: f64) -> AppResult<PredictionSummary> {
        if !goal_weight.is_finite() || goal_weight <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "goal weight must be a positive number of kilograms, got {goal_weight}"
            )));
        }

        let history = self.source.all_samples()?;
        let current_weight = history
            .iter()
            .max_by_key(|sample| sample.timestamp)
            .map_or(0.0, |sample| sample.weight);

        let result = self.predictor.predict(&history, goal_weight);
        info!(
            samples = history.len(),
            trend = %result.trend,
            weekly_change_kg = result.weekly_change_kg,
            days_to_goal = ?result.days_to_goal(),
            "Weight prediction computed"
        );

        Ok(PredictionSummary::from_result(
            &result,
            current_weight,
            goal_weight,
        ))
    }

    /// Every stage of the trend pipeline, or `None` with too few samples
    ///
    /// # Errors
    ///
    /// Returns an error if the history source cannot be read
    pub fn explain(&self) -> AppResult<Option<TrendAnalysis>> {
        let history = self.source.all_samples()?;
        Ok(self.predictor.analyze(&history))
    }
}
