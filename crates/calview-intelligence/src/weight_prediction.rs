// ABOUTME: Weight trend predictor: windowing, heuristic pipeline, classification, and goal projection
// ABOUTME: Pure computation over a borrowed sample history and an injected "now"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: day counts are far below 2^52

//! Weight trend prediction
//!
//! [`WeightPredictor::predict`] turns an unordered weight log and a goal weight
//! into a [`PredictionResult`]. The computation is split in two:
//!
//! 1. [`WeightPredictor::analyze_at`] selects the sample window and runs the
//!    trend line through fit, damping, capping and anchoring, returning every
//!    intermediate stage as a [`TrendAnalysis`].
//! 2. The result is assembled from the final line: 30-day projection with a
//!    sanity floor, trend classification, and a goal projection when the trend
//!    moves toward the goal.
//!
//! Degenerate input never fails. Too few samples yield
//! [`WeightTrend::InsufficientData`]; samples that all fall on one day yield a
//! flat, stable line through their mean.

use crate::clock::{Clock, SystemClock};
use crate::config::PredictionConfig;
use crate::statistical_analysis::{RegressionFit, StatisticalAnalyzer, TrendLine};
use crate::trend_heuristics::{anchor_to_latest, cap_weekly_change, dampen, Anchored, Capped, Damped};
use calview_core::constants::time::SECONDS_PER_DAY;
use calview_core::models::{GoalProjection, PredictionResult, WeightSample, WeightTrend};
use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which samples the trend was fitted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleWindow {
    /// Samples inside the lookback window ending at "now"
    Recent,
    /// The lookback window was too sparse, so the whole history was used
    FullHistory,
}

/// Every stage of the trend pipeline for one history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Window the fit was computed on
    pub window: SampleWindow,
    /// Samples inside that window
    pub samples_used: usize,
    /// Days between the first and last sample of the window
    pub span_days: f64,
    /// Whole days (floored) from the first sample of the window to "now"
    pub days_until_now: f64,
    /// Weight of the most recent sample
    pub last_weight: f64,
    /// Raw least squares fit; `None` when every sample fell on the same day
    pub fit: Option<RegressionFit>,
    /// Line after short-span damping
    pub damped: Damped,
    /// Line after weekly-change capping
    pub capped: Capped,
    /// Final line after anchoring to the latest measurement
    pub anchored: Anchored,
}

impl TrendAnalysis {
    /// Final trend line used for every projection
    #[must_use]
    pub const fn line(&self) -> TrendLine {
        self.anchored.line
    }

    /// Weekly change (kg) after damping and capping
    #[must_use]
    pub const fn weekly_change_kg(&self) -> f64 {
        self.capped.weekly_change_kg
    }

    /// Final line's value at "now"
    #[must_use]
    pub fn current_trend_weight(&self) -> f64 {
        self.line().value_at(self.days_until_now)
    }

    /// Whether the fit was degenerate (no variance in day offsets)
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.fit.is_none()
    }
}

/// One independent prediction in a batch
#[derive(Debug, Clone, Copy)]
pub struct PredictionRequest<'a> {
    /// Measurement history, in any order
    pub history: &'a [WeightSample],
    /// Goal weight (kg)
    pub goal_weight: f64,
}

/// Weight trend prediction engine
///
/// Stateless apart from its policy and clock; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct WeightPredictor<C: Clock = SystemClock> {
    config: PredictionConfig,
    clock: C,
}

impl WeightPredictor<SystemClock> {
    /// Predictor reading the wall clock
    #[must_use]
    pub const fn new(config: PredictionConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> WeightPredictor<C> {
    /// Predictor reading "now" from `clock`
    #[must_use]
    pub const fn with_clock(config: PredictionConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Policy in use
    #[must_use]
    pub const fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict using the predictor's clock, read exactly once
    #[must_use]
    pub fn predict(&self, history: &[WeightSample], goal_weight: f64) -> PredictionResult {
        self.predict_at(history, goal_weight, self.clock.now())
    }

    /// Predict many independent histories in parallel against one shared "now"
    ///
    /// Results are returned in request order.
    #[must_use]
    pub fn predict_many(&self, requests: &[PredictionRequest<'_>]) -> Vec<PredictionResult> {
        let now = self.clock.now();
        requests
            .par_iter()
            .map(|request| self.predict_at(request.history, request.goal_weight, now))
            .collect()
    }

    /// Run the trend pipeline using the predictor's clock
    #[must_use]
    pub fn analyze(&self, history: &[WeightSample]) -> Option<TrendAnalysis> {
        self.analyze_at(history, self.clock.now())
    }

    /// Predict as of `now`
    ///
    /// Deterministic: identical history, goal and `now` always produce a
    /// bit-identical result.
    #[must_use]
    pub fn predict_at(
        &self,
        history: &[WeightSample],
        goal_weight: f64,
        now: DateTime<Utc>,
    ) -> PredictionResult {
        let Some(analysis) = self.analyze_at(history, now) else {
            return PredictionResult::insufficient_data();
        };

        let line = analysis.line();
        let weekly_change_kg = analysis.weekly_change_kg();
        let projection_day = analysis.days_until_now + f64::from(self.config.projection_days);
        let predicted_weight_30_days = line
            .value_at(projection_day)
            .max(self.config.min_predicted_weight_kg);

        let trend = WeightTrend::from_weekly_change(weekly_change_kg, self.config.trend_dead_band_kg);
        let goal_projection = if analysis.is_degenerate() {
            None
        } else {
            self.project_goal(&analysis, trend, goal_weight, now)
        };

        PredictionResult {
            predicted_weight_30_days,
            weekly_change_kg,
            goal_projection,
            trend,
        }
    }

    /// Select the sample window and run fit, damping, capping and anchoring
    ///
    /// Returns `None` when fewer than `min_samples` samples are available.
    #[must_use]
    pub fn analyze_at(&self, history: &[WeightSample], now: DateTime<Utc>) -> Option<TrendAnalysis> {
        let min_samples = self.config.min_samples;
        if history.len() < min_samples {
            debug!(
                samples = history.len(),
                min_samples, "Not enough weight samples for a trend"
            );
            return None;
        }

        let (window, samples) = self.select_window(history, now)?;
        let first = samples.first()?;
        let last = samples.last()?;

        let points = StatisticalAnalyzer::day_offsets(&samples);
        let span_days = points.last().map_or(0.0, |(x, _)| *x);
        let days_until_now = (now - first.timestamp)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY) as f64;

        let fit = StatisticalAnalyzer::linear_regression(&points);
        let fitted = fit.map_or_else(
            || {
                debug!(
                    samples = points.len(),
                    "All samples on one day; using a flat line through the mean"
                );
                TrendLine::flat(StatisticalAnalyzer::mean_weight(&points))
            },
            |fit| fit.line,
        );

        let damped = dampen(
            fitted,
            span_days,
            self.config.damping_span_days,
            self.config.min_damping_factor,
        );
        let capped = cap_weekly_change(damped.line, self.config.max_weekly_change_kg);
        let anchored = anchor_to_latest(
            capped.line,
            days_until_now,
            last.weight,
            self.config.anchor_deviation_kg,
        );

        debug!(
            ?window,
            samples = samples.len(),
            span_days,
            days_until_now,
            damping_factor = damped.factor,
            weekly_change_kg = capped.weekly_change_kg,
            was_capped = capped.was_capped,
            anchor_deviation_kg = anchored.deviation_kg,
            was_anchored = anchored.was_anchored,
            "Weight trend pipeline complete"
        );

        Some(TrendAnalysis {
            window,
            samples_used: samples.len(),
            span_days,
            days_until_now,
            last_weight: last.weight,
            fit,
            damped,
            capped,
            anchored,
        })
    }

    /// Sort the history and keep the lookback window, falling back to the
    /// whole history when the window is too sparse
    fn select_window<'a>(
        &self,
        history: &'a [WeightSample],
        now: DateTime<Utc>,
    ) -> Option<(SampleWindow, Vec<&'a WeightSample>)> {
        let mut sorted: Vec<&WeightSample> = history.iter().collect();
        sorted.sort_by_key(|sample| sample.timestamp);

        // A cutoff before the earliest representable instant keeps everything
        let recent: Vec<&WeightSample> =
            match now.checked_sub_signed(Duration::days(i64::from(self.config.window_days))) {
                Some(cutoff) => sorted
                    .iter()
                    .copied()
                    .filter(|sample| sample.timestamp >= cutoff)
                    .collect(),
                None => sorted.clone(),
            };

        if recent.len() >= self.config.min_samples {
            Some((SampleWindow::Recent, recent))
        } else if sorted.len() >= self.config.min_samples {
            debug!(
                recent = recent.len(),
                total = sorted.len(),
                window_days = self.config.window_days,
                "Lookback window too sparse; fitting the full history"
            );
            Some((SampleWindow::FullHistory, sorted))
        } else {
            None
        }
    }

    /// Days and date at which the goal is reached, when the trend heads there
    fn project_goal(
        &self,
        analysis: &TrendAnalysis,
        trend: WeightTrend,
        goal_weight: f64,
        now: DateTime<Utc>,
    ) -> Option<GoalProjection> {
        let current = analysis.current_trend_weight();
        let heading_to_goal = (goal_weight < current && trend == WeightTrend::Losing)
            || (goal_weight > current && trend == WeightTrend::Gaining);
        if !heading_to_goal {
            return None;
        }

        let days_from_start = analysis.line().day_reaching(goal_weight)?;
        let days_from_now = days_from_start - analysis.days_until_now;
        let horizon = self.config.goal_horizon_days;
        if !(days_from_now > 0.0 && days_from_now < horizon) {
            debug!(days_from_now, horizon, "Goal projection outside horizon");
            return None;
        }

        // Rounding can land on 0 or on the horizon itself
        let rounded = days_from_now.round();
        if rounded < 1.0 || rounded >= horizon {
            return None;
        }

        let days_to_goal = u32::try_from(rounded as i64).ok()?;
        let projected_date = now.checked_add_signed(Duration::days(i64::from(days_to_goal)))?;
        Some(GoalProjection {
            days_to_goal,
            projected_date,
        })
    }
}
