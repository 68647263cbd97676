// ABOUTME: Prediction output models for the weight trend engine
// ABOUTME: Trend classification, optional goal projection, and the per-call PredictionResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightTrend {
    /// Weekly change below the negative dead band
    Losing,
    /// Weekly change above the positive dead band
    Gaining,
    /// Weekly change within the dead band, or no measurable slope
    Stable,
    /// Too few samples to fit a trend
    InsufficientData,
}

impl WeightTrend {
    /// Classify a weekly change against a symmetric dead band
    #[must_use]
    pub fn from_weekly_change(weekly_change_kg: f64, dead_band_kg: f64) -> Self {
        if weekly_change_kg < -dead_band_kg {
            Self::Losing
        } else if weekly_change_kg > dead_band_kg {
            Self::Gaining
        } else {
            Self::Stable
        }
    }

    /// Stable string identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Losing => "LOSING",
            Self::Gaining => "GAINING",
            Self::Stable => "STABLE",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

impl fmt::Display for WeightTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When the goal weight is projected to be reached
///
/// Both parts are present together or not at all; `projected_date` is always
/// exactly `now + days_to_goal` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProjection {
    /// Whole days from "now" until the goal is reached
    pub days_to_goal: u32,
    /// "now" plus `days_to_goal` days
    pub projected_date: DateTime<Utc>,
}

/// Result of one prediction call
///
/// Constructed fresh per call; it carries no identity beyond the call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Projected weight (kg) a fixed number of days after "now"
    pub predicted_weight_30_days: f64,
    /// Signed rate of change per 7 days (kg), bounded by the weekly cap
    pub weekly_change_kg: f64,
    /// Goal projection, absent when the trend is not moving toward the goal
    pub goal_projection: Option<GoalProjection>,
    /// Trend classification
    pub trend: WeightTrend,
}

impl PredictionResult {
    /// Result returned when there are too few samples to fit a trend
    #[must_use]
    pub const fn insufficient_data() -> Self {
        Self {
            predicted_weight_30_days: 0.0,
            weekly_change_kg: 0.0,
            goal_projection: None,
            trend: WeightTrend::InsufficientData,
        }
    }

    /// Days until the goal is reached, if projected
    #[must_use]
    pub fn days_to_goal(&self) -> Option<u32> {
        self.goal_projection.map(|goal| goal.days_to_goal)
    }

    /// Date the goal is reached, if projected
    #[must_use]
    pub fn projected_date(&self) -> Option<DateTime<Utc>> {
        self.goal_projection.map(|goal| goal.projected_date)
    }

    /// Whether enough data was available to fit a trend
    #[must_use]
    pub fn has_enough_data(&self) -> bool {
        self.trend != WeightTrend::InsufficientData
    }
}
