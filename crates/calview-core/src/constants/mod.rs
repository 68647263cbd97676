// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tunable policy constants for weight trend windowing, damping, capping, and projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! The prediction values below were tuned empirically rather than derived from
//! a physiological model. They are the defaults for
//! `calview_intelligence::config::PredictionConfig` and can be overridden per
//! deployment through environment variables.

/// Weight trend prediction policy defaults
pub mod prediction {
    /// Minimum number of samples required before a regression is attempted
    pub const MIN_SAMPLES: usize = 3;

    /// Lookback window (days ending at "now") used to keep the trend recent
    pub const WINDOW_DAYS: u32 = 60;

    /// Spans shorter than this (days) have their slope damped toward zero
    pub const DAMPING_SPAN_DAYS: f64 = 14.0;

    /// Lower bound for the short-span damping factor
    pub const MIN_DAMPING_FACTOR: f64 = 0.2;

    /// Largest plausible rate of change in either direction (kg per week)
    pub const MAX_WEEKLY_CHANGE_KG: f64 = 2.0;

    /// Deviation (kg) between the fitted "today" value and the latest actual
    /// measurement above which the line is re-anchored on the measurement
    pub const ANCHOR_DEVIATION_KG: f64 = 2.0;

    /// Days ahead of "now" for the headline projection
    pub const PROJECTION_DAYS: u32 = 30;

    /// Goal projections at or beyond this many days are discarded
    pub const GOAL_HORIZON_DAYS: f64 = 730.0;

    /// Upper bound accepted for a configured lookback window (days)
    pub const MAX_WINDOW_DAYS: u32 = 36_500;

    /// Upper bound accepted for a configured goal horizon (days)
    pub const MAX_GOAL_HORIZON_DAYS: f64 = 36_500.0;

    /// Sanity floor for any projected weight (kg)
    pub const MIN_PREDICTED_WEIGHT_KG: f64 = 10.0;

    /// Weekly changes within +/- this band (kg) are classified as stable
    pub const TREND_DEAD_BAND_KG: f64 = 0.1;
}

/// Time unit conversions
pub mod time {
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Seconds per day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// Date formats used when presenting projections
pub mod formats {
    /// Human readable projected date, e.g. `Mar 05, 2026`
    pub const PROJECTED_DATE: &str = "%b %d, %Y";
}
