// ABOUTME: Ordinary least squares fit of body weight against elapsed whole days
// ABOUTME: Converts samples to day offsets and returns the fitted line with goodness-of-fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts and day offsets are far below 2^52

use calview_core::models::WeightSample;
use serde::{Deserialize, Serialize};

/// A straight line `weight = slope * day + intercept`
///
/// `day` is the whole-day offset from the first sample of the fitted window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Rate of change (kg per day)
    pub slope: f64,
    /// Weight (kg) at day offset 0
    pub intercept: f64,
}

impl TrendLine {
    /// Create a line from slope and intercept
    #[must_use]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// A horizontal line at `weight`
    #[must_use]
    pub const fn flat(weight: f64) -> Self {
        Self::new(0.0, weight)
    }

    /// Weight on the line at day offset `day`
    #[must_use]
    pub fn value_at(&self, day: f64) -> f64 {
        self.slope.mul_add(day, self.intercept)
    }

    /// Day offset at which the line reaches `weight`, if the line is not flat
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact zero is the only slope with no solution
    pub fn day_reaching(&self, weight: f64) -> Option<f64> {
        if self.slope == 0.0 {
            None
        } else {
            Some((weight - self.intercept) / self.slope)
        }
    }
}

/// Linear regression results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    /// Fitted line
    pub line: TrendLine,
    /// Coefficient of determination (0-1); 0 when weight has no variance
    pub r_squared: f64,
    /// Number of points fitted
    pub sample_count: usize,
}

/// Regression over weight samples
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Whole-day offsets of each sample from the first one
    ///
    /// `samples` must be sorted by timestamp ascending, so every offset is
    /// non-negative and truncation equals flooring.
    #[must_use]
    pub fn day_offsets(samples: &[&WeightSample]) -> Vec<(f64, f64)> {
        let Some(first) = samples.first() else {
            return Vec::new();
        };
        samples
            .iter()
            .map(|sample| {
                let days = (sample.timestamp - first.timestamp).num_days();
                (days as f64, sample.weight)
            })
            .collect()
    }

    /// Closed-form ordinary least squares fit of `y` on `x`
    ///
    /// Returns `None` when there are fewer than two points or the x values
    /// have zero variance (every sample on the same day), which leaves the
    /// slope undetermined.
    #[must_use]
    #[allow(clippy::float_cmp)] // Degenerate fits are detected by an exactly zero denominator
    pub fn linear_regression(points: &[(f64, f64)]) -> Option<RegressionFit> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
        let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
        let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
        let sum_xx: f64 = points.iter().map(|(x, _)| x * x).sum();
        let sum_yy: f64 = points.iter().map(|(_, y)| y * y).sum();

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if denominator == 0.0 {
            return None;
        }

        let numerator = n.mul_add(sum_xy, -(sum_x * sum_y));
        let slope = numerator / denominator;
        let intercept = slope.mul_add(-sum_x, sum_y) / n;

        let y_variance = n.mul_add(sum_yy, -(sum_y * sum_y));
        let r_squared = if y_variance > 0.0 {
            (numerator * numerator / (denominator * y_variance)).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Some(RegressionFit {
            line: TrendLine::new(slope, intercept),
            r_squared,
            sample_count: points.len(),
        })
    }

    /// Arithmetic mean of the weights, 0 for an empty slice
    #[must_use]
    pub fn mean_weight(points: &[(f64, f64)]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        points.iter().map(|(_, y)| y).sum::<f64>() / points.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_perfect_negative_fit() {
        let points = [(0.0, 80.0), (10.0, 79.0), (20.0, 78.0)];
        let fit = StatisticalAnalyzer::linear_regression(&points).unwrap();

        assert!((fit.line.slope - (-0.1)).abs() < 1e-12);
        assert!((fit.line.intercept - 80.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(fit.sample_count, 3);
    }

    #[test]
    fn test_same_day_points_are_degenerate() {
        let points = [(0.0, 80.0), (0.0, 79.0), (0.0, 81.0)];
        assert!(StatisticalAnalyzer::linear_regression(&points).is_none());
    }

    #[test]
    fn test_flat_weights_have_zero_slope() {
        let points = [(0.0, 70.0), (2.0, 70.0), (5.0, 70.0)];
        let fit = StatisticalAnalyzer::linear_regression(&points).unwrap();

        assert!(fit.line.slope.abs() < 1e-12);
        assert!((fit.line.intercept - 70.0).abs() < 1e-9);
        assert!(fit.r_squared.abs() < f64::EPSILON);
    }

    #[test]
    fn test_day_offsets_floor_partial_days() {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
        let samples = [
            WeightSample::new(base, 80.0),
            WeightSample::new(base + Duration::hours(23), 79.8),
            WeightSample::new(base + Duration::hours(49), 79.5),
        ];
        let refs: Vec<&WeightSample> = samples.iter().collect();

        let offsets = StatisticalAnalyzer::day_offsets(&refs);
        assert_eq!(offsets, vec![(0.0, 80.0), (0.0, 79.8), (2.0, 79.5)]);
    }

    #[test]
    fn test_day_reaching_inverts_value_at() {
        let line = TrendLine::new(-0.1, 80.0);
        let day = line.day_reaching(70.0).unwrap();
        assert!((day - 100.0).abs() < 1e-9);
        assert!(TrendLine::flat(70.0).day_reaching(65.0).is_none());
    }
}
