// ABOUTME: Anti-overreaction rules applied to a fitted weight trend line
// ABOUTME: Short-span damping, weekly-change capping, and anchoring to the latest measurement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend heuristics
//!
//! Each rule takes a [`TrendLine`] and returns a new one; nothing is mutated in
//! place. The predictor composes them in order: damping, capping, anchoring.
//! None of the rules can panic, even with a configuration that was never
//! validated.

use crate::statistical_analysis::TrendLine;
use calview_core::constants::time::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};

/// Outcome of short-span damping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Damped {
    /// Line with the damped slope
    pub line: TrendLine,
    /// Factor the slope was multiplied by (1.0 when the span was long enough)
    pub factor: f64,
}

/// Outcome of weekly-change capping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capped {
    /// Line whose slope matches `weekly_change_kg`
    pub line: TrendLine,
    /// Weekly change after capping (kg per 7 days)
    pub weekly_change_kg: f64,
    /// Whether the cap was hit
    pub was_capped: bool,
}

/// Outcome of anchoring to the latest measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchored {
    /// Line passing through the latest sample if anchoring applied
    pub line: TrendLine,
    /// Fitted "today" value minus the latest actual weight, before anchoring
    pub deviation_kg: f64,
    /// Whether the intercept was replaced
    pub was_anchored: bool,
}

/// Pull the slope toward zero when the fitted span is short
///
/// For `span_days < damping_span_days` the slope is multiplied by
/// `span_days / damping_span_days`, bounded to `[min_factor, 1.0]`. The
/// intercept is left as fitted.
#[must_use]
pub fn dampen(line: TrendLine, span_days: f64, damping_span_days: f64, min_factor: f64) -> Damped {
    if span_days >= damping_span_days {
        return Damped { line, factor: 1.0 };
    }

    let factor = (span_days / damping_span_days).max(min_factor).min(1.0);
    Damped {
        line: TrendLine::new(line.slope * factor, line.intercept),
        factor,
    }
}

/// Bound the weekly rate of change to `[-max_weekly_change_kg, +max_weekly_change_kg]`
///
/// When the bound is hit the slope is recomputed from the capped weekly change
/// so every later projection agrees with the reported rate.
#[must_use]
#[allow(clippy::float_cmp)] // Detects whether the bound changed the value at all
pub fn cap_weekly_change(line: TrendLine, max_weekly_change_kg: f64) -> Capped {
    let limit = max_weekly_change_kg.abs();
    let weekly_change = line.slope * DAYS_PER_WEEK;
    let capped = weekly_change.max(-limit).min(limit);

    if capped == weekly_change {
        Capped {
            line,
            weekly_change_kg: weekly_change,
            was_capped: false,
        }
    } else {
        Capped {
            line: TrendLine::new(capped / DAYS_PER_WEEK, line.intercept),
            weekly_change_kg: capped,
            was_capped: true,
        }
    }
}

/// Re-anchor the line on the latest actual measurement when it has drifted
///
/// If the line's value at `days_until_now` differs from `last_weight` by more
/// than `max_deviation_kg`, the intercept is replaced so the line passes
/// exactly through `(days_until_now, last_weight)`. The slope never changes.
#[must_use]
pub fn anchor_to_latest(
    line: TrendLine,
    days_until_now: f64,
    last_weight: f64,
    max_deviation_kg: f64,
) -> Anchored {
    let deviation_kg = line.value_at(days_until_now) - last_weight;

    if deviation_kg.abs() > max_deviation_kg {
        Anchored {
            line: TrendLine::new(line.slope, line.slope.mul_add(-days_until_now, last_weight)),
            deviation_kg,
            was_anchored: true,
        }
    } else {
        Anchored {
            line,
            deviation_kg,
            was_anchored: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dampen_scales_short_spans() {
        let damped = dampen(TrendLine::new(-0.2, 80.0), 7.0, 14.0, 0.2);
        assert!((damped.factor - 0.5).abs() < f64::EPSILON);
        assert!((damped.line.slope - (-0.1)).abs() < 1e-12);
        assert!((damped.line.intercept - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dampen_respects_minimum_factor() {
        let damped = dampen(TrendLine::new(-1.0, 80.0), 1.0, 14.0, 0.2);
        assert!((damped.factor - 0.2).abs() < f64::EPSILON);

        let same_day = dampen(TrendLine::new(-1.0, 80.0), 0.0, 14.0, 0.2);
        assert!((same_day.factor - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dampen_leaves_long_spans_untouched() {
        let line = TrendLine::new(-0.1, 80.0);
        let damped = dampen(line, 14.0, 14.0, 0.2);
        assert!((damped.factor - 1.0).abs() < f64::EPSILON);
        assert_eq!(damped.line, line);
    }

    #[test]
    fn test_cap_limits_fast_loss() {
        let capped = cap_weekly_change(TrendLine::new(-1.0, 90.0), 2.0);
        assert!(capped.was_capped);
        assert!((capped.weekly_change_kg - (-2.0)).abs() < f64::EPSILON);
        assert!((capped.line.slope - (-2.0 / 7.0)).abs() < 1e-12);
        assert!((capped.line.intercept - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cap_passes_plausible_rates() {
        let line = TrendLine::new(0.1, 70.0);
        let capped = cap_weekly_change(line, 2.0);
        assert!(!capped.was_capped);
        assert_eq!(capped.line, line);
        assert!((capped.weekly_change_kg - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_anchor_replaces_intercept_on_large_drift() {
        // Line says 75 kg at day 50 but the scale read 79 kg
        let anchored = anchor_to_latest(TrendLine::new(-0.1, 80.0), 50.0, 79.0, 2.0);
        assert!(anchored.was_anchored);
        assert!((anchored.deviation_kg - (-4.0)).abs() < 1e-9);
        assert!((anchored.line.value_at(50.0) - 79.0).abs() < 1e-9);
        assert!((anchored.line.slope - (-0.1)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_anchor_keeps_intercept_within_tolerance() {
        let line = TrendLine::new(-0.1, 80.0);
        let anchored = anchor_to_latest(line, 20.0, 77.0, 2.0);
        assert!(!anchored.was_anchored);
        assert_eq!(anchored.line, line);
    }
}
