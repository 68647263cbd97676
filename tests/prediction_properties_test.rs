// ABOUTME: Property-based tests for the weight trend predictor
// ABOUTME: Checks result bounds and determinism over randomly generated weight logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use calview_trends::{PredictionResult, WeightSample, WeightTrend};
use chrono::Duration;
use common::{day, predictor_at};
use proptest::prelude::*;

/// Weight logs with up to a year of sample days
fn history_strategy(max_len: usize) -> impl Strategy<Value = Vec<WeightSample>> {
    prop::collection::vec((0_i64..365, 0_i64..24, 40.0_f64..150.0), 0..max_len).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(offset, hour, weight)| {
                    WeightSample::new(day(offset) + Duration::hours(hour), weight)
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_short_histories_are_insufficient(
        history in history_strategy(3),
        now_offset in 0_i64..400,
        goal in 40.0_f64..150.0,
    ) {
        let result = predictor_at(day(now_offset)).predict(&history, goal);
        prop_assert_eq!(result, PredictionResult::insufficient_data());
    }

    #[test]
    fn prop_results_stay_within_bounds(
        history in history_strategy(40),
        now_offset in 0_i64..400,
        goal in 40.0_f64..150.0,
    ) {
        prop_assume!(history.len() >= 3);
        let now = day(now_offset);
        let result = predictor_at(now).predict(&history, goal);

        prop_assert!(result.has_enough_data());
        prop_assert!(result.weekly_change_kg.abs() <= 2.0 + 1e-9);
        prop_assert!(result.predicted_weight_30_days >= 10.0);
        prop_assert!(result.predicted_weight_30_days.is_finite());

        let expected_trend = if result.weekly_change_kg > 0.1 {
            WeightTrend::Gaining
        } else if result.weekly_change_kg < -0.1 {
            WeightTrend::Losing
        } else {
            WeightTrend::Stable
        };
        prop_assert_eq!(result.trend, expected_trend);

        if let Some(projection) = result.goal_projection {
            prop_assert!(projection.days_to_goal > 0);
            prop_assert!(projection.days_to_goal < 730);
            prop_assert_eq!(
                projection.projected_date,
                now + Duration::days(i64::from(projection.days_to_goal))
            );
            prop_assert_ne!(result.trend, WeightTrend::Stable);
        }
    }

    #[test]
    fn prop_prediction_is_deterministic_and_order_independent(
        history in history_strategy(30),
        now_offset in 0_i64..400,
        goal in 40.0_f64..150.0,
    ) {
        let predictor = predictor_at(day(now_offset));
        let first = predictor.predict(&history, goal);
        let second = predictor.predict(&history, goal);
        prop_assert_eq!(first, second);

        // Distinct timestamps leave no ties for a stable sort to preserve
        let mut timestamps: Vec<_> = history.iter().map(|sample| sample.timestamp).collect();
        timestamps.sort();
        timestamps.dedup();
        prop_assume!(timestamps.len() == history.len());

        let mut reversed = history.clone();
        reversed.reverse();
        let from_reversed = predictor.predict(&reversed, goal);
        prop_assert_eq!(first.trend, from_reversed.trend);
        prop_assert_eq!(first.goal_projection, from_reversed.goal_projection);
        prop_assert!((first.weekly_change_kg - from_reversed.weekly_change_kg).abs() < 1e-9);
    }
}
