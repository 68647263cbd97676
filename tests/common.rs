// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builds weight histories relative to a fixed base instant and configures quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use calview_trends::logging::LoggingConfig;
use calview_trends::{FixedClock, PredictionConfig, WeightPredictor, WeightSample};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Another test binary in the same process may already own the subscriber
        let _ = LoggingConfig::default().with_level("warn").init();
    });
}

/// Instant every test history is measured from
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap()
}

/// `base_time()` plus whole days
pub fn day(offset: i64) -> DateTime<Utc> {
    base_time() + Duration::days(offset)
}

/// Samples from `(day offset, weight)` pairs
pub fn samples(entries: &[(i64, f64)]) -> Vec<WeightSample> {
    entries
        .iter()
        .map(|&(offset, weight)| WeightSample::new(day(offset), weight))
        .collect()
}

/// Default-policy predictor frozen at `now`
pub fn predictor_at(now: DateTime<Utc>) -> WeightPredictor<FixedClock> {
    WeightPredictor::with_clock(PredictionConfig::default(), FixedClock::new(now))
}

/// Float comparison with an absolute tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
