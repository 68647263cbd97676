// ABOUTME: Command implementations for calview-predict
// ABOUTME: One module per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod explain;
pub mod predict;

use calview_trends::{Clock, FixedClock, SystemClock};
use chrono::{DateTime, Utc};

/// `--now` if given, otherwise the wall clock, read once
#[must_use]
pub fn resolve_clock(now: Option<DateTime<Utc>>) -> FixedClock {
    FixedClock::new(now.unwrap_or_else(|| SystemClock.now()))
}
