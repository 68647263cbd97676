// ABOUTME: predict subcommand - summary of projected weight and time to goal
// ABOUTME: Reads the JSON history, runs the prediction service, prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::resolve_clock;
use crate::helpers::display::display_summary;
use crate::OutputFormat;
use calview_trends::errors::AppResult;
use calview_trends::{JsonFileWeightHistory, PredictionConfig, WeightPredictionService};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Print the prediction summary for `history` and `goal`
///
/// # Errors
///
/// Returns an error if the history file cannot be read or parsed
pub fn run(
    history: &Path,
    goal: f64,
    now: Option<DateTime<Utc>>,
    config: PredictionConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let service = WeightPredictionService::with_clock(
        JsonFileWeightHistory::new(history),
        config,
        resolve_clock(now),
    );
    let summary = service.summarize(goal)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => display_summary(&summary),
    }
    Ok(())
}
