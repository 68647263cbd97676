// ABOUTME: explain subcommand - trend line after fit, damping, capping, and anchoring
// ABOUTME: Useful for checking why a prediction moved when new weights are logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::resolve_clock;
use crate::helpers::display::display_analysis;
use crate::OutputFormat;
use calview_trends::errors::AppResult;
use calview_trends::{JsonFileWeightHistory, PredictionConfig, WeightPredictionService};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Print every trend pipeline stage for `history`
///
/// # Errors
///
/// Returns an error if the history file cannot be read or parsed
pub fn run(
    history: &Path,
    now: Option<DateTime<Utc>>,
    config: PredictionConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let min_samples = config.min_samples;
    let service = WeightPredictionService::with_clock(
        JsonFileWeightHistory::new(history),
        config,
        resolve_clock(now),
    );

    match (service.explain()?, format) {
        (Some(analysis), OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        (Some(analysis), OutputFormat::Text) => display_analysis(&analysis),
        (None, OutputFormat::Json) => println!("null"),
        (None, OutputFormat::Text) => {
            println!("Not enough data: at least {min_samples} weight samples are needed.");
        }
    }
    Ok(())
}
