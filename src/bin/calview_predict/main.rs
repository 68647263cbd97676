// ABOUTME: calview-predict - command-line weight trend prediction over a JSON weight log
// ABOUTME: Prints a prediction summary or an explanation of every trend pipeline stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Predict progress toward a 70 kg goal
//! calview-predict predict --history weights.json --goal 70
//!
//! # Same, as JSON, evaluated as of a fixed instant
//! calview-predict predict --history weights.json --goal 70 --now 2026-03-01T08:00:00Z --format json
//!
//! # Show the fitted line after each heuristic
//! calview-predict explain --history weights.json
//! ```

mod commands;
mod helpers;

use calview_trends::errors::AppResult;
use calview_trends::logging::LoggingConfig;
use calview_trends::PredictionConfig;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "calview-predict",
    about = "Weight trend prediction",
    long_about = "Fits a damped, capped and anchored weight trend to a JSON weight log and projects progress toward a goal weight."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Predict the 30-day weight and time to goal
    Predict {
        /// JSON weight history file
        #[arg(long)]
        history: PathBuf,

        /// Goal weight in kilograms
        #[arg(long)]
        goal: f64,

        /// Evaluate as of this RFC 3339 instant instead of the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the trend line after each pipeline stage
    Explain {
        /// JSON weight history file
        #[arg(long)]
        history: PathBuf,

        /// Evaluate as of this RFC 3339 instant instead of the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e);
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = PredictionConfig::load()?;

    match command {
        Command::Predict {
            history,
            goal,
            now,
            format,
        } => commands::predict::run(&history, goal, now, config, format),
        Command::Explain {
            history,
            now,
            format,
        } => commands::explain::run(&history, now, config, format),
    }
}
