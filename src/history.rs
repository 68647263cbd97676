// ABOUTME: Read-only weight history sources feeding the prediction engine
// ABOUTME: WeightHistorySource trait with in-memory and JSON-file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weight History Sources
//!
//! The prediction engine consumes a plain slice of samples; where the samples
//! come from is the caller's business. This module defines the read side of
//! the measurement log as a trait so services can be wired to any store.
//!
//! A JSON history file is an array of samples. Timestamps may be RFC 3339
//! strings or epoch milliseconds:
//!
//! ```json
//! [
//!   {"timestamp": "2026-01-01T07:30:00Z", "weight": 81.2, "note": "Morning weight"},
//!   {"timestamp": 1767429000000, "weight": 80.9}
//! ]
//! ```

use calview_core::errors::{AppError, AppResult};
use calview_core::models::WeightSample;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read access to a log of weight measurements
///
/// Implementations never modify the log.
pub trait WeightHistorySource: Send + Sync {
    /// Every recorded sample, in storage order
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read
    fn all_samples(&self) -> AppResult<Vec<WeightSample>>;

    /// Samples recorded at or after `start`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read
    fn samples_since(&self, start: DateTime<Utc>) -> AppResult<Vec<WeightSample>> {
        let mut samples = self.all_samples()?;
        samples.retain(|sample| sample.timestamp >= start);
        Ok(samples)
    }

    /// The most recent sample, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read
    fn latest(&self) -> AppResult<Option<WeightSample>> {
        Ok(self
            .all_samples()?
            .into_iter()
            .max_by_key(|sample| sample.timestamp))
    }
}

/// History held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryWeightHistory {
    samples: Vec<WeightSample>,
}

impl InMemoryWeightHistory {
    /// Wrap an existing collection of samples
    #[must_use]
    pub const fn new(samples: Vec<WeightSample>) -> Self {
        Self { samples }
    }

    /// Borrow the samples without copying
    #[must_use]
    pub fn as_slice(&self) -> &[WeightSample] {
        &self.samples
    }
}

impl FromIterator<WeightSample> for InMemoryWeightHistory {
    fn from_iter<I: IntoIterator<Item = WeightSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl WeightHistorySource for InMemoryWeightHistory {
    fn all_samples(&self) -> AppResult<Vec<WeightSample>> {
        Ok(self.samples.clone())
    }

    fn samples_since(&self, start: DateTime<Utc>) -> AppResult<Vec<WeightSample>> {
        Ok(self
            .samples
            .iter()
            .filter(|sample| sample.timestamp >= start)
            .cloned()
            .collect())
    }
}

/// History stored as a JSON array on disk, re-read on every call
#[derive(Debug, Clone)]
pub struct JsonFileWeightHistory {
    path: PathBuf,
}

impl JsonFileWeightHistory {
    /// Source backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the history file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON array of samples
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error if the text is not an array of samples
    pub fn parse(json: &str) -> AppResult<Vec<WeightSample>> {
        serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("weight history is not a JSON sample array: {e}"))
                .with_source(e)
        })
    }
}

impl WeightHistorySource for JsonFileWeightHistory {
    fn all_samples(&self) -> AppResult<Vec<WeightSample>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            let message = format!("cannot read {}: {e}", self.path.display());
            AppError::from(e).with_message(message)
        })?;
        let samples = Self::parse(&contents)?;
        debug!(
            path = %self.path.display(),
            samples = samples.len(),
            "Loaded weight history"
        );
        Ok(samples)
    }
}
