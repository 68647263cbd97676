// ABOUTME: Constants for the prediction tools, re-exporting engine policy defaults
// ABOUTME: Adds service identifiers and presentation formats used by the CLI and service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Engine policy defaults live in `calview_core::constants`; they are
//! re-exported here so callers only need one import path.

pub use calview_core::constants::{formats, prediction, time};

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line prediction tool
    pub const CALVIEW_PREDICT: &str = "calview-predict";
}
