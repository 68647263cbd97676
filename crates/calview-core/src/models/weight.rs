// ABOUTME: Weight sample model representing one timestamped body-weight measurement
// ABOUTME: Serializes timestamps as RFC 3339 and accepts epoch milliseconds on input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, TimeZone, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

/// A single body-weight measurement
///
/// Samples are immutable once created. The prediction engine only borrows
/// them; it never reorders, mutates or persists the caller's collection.
/// A positive `weight` is the caller's responsibility and is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// When the measurement was taken
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Body weight in kilograms
    pub weight: f64,
    /// Optional free-text note ("Morning weight", "After workout")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightSample {
    /// Create a sample without a note
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, weight: f64) -> Self {
        Self {
            timestamp,
            weight,
            note: None,
        }
    }

    /// Create a sample from an epoch-millisecond timestamp
    ///
    /// Returns `None` if the timestamp is outside chrono's representable range.
    #[must_use]
    pub fn from_epoch_millis(millis: i64, weight: f64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|timestamp| Self::new(timestamp, weight))
    }

    /// Attach a note to this sample
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Timestamp as epoch milliseconds
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    EpochMillis(i64),
    Rfc3339(DateTime<Utc>),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match TimestampRepr::deserialize(deserializer)? {
        TimestampRepr::Rfc3339(timestamp) => Ok(timestamp),
        TimestampRepr::EpochMillis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| DeError::custom(format!("timestamp out of range: {millis}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_epoch_millis_and_rfc3339() {
        let json = r#"[
            {"timestamp": 1767254400000, "weight": 80.5},
            {"timestamp": "2026-01-01T08:00:00Z", "weight": 80.1, "note": "Morning weight"}
        ]"#;
        let samples: Vec<WeightSample> = serde_json::from_str(json).unwrap();

        assert_eq!(samples[0].epoch_millis(), 1_767_254_400_000);
        assert_eq!(samples[1].note.as_deref(), Some("Morning weight"));
        assert_eq!(
            samples[1].timestamp,
            Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_serialize_omits_missing_note() {
        let sample = WeightSample::from_epoch_millis(0, 70.0).unwrap();
        let json = serde_json::to_string(&sample).unwrap();
        assert!(!json.contains("note"));
        assert!(json.contains("1970-01-01T00:00:00Z"));
    }
}
