// ABOUTME: Benchmark fixtures generating realistic native health records
// ABOUTME: Deterministic heart-rate batches with a controlled share of exact duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating native health records.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{DateTime, Duration, Utc};
use health_bridge::model::RawRecord;
use serde_json::{json, Value};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecordBatchSize {
    /// A few hundred records - one sync of a single type
    Small,
    /// A day of per-minute samples
    Medium,
    /// Several days of per-minute samples
    Large,
}

impl RecordBatchSize {
    /// All sizes, smallest first
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 300,
            Self::Medium => 1_440,
            Self::Large => 5_000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "300",
            Self::Medium => "1440",
            Self::Large => "5000",
        }
    }
}

fn base_date() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// One heart-rate record per minute; every `duplicate_every`-th record repeats its predecessor
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn heart_rate_records(size: RecordBatchSize, duplicate_every: usize) -> Vec<RawRecord> {
    let base = base_date();
    let mut records = Vec::with_capacity(size.count());
    for index in 0..size.count() {
        let sample = if duplicate_every > 0 && index % duplicate_every == duplicate_every - 1 {
            index - 1
        } else {
            index
        };
        let at = (base + Duration::minutes(sample as i64)).timestamp_millis();
        let json = json!({
            "uuid": format!("hr-{sample}"),
            "value": 55.0 + ((sample * 17) % 90) as f64,
            "date_from": at,
            "date_to": at,
            "source_id": "com.apple.health.watch",
            "source_name": "Apple Watch",
            "recording_method": 2,
            "metadata": { "HKMetadataKeyHeartRateMotionContext": sample % 3 },
            "productType": "Watch7,1",
            "osVersion": "11.0"
        });
        if let Value::Object(record) = json {
            records.push(record);
        }
    }
    records
}
