// ABOUTME: Shared test utilities for the health bridge integration tests
// ABOUTME: Raw record fixtures and health data point builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `health_bridge`

use chrono::{DateTime, Utc};
use health_bridge::model::{
    HealthDataPoint, HealthDataPointBuilder, HealthDataType, HealthPlatform, HealthValue,
    RawRecord, RecordingMethod,
};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Timestamp from epoch milliseconds
pub fn at(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap()
}

/// Convert a JSON object literal into a raw record
pub fn record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

/// A raw step-count record
pub fn steps_record(uuid: &str, steps: f64, date_from: i64, date_to: i64) -> RawRecord {
    record(json!({
        "uuid": uuid,
        "value": steps,
        "date_from": date_from,
        "date_to": date_to,
        "source_id": "com.apple.health",
        "source_name": "Health",
        "recording_method": 2
    }))
}

/// A heart-rate point with the given uuid and magnitude
pub fn heart_rate(uuid: &str, bpm: f64) -> HealthDataPoint {
    HealthDataPointBuilder::new(
        HealthDataType::HeartRate,
        HealthValue::numeric(bpm),
        at(1_700_000_000_000),
        at(1_700_000_000_000),
        HealthPlatform::AppleHealth,
    )
    .uuid(uuid)
    .source_device_id("watch-1")
    .source("com.apple.health", "Health")
    .recording_method(RecordingMethod::Automatic)
    .build()
    .unwrap()
}
