// ABOUTME: Integration tests for batch deduplication
// ABOUTME: Idempotence, order stability, uuid participation, NaN handling and duplicate counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, heart_rate};
use health_bridge::model::models::Metadata;
use health_bridge::model::{HealthDataPointBuilder, HealthDataType, HealthPlatform, HealthValue};
use health_bridge::{count_duplicates, deduplicate};
use serde_json::json;

#[test]
fn test_batch_without_duplicates_is_unchanged() {
    let points = vec![
        heart_rate("a", 60.0),
        heart_rate("b", 61.0),
        heart_rate("c", 62.0),
    ];
    assert_eq!(deduplicate(points.clone()), points);
    assert_eq!(count_duplicates(&points), 0);
}

#[test]
fn test_first_occurrence_wins_and_order_is_kept() {
    let points = vec![
        heart_rate("a", 60.0),
        heart_rate("b", 61.0),
        heart_rate("a", 60.0),
        heart_rate("c", 62.0),
        heart_rate("b", 61.0),
    ];
    assert_eq!(count_duplicates(&points), 2);

    let survivors = deduplicate(points);
    let uuids: Vec<_> = survivors.iter().map(|p| p.uuid()).collect();
    assert_eq!(uuids, ["a", "b", "c"]);
}

#[test]
fn test_deduplicate_is_idempotent() {
    let points: Vec<_> = (0..50)
        .map(|i| heart_rate(&format!("hr-{}", i % 7), f64::from(60 + i % 3)))
        .collect();
    let once = deduplicate(points);
    let twice = deduplicate(once.clone());
    assert_eq!(once, twice);
    assert_eq!(count_duplicates(&once), 0);
}

#[test]
fn test_uuid_participates_in_equality() {
    let points = vec![heart_rate("a", 60.0), heart_rate("b", 60.0)];
    assert_eq!(deduplicate(points).len(), 2);
}

#[test]
fn test_empty_uuids_merge_when_everything_else_matches() {
    let points = vec![heart_rate("", 60.0), heart_rate("", 60.0)];
    assert_eq!(deduplicate(points).len(), 1);

    let points = vec![heart_rate("", 60.0), heart_rate("", 60.5)];
    assert_eq!(deduplicate(points).len(), 2);
}

#[test]
fn test_nan_points_are_never_merged() {
    let points = vec![heart_rate("a", f64::NAN), heart_rate("a", f64::NAN)];
    assert_eq!(count_duplicates(&points), 0);
    assert_eq!(deduplicate(points).len(), 2);
}

#[test]
fn test_metadata_values_distinguish_points() {
    let with_metadata = |value: i64| {
        let metadata: Metadata = [("HKWasUserEntered".to_owned(), json!(value))]
            .into_iter()
            .collect();
        HealthDataPointBuilder::new(
            HealthDataType::Weight,
            HealthValue::numeric(70.0),
            at(0),
            at(0),
            HealthPlatform::GoogleHealthConnect,
        )
        .uuid("w")
        .metadata(Some(metadata))
        .build()
        .unwrap()
    };

    // Same metadata keys hash alike; differing values must still survive
    let points = vec![with_metadata(0), with_metadata(1), with_metadata(0)];
    let survivors = deduplicate(points);
    assert_eq!(survivors.len(), 2);
    assert_eq!(
        survivors[1].metadata().unwrap().get("HKWasUserEntered"),
        Some(&json!(1))
    );
}

#[test]
fn test_signed_zero_values_merge() {
    let points = vec![heart_rate("z", 0.0), heart_rate("z", -0.0)];
    assert_eq!(deduplicate(points).len(), 1);
}
