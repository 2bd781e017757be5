// ABOUTME: Removes exact duplicate health data points from a batch
// ABOUTME: Hash buckets narrow candidates, full-field equality decides, first occurrence wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Deduplication
//!
//! Two points are duplicates when every field compares equal, `uuid`
//! included. Points are bucketed by hash and only compared inside a bucket,
//! so a batch costs one hash per point plus an equality check per collision.
//!
//! Survivors keep their input order. A point holding a NaN magnitude never
//! equals anything, itself included, so it always survives.

use health_bridge_core::HealthDataPoint;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::{debug, instrument};

/// For each input position, whether it is the first occurrence of its point
fn first_occurrences(points: &[HealthDataPoint]) -> Vec<bool> {
    let state = RandomState::new();
    let mut buckets: HashMap<u64, Vec<usize>> = HashMap::with_capacity(points.len());

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let bucket = buckets.entry(state.hash_one(point)).or_default();
            let seen = bucket.iter().any(|&earlier| &points[earlier] == point);
            if !seen {
                bucket.push(index);
            }
            !seen
        })
        .collect()
}

/// Drop every point equal to an earlier one, keeping input order
///
/// Idempotent, and the identity on a batch without duplicates.
#[must_use]
#[instrument(skip_all, fields(size = points.len()))]
pub fn deduplicate(points: Vec<HealthDataPoint>) -> Vec<HealthDataPoint> {
    let keep = first_occurrences(&points);
    let survivors: Vec<HealthDataPoint> = points
        .into_iter()
        .zip(keep)
        .filter_map(|(point, first)| first.then_some(point))
        .collect();

    debug!(survivors = survivors.len(), "Deduplicated batch");
    survivors
}

/// Number of points `deduplicate` would drop
#[must_use]
pub fn count_duplicates(points: &[HealthDataPoint]) -> usize {
    first_occurrences(points)
        .into_iter()
        .filter(|first| !first)
        .count()
}
