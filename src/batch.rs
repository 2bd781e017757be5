// ABOUTME: Batch assembly of raw native records into health data points
// ABOUTME: Per-record failures are collected with their index; large batches run on rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Batch Pipeline
//!
//! A batch never fails as a whole. Every record either becomes a point or a
//! [`RecordFailure`] naming its input index, and both lists keep input order.

use health_bridge_core::{
    HealthDataError, HealthDataPoint, HealthDataType, HealthPlatform, RawRecord,
};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, enabled, instrument, warn, Level};

use crate::config::BridgeConfig;
use crate::dedup::{count_duplicates, deduplicate};

/// A record that could not be assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Position of the record in the input batch
    pub index: usize,
    /// Why assembly failed
    pub error: HealthDataError,
}

impl fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.index, self.error)
    }
}

/// Result of assembling a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Assembled points, in input order
    pub points: Vec<HealthDataPoint>,
    /// Failed records, in input order
    pub failures: Vec<RecordFailure>,
}

impl BatchOutcome {
    /// Number of records that failed
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Whether every record was assembled
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn collect(results: Vec<Result<HealthDataPoint, HealthDataError>>) -> Self {
        let mut outcome = Self {
            points: Vec::with_capacity(results.len()),
            failures: Vec::new(),
        };
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(point) => outcome.points.push(point),
                Err(error) => outcome.failures.push(RecordFailure { index, error }),
            }
        }
        outcome
    }
}

/// Assemble every record of a single-type batch
///
/// Batches at or above `config.parallel_threshold` are assembled on the
/// rayon pool; the outcome is identical either way.
#[must_use]
#[instrument(skip_all, fields(data_type = %data_type, platform = %platform, size = records.len()))]
pub fn assemble_batch(
    data_type: &HealthDataType,
    records: &[RawRecord],
    platform: HealthPlatform,
    device_id: &str,
    config: &BridgeConfig,
) -> BatchOutcome {
    let assemble = |raw: &RawRecord| HealthDataPoint::assemble(data_type, raw, platform, device_id);

    let results: Vec<_> = if config.is_parallel(records.len()) {
        records.par_iter().map(assemble).collect()
    } else {
        records.iter().map(assemble).collect()
    };
    let outcome = BatchOutcome::collect(results);

    for failure in &outcome.failures {
        warn!(
            index = failure.index,
            field = failure.error.field(),
            error = %failure.error,
            "Skipping malformed record"
        );
    }
    debug!(
        assembled = outcome.points.len(),
        failed = outcome.failure_count(),
        parallel = config.is_parallel(records.len()),
        "Assembled batch"
    );

    outcome
}

/// Assemble a batch, then deduplicate the points when `config.deduplicate` is set
#[must_use]
pub fn normalize(
    data_type: &HealthDataType,
    records: &[RawRecord],
    platform: HealthPlatform,
    device_id: &str,
    config: &BridgeConfig,
) -> BatchOutcome {
    let mut outcome = assemble_batch(data_type, records, platform, device_id, config);

    if config.deduplicate {
        let before = outcome.points.len();
        outcome.points = deduplicate(outcome.points);
        debug!(removed = before - outcome.points.len(), "Removed duplicate points");
    } else if enabled!(Level::DEBUG) {
        debug!(
            duplicates = count_duplicates(&outcome.points),
            "Deduplication disabled, duplicates kept"
        );
    }

    outcome
}
