// ABOUTME: Core types for normalizing Apple Health and Health Connect records
// ABOUTME: Data type catalog, value variants, health data point assembly, and error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Bridge Core
//!
//! Turns the loosely-typed records the native health platforms hand over
//! into one strongly-typed model, and back.
//!
//! ## Modules
//!
//! - **models**: logical data types, units, the unit & category catalog,
//!   value variants, and [`HealthDataPoint`](models::HealthDataPoint)
//! - **raw**: the raw record type and its typed field accessors
//! - **errors**: the per-record error taxonomy
//! - **constants**: raw record keys, device defaults, and native code tables
//!
//! Every operation here is pure: no I/O, no shared state, safe to call from
//! any number of threads over disjoint inputs.

/// Per-record parsing and assembly errors
pub mod errors;

/// Raw record keys, defaults, unit conversions, and native code tables
pub mod constants;

/// Unified health data model
pub mod models;

/// Raw native record access
pub mod raw;

pub use errors::{HealthDataError, HealthDataResult};
pub use models::{
    HealthDataCategory, HealthDataPoint, HealthDataPointBuilder, HealthDataType, HealthDataUnit,
    HealthPlatform, HealthValue, RecordingMethod, WorkoutSummary,
};
pub use raw::{RawRecord, RawRecordExt};
