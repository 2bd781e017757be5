// ABOUTME: Main library entry point for the health bridge normalization pipeline
// ABOUTME: Batch assembly, deduplication, configuration, input documents and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Bridge
//!
//! Normalizes records read from Apple Health and Google Health Connect into
//! one unified model, then removes exact duplicates.
//!
//! ## Workspace
//!
//! - [`health_bridge_core`]: the unified model and per-record assembly
//! - [`health_bridge_platforms`]: platform availability and the write path
//! - this crate: batch pipeline, dedup, configuration and the CLI
//!
//! ## Example
//!
//! ```rust
//! use health_bridge::{normalize, BridgeConfig};
//! use health_bridge::model::{HealthDataType, HealthPlatform, RawRecord};
//! use serde_json::json;
//!
//! let record: RawRecord = serde_json::from_value(json!({
//!     "value": 42, "date_from": 1_000, "date_to": 1_000,
//!     "source_id": "a", "source_name": "A"
//! }))
//! .unwrap();
//!
//! let outcome = normalize(
//!     &HealthDataType::Steps,
//!     &[record.clone(), record],
//!     HealthPlatform::AppleHealth,
//!     "device",
//!     &BridgeConfig::default(),
//! );
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.points.len(), 1);
//! ```

/// Batch assembly and the normalize pipeline
pub mod batch;

/// Environment configuration
pub mod config;

/// Duplicate removal
pub mod dedup;

/// Input document parsing
pub mod input;

/// Tracing subscriber setup for binaries
pub mod logging;

pub use health_bridge_core as model;
pub use health_bridge_platforms as platforms;

pub use batch::{assemble_batch, normalize, BatchOutcome, RecordFailure};
pub use config::BridgeConfig;
pub use dedup::{count_duplicates, deduplicate};
pub use input::{InputError, RecordBatch};
pub use logging::{LogFormat, LoggingConfig};
