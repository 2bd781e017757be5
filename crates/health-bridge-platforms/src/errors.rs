// ABOUTME: Validation errors raised while encoding typed write requests
// ABOUTME: Interval, type, platform and value checks that run before any raw record is produced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_bridge_core::HealthPlatform;
use thiserror::Error;

/// Errors rejecting a write request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// An interval-encoded observation has zero length
    #[error("Interval for {data_type} must have a positive length")]
    EmptyInterval {
        /// Logical data type name
        data_type: String,
    },

    /// The interval end precedes its start
    #[error("Inverted interval: end {end_ms} precedes start {start_ms}")]
    InvertedInterval {
        /// Start in epoch milliseconds
        start_ms: i64,
        /// End in epoch milliseconds
        end_ms: i64,
    },

    /// The request kind cannot carry this data type
    #[error("{data_type} cannot be written as a {request} request")]
    UnsupportedType {
        /// Logical data type name
        data_type: String,
        /// Request kind
        request: &'static str,
    },

    /// The platform has no equivalent for this data type
    #[error("{data_type} is not available on {platform}")]
    UnsupportedOnPlatform {
        /// Logical data type name
        data_type: String,
        /// Target platform
        platform: HealthPlatform,
    },

    /// A value cannot be expressed in the native record
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Field being written
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl WriteError {
    /// Create an "invalid value" error
    #[must_use]
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for write-request encoding
pub type WriteResult<T> = Result<T, WriteError>;
