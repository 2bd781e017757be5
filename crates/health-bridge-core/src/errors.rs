// ABOUTME: Error taxonomy for raw record parsing and health data point assembly
// ABOUTME: Every variant is a recoverable, single-record MalformedRecord failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Error Types
//!
//! Parsing and assembly fail per record. A batch caller collects these errors
//! next to the index of the record that produced them and keeps going.
//!
//! The catalog (units, categories) and the recording-method classifier never
//! fail; they degrade to sentinels, so they have no error type here.

use thiserror::Error;

/// Errors raised while turning a raw native record into a `HealthDataPoint`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthDataError {
    /// A required field is absent or null
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Key (or nested path) of the missing field
        field: String,
    },

    /// A field is present but has the wrong shape
    #[error("Invalid field '{field}': expected {expected}")]
    InvalidField {
        /// Key (or nested path) of the offending field
        field: String,
        /// Description of the expected shape
        expected: &'static str,
    },

    /// An epoch-millisecond timestamp is negative
    #[error("Field '{field}' holds negative timestamp {value}")]
    NegativeTimestamp {
        /// Timestamp key
        field: &'static str,
        /// Offending value in epoch milliseconds
        value: i64,
    },

    /// The interval end precedes its start
    #[error("Inverted interval: date_to {date_to_ms} precedes date_from {date_from_ms}")]
    InvertedInterval {
        /// Interval start in epoch milliseconds
        date_from_ms: i64,
        /// Interval end in epoch milliseconds
        date_to_ms: i64,
    },

    /// An enumerated code is outside a closed table that has no sentinel
    #[error("Unknown code {code} for field '{field}'")]
    UnknownCode {
        /// Key of the coded field
        field: &'static str,
        /// Offending code
        code: i64,
    },
}

impl HealthDataError {
    /// Create a "missing field" error
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an "invalid field" error
    #[must_use]
    pub fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }

    /// Whether this error belongs to the malformed-record class
    ///
    /// Every variant does: inverted intervals, negative timestamps and
    /// unknown closed-table codes are all shapes a record must not have.
    #[must_use]
    pub const fn is_malformed_record(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidField { .. }
                | Self::NegativeTimestamp { .. }
                | Self::InvertedInterval { .. }
                | Self::UnknownCode { .. }
        )
    }

    /// The field this error points at, when it names one
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => Some(field.as_str()),
            Self::NegativeTimestamp { field, .. } | Self::UnknownCode { field, .. } => Some(*field),
            Self::InvertedInterval { .. } => None,
        }
    }
}

/// Result alias for record parsing and assembly
pub type HealthDataResult<T> = Result<T, HealthDataError>;
