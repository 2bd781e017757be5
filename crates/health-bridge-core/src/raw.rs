// ABOUTME: Loosely-typed raw record as handed over by the native platform layer
// ABOUTME: Typed field accessors that report missing or mis-shaped fields as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Raw record access
//!
//! The native layer hands over each record as a JSON-like key/value mapping.
//! Accessors here distinguish three cases for every key: absent (or `null`),
//! present with the expected shape, and present with the wrong shape. Only
//! the last is an error for optional fields.

use serde_json::{Map, Value};

use crate::errors::{HealthDataError, HealthDataResult};

/// A raw, loosely-typed native record
pub type RawRecord = Map<String, Value>;

/// Typed read access to a [`RawRecord`]
pub trait RawRecordExt {
    /// The value under `key`, treating `null` as absent
    fn present(&self, key: &str) -> Option<&Value>;

    /// Whether `key` holds a non-null value
    fn has(&self, key: &str) -> bool {
        self.present(key).is_some()
    }

    /// Required floating-point field
    ///
    /// # Errors
    /// `MissingField` when absent, `InvalidField` when not numeric
    fn required_f64(&self, key: &str) -> HealthDataResult<f64> {
        self.optional_f64(key)?
            .ok_or_else(|| HealthDataError::missing(key))
    }

    /// Optional floating-point field
    ///
    /// # Errors
    /// `InvalidField` when present but not numeric
    fn optional_f64(&self, key: &str) -> HealthDataResult<Option<f64>> {
        self.present(key).map(|v| value_as_f64(v, key)).transpose()
    }

    /// Required integer field
    ///
    /// # Errors
    /// `MissingField` when absent, `InvalidField` when not an integer
    fn required_i64(&self, key: &str) -> HealthDataResult<i64> {
        self.optional_i64(key)?
            .ok_or_else(|| HealthDataError::missing(key))
    }

    /// Optional integer field
    ///
    /// # Errors
    /// `InvalidField` when present but not an integer
    fn optional_i64(&self, key: &str) -> HealthDataResult<Option<i64>> {
        self.present(key)
            .map(|v| {
                v.as_i64()
                    .ok_or_else(|| HealthDataError::invalid(key, "an integer"))
            })
            .transpose()
    }

    /// Required string field
    ///
    /// # Errors
    /// `MissingField` when absent, `InvalidField` when not a string
    fn required_str(&self, key: &str) -> HealthDataResult<&str> {
        self.optional_str(key)?
            .ok_or_else(|| HealthDataError::missing(key))
    }

    /// Optional string field
    ///
    /// # Errors
    /// `InvalidField` when present but not a string
    fn optional_str(&self, key: &str) -> HealthDataResult<Option<&str>> {
        self.present(key)
            .map(|v| {
                v.as_str()
                    .ok_or_else(|| HealthDataError::invalid(key, "a string"))
            })
            .transpose()
    }

    /// Optional boolean field
    ///
    /// # Errors
    /// `InvalidField` when present but not a boolean
    fn optional_bool(&self, key: &str) -> HealthDataResult<Option<bool>> {
        self.present(key)
            .map(|v| {
                v.as_bool()
                    .ok_or_else(|| HealthDataError::invalid(key, "a boolean"))
            })
            .transpose()
    }

    /// Required array field
    ///
    /// # Errors
    /// `MissingField` when absent, `InvalidField` when not an array
    fn required_array(&self, key: &str) -> HealthDataResult<&[Value]> {
        match self.present(key) {
            None => Err(HealthDataError::missing(key)),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(HealthDataError::invalid(key, "an array")),
        }
    }

    /// Optional nested mapping
    ///
    /// # Errors
    /// `InvalidField` when present but not a mapping
    fn optional_object(&self, key: &str) -> HealthDataResult<Option<&RawRecord>> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(HealthDataError::invalid(key, "a mapping")),
        }
    }

    /// Required nested mapping
    ///
    /// # Errors
    /// `MissingField` when absent, `InvalidField` when not a mapping
    fn required_object(&self, key: &str) -> HealthDataResult<&RawRecord> {
        self.optional_object(key)?
            .ok_or_else(|| HealthDataError::missing(key))
    }
}

impl RawRecordExt for RawRecord {
    fn present(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}

/// Read a numeric JSON value, naming `path` on failure
///
/// # Errors
/// `InvalidField` when `value` is not a number
pub fn value_as_f64(value: &Value, path: &str) -> HealthDataResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| HealthDataError::invalid(path, "a number"))
}

/// Read a numeric-or-null JSON value, naming `path` on failure
///
/// # Errors
/// `InvalidField` when `value` is neither a number nor null
pub fn value_as_optional_f64(value: &Value, path: &str) -> HealthDataResult<Option<f64>> {
    if value.is_null() {
        Ok(None)
    } else {
        value_as_f64(value, path).map(Some)
    }
}

/// Read a nested mapping element of an array, naming `path` on failure
///
/// # Errors
/// `InvalidField` when `value` is not a mapping
pub fn value_as_record<'a>(value: &'a Value, path: &str) -> HealthDataResult<&'a RawRecord> {
    value
        .as_object()
        .ok_or_else(|| HealthDataError::invalid(path, "a mapping"))
}

/// Prefix the field named by a nested record's error with its parent path
#[must_use]
pub fn nest(parent: &str, error: HealthDataError) -> HealthDataError {
    match error {
        HealthDataError::MissingField { field } => HealthDataError::MissingField {
            field: format!("{parent}.{field}"),
        },
        HealthDataError::InvalidField { field, expected } => HealthDataError::InvalidField {
            field: format!("{parent}.{field}"),
            expected,
        },
        other => other,
    }
}

/// Insert `value` under `key` when it is present
pub fn insert_opt<V: Into<Value>>(raw: &mut RawRecord, key: &str, value: Option<V>) {
    if let Some(value) = value {
        raw.insert(key.to_owned(), value.into());
    }
}
