// ABOUTME: Numeric value variant holding a single floating-point magnitude
// ABOUTME: Default variant for every type without a structured payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::keys;
use crate::errors::HealthDataResult;
use crate::raw::{RawRecord, RawRecordExt};

/// A single floating-point magnitude in the type's default unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NumericValue {
    /// The magnitude
    pub numeric_value: f64,
}

impl NumericValue {
    /// Wrap a magnitude
    #[must_use]
    pub const fn new(numeric_value: f64) -> Self {
        Self { numeric_value }
    }

    /// Read the generic `value` field
    ///
    /// # Errors
    /// `MissingField` or `InvalidField` when `value` is absent or not numeric
    pub fn parse(raw: &RawRecord) -> HealthDataResult<Self> {
        raw.required_f64(keys::VALUE).map(Self::new)
    }

    /// Write the generic `value` field
    pub fn write_raw(&self, raw: &mut RawRecord) {
        raw.insert(keys::VALUE.to_owned(), self.numeric_value.into());
    }
}
