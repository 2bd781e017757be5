// ABOUTME: Aggregate workout metrics attachable to a health data point of any type
// ABOUTME: Populated whenever a raw record carries any aggregate workout field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::constants::keys;
use crate::errors::HealthDataResult;
use crate::raw::{insert_opt, RawRecord, RawRecordExt};

use super::value::hash_opt_f64;

/// Raw keys whose presence triggers a workout summary
pub const SUMMARY_KEYS: [&str; 4] = [
    keys::WORKOUT_TYPE,
    keys::TOTAL_DISTANCE,
    keys::TOTAL_ENERGY_BURNED,
    keys::TOTAL_STEPS,
];

/// Distance, energy and steps totals of the session a reading belongs to
///
/// A point can carry a summary regardless of its own data type: a heart rate
/// sample recorded during a workout keeps the workout's aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Activity kind as the platform names it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
    /// Total distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    /// Total energy burned in kilocalories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_energy_burned: Option<f64>,
    /// Total steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<f64>,
}

impl WorkoutSummary {
    /// Extract a summary when any aggregate workout key is present
    ///
    /// # Errors
    /// `InvalidField` when a present aggregate has the wrong shape
    pub fn detect(raw: &RawRecord) -> HealthDataResult<Option<Self>> {
        if !SUMMARY_KEYS.iter().any(|key| raw.has(key)) {
            return Ok(None);
        }
        Ok(Some(Self {
            workout_type: raw.optional_str(keys::WORKOUT_TYPE)?.map(str::to_owned),
            total_distance: raw.optional_f64(keys::TOTAL_DISTANCE)?,
            total_energy_burned: raw.optional_f64(keys::TOTAL_ENERGY_BURNED)?,
            total_steps: raw.optional_f64(keys::TOTAL_STEPS)?,
        }))
    }

    /// Write the populated aggregates into a raw record
    pub fn write_raw(&self, raw: &mut RawRecord) {
        insert_opt(raw, keys::WORKOUT_TYPE, self.workout_type.as_deref());
        insert_opt(raw, keys::TOTAL_DISTANCE, self.total_distance);
        insert_opt(raw, keys::TOTAL_ENERGY_BURNED, self.total_energy_burned);
        insert_opt(raw, keys::TOTAL_STEPS, self.total_steps);
    }

    /// Whether no aggregate is populated
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.workout_type.is_none()
            && self.total_distance.is_none()
            && self.total_energy_burned.is_none()
            && self.total_steps.is_none()
    }

    pub(crate) fn hash_key<H: Hasher>(&self, state: &mut H) {
        self.workout_type.hash(state);
        hash_opt_f64(self.total_distance, state);
        hash_opt_f64(self.total_energy_burned, state);
        hash_opt_f64(self.total_steps, state);
    }
}
