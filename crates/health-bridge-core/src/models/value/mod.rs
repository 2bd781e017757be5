// ABOUTME: Closed sum type of value payloads, dispatched by logical data type category
// ABOUTME: Each variant owns its raw-record parser and writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Value Variants
//!
//! The variant a record parses into is chosen from its
//! [`HealthDataCategory`], never from the payload's shape. Types outside the
//! catalog, and duration types before their value is derived, parse as
//! [`NumericValue`].

mod audiogram;
mod ecg;
mod insulin;
mod menstruation;
mod numeric;
mod nutrition;
mod route;
mod workout;

pub use audiogram::{AudiogramSample, AudiogramValue};
pub use ecg::{EcgClassification, ElectrocardiogramValue, VoltageSample};
pub use insulin::{InsulinDeliveryReason, InsulinDeliveryValue};
pub use menstruation::{MenstrualFlow, MenstruationFlowValue};
pub use numeric::NumericValue;
pub use nutrition::{MealType, NutritionValue};
pub use route::{RouteLocation, WorkoutRouteValue};
pub use workout::{WorkoutActivityType, WorkoutValue};

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::mem;

use crate::constants::keys;
use crate::errors::HealthDataResult;
use crate::models::catalog::HealthDataCategory;
use crate::models::data_type::HealthDataType;
use crate::models::platform::HealthPlatform;
use crate::raw::{RawRecord, RawRecordExt};

/// Type-specific payload of a health data point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "value_type", rename_all = "snake_case")]
pub enum HealthValue {
    /// Single magnitude
    Numeric(NumericValue),
    /// Workout session
    Workout(WorkoutValue),
    /// Meal
    Nutrition(NutritionValue),
    /// ECG recording
    Electrocardiogram(ElectrocardiogramValue),
    /// Hearing test
    Audiogram(AudiogramValue),
    /// Insulin delivery
    InsulinDelivery(InsulinDeliveryValue),
    /// Menstrual flow
    MenstruationFlow(MenstruationFlowValue),
    /// GPS route
    WorkoutRoute(WorkoutRouteValue),
}

impl HealthValue {
    /// Shorthand for a numeric value
    #[must_use]
    pub const fn numeric(value: f64) -> Self {
        Self::Numeric(NumericValue::new(value))
    }

    /// Parse the payload of `raw` as the variant `data_type` selects
    ///
    /// For WORKOUT_ROUTE the payload is the nested `route` sub-record; this
    /// unwraps it before handing it to the route parser.
    ///
    /// # Errors
    /// Any `HealthDataError` the selected variant's parser raises
    pub fn parse(
        data_type: &HealthDataType,
        raw: &RawRecord,
        platform: HealthPlatform,
    ) -> HealthDataResult<Self> {
        match data_type.category() {
            HealthDataCategory::Numeric
            | HealthDataCategory::Duration
            | HealthDataCategory::Unknown => NumericValue::parse(raw).map(Self::Numeric),
            HealthDataCategory::Workout => WorkoutValue::parse(raw).map(Self::Workout),
            HealthDataCategory::WorkoutRoute => {
                let route = raw.required_object(keys::ROUTE)?;
                WorkoutRouteValue::parse(route).map(Self::WorkoutRoute)
            }
            HealthDataCategory::Nutrition => NutritionValue::parse(raw).map(Self::Nutrition),
            HealthDataCategory::Electrocardiogram => {
                ElectrocardiogramValue::parse(raw).map(Self::Electrocardiogram)
            }
            HealthDataCategory::Audiogram => AudiogramValue::parse(raw).map(Self::Audiogram),
            HealthDataCategory::InsulinDelivery => {
                InsulinDeliveryValue::parse(raw).map(Self::InsulinDelivery)
            }
            HealthDataCategory::MenstruationFlow => {
                MenstruationFlowValue::parse(raw, platform).map(Self::MenstruationFlow)
            }
        }
    }

    /// Write the payload fields into `raw` in the layout `parse` reads
    pub fn write_raw(&self, raw: &mut RawRecord, platform: HealthPlatform) {
        match self {
            Self::Numeric(value) => value.write_raw(raw),
            Self::Workout(value) => value.write_raw(raw),
            Self::Nutrition(value) => value.write_raw(raw),
            Self::Electrocardiogram(value) => value.write_raw(raw),
            Self::Audiogram(value) => value.write_raw(raw),
            Self::InsulinDelivery(value) => value.write_raw(raw),
            Self::MenstruationFlow(value) => value.write_raw(raw, platform),
            Self::WorkoutRoute(value) => value.write_raw(raw),
        }
    }

    /// The magnitude of a numeric value
    #[must_use]
    pub const fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(value.numeric_value),
            _ => None,
        }
    }

    /// Snake_case name of the variant
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Workout(_) => "workout",
            Self::Nutrition(_) => "nutrition",
            Self::Electrocardiogram(_) => "electrocardiogram",
            Self::Audiogram(_) => "audiogram",
            Self::InsulinDelivery(_) => "insulin_delivery",
            Self::MenstruationFlow(_) => "menstruation_flow",
            Self::WorkoutRoute(_) => "workout_route",
        }
    }

    /// Feed the identifying parts of this value into `state`
    ///
    /// Hashes a subset of what `PartialEq` compares, so equal values always
    /// hash equally.
    pub fn hash_key<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Numeric(value) => hash_f64(value.numeric_value, state),
            Self::Workout(value) => {
                value.workout_activity_type.hash(state);
                hash_opt_f64(value.total_distance, state);
                hash_opt_f64(value.total_energy_burned, state);
                hash_opt_f64(value.total_steps, state);
            }
            Self::Nutrition(value) => {
                value.meal_type.hash(state);
                value.name.hash(state);
                hash_opt_f64(value.calories, state);
            }
            Self::Electrocardiogram(value) => {
                value.classification.hash(state);
                value.voltage_values.len().hash(state);
            }
            Self::Audiogram(value) => value.samples.len().hash(state),
            Self::InsulinDelivery(value) => {
                hash_f64(value.units, state);
                value.reason.hash(state);
            }
            Self::MenstruationFlow(value) => value.hash(state),
            Self::WorkoutRoute(value) => value.locations.len().hash(state),
        }
    }
}

/// Hash a float so that values comparing equal hash equally
///
/// `0.0 == -0.0`, so both hash as positive zero. NaN never compares equal
/// and may hash however it likes.
pub fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let normalized = if value == 0.0 { 0.0_f64 } else { value };
    normalized.to_bits().hash(state);
}

/// [`hash_f64`] for optional floats
pub fn hash_opt_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    match value {
        Some(value) => {
            1_u8.hash(state);
            hash_f64(value, state);
        }
        None => 0_u8.hash(state),
    }
}
