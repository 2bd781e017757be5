// ABOUTME: Unified health data model: types, units, catalog, values and data points
// ABOUTME: Re-exports every model type at the module root
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit & category catalog
pub mod catalog;
/// Health data point and its builder
pub mod data_point;
/// Logical data type enumeration
pub mod data_type;
/// Originating platform
pub mod platform;
/// Recording method classifier
pub mod recording_method;
/// Unit enumeration
pub mod unit;
/// Value variants
pub mod value;
/// Workout aggregates
pub mod workout_summary;

pub use catalog::{category_of, unit_for, HealthDataCategory};
pub use data_point::{HealthDataPoint, HealthDataPointBuilder, Metadata};
pub use data_type::HealthDataType;
pub use platform::HealthPlatform;
pub use recording_method::RecordingMethod;
pub use unit::HealthDataUnit;
pub use value::{
    AudiogramSample, AudiogramValue, EcgClassification, ElectrocardiogramValue, HealthValue,
    InsulinDeliveryReason, InsulinDeliveryValue, MealType, MenstrualFlow, MenstruationFlowValue,
    NumericValue, NutritionValue, RouteLocation, VoltageSample, WorkoutActivityType,
    WorkoutRouteValue, WorkoutValue,
};
pub use workout_summary::WorkoutSummary;
