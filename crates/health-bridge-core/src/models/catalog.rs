// ABOUTME: Static catalog mapping logical data types to default units and semantic categories
// ABOUTME: Total lookups over the closed type enumeration; unknown types degrade to sentinels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit & category catalog
//!
//! Both tables are exhaustive matches, so adding a type to
//! [`HealthDataType`] does not compile until it is given a unit and a
//! category here. Neither lookup can fail.

use serde::{Deserialize, Serialize};

use super::data_type::HealthDataType;
use super::unit::HealthDataUnit;

/// Grouping of types that share parsing and transform rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthDataCategory {
    /// Single floating-point magnitude
    Numeric,
    /// Interval-encoded observation whose value is its length in minutes
    Duration,
    /// Workout session
    Workout,
    /// Workout GPS route (nested sub-record)
    WorkoutRoute,
    /// Meal with optional macro and micronutrients
    Nutrition,
    /// Electrocardiogram recording
    Electrocardiogram,
    /// Hearing test
    Audiogram,
    /// Insulin delivery
    InsulinDelivery,
    /// Menstrual flow
    MenstruationFlow,
    /// Type outside the catalog; parsed as numeric
    Unknown,
}

impl HealthDataCategory {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Duration => "duration",
            Self::Workout => "workout",
            Self::WorkoutRoute => "workout_route",
            Self::Nutrition => "nutrition",
            Self::Electrocardiogram => "electrocardiogram",
            Self::Audiogram => "audiogram",
            Self::InsulinDelivery => "insulin_delivery",
            Self::MenstruationFlow => "menstruation_flow",
            Self::Unknown => "unknown",
        }
    }
}

/// Default unit of a logical data type
///
/// Returns `UnknownUnit` for types outside the catalog.
#[must_use]
pub const fn unit_for(data_type: &HealthDataType) -> HealthDataUnit {
    use HealthDataType as T;
    use HealthDataUnit as U;

    match data_type {
        T::ActiveEnergyBurned
        | T::BasalEnergyBurned
        | T::TotalCaloriesBurned
        | T::DietaryEnergyConsumed => U::Kilocalorie,

        T::HeartRate | T::RestingHeartRate | T::WalkingHeartRate => U::BeatsPerMinute,
        T::HeartRateVariabilitySdnn | T::HeartRateVariabilityRmssd => U::Millisecond,
        T::BloodOxygen
        | T::BodyFatPercentage
        | T::PeripheralPerfusionIndex
        | T::AtrialFibrillationBurden => U::Percent,
        T::BloodGlucose => U::MilligramPerDeciliter,
        T::BloodPressureSystolic | T::BloodPressureDiastolic => U::MillimeterOfMercury,
        T::BodyTemperature | T::WaterTemperature => U::DegreeCelsius,
        T::RespiratoryRate => U::RespirationsPerMinute,
        T::ElectrodermalActivity => U::Siemen,
        T::ForcedExpiratoryVolume | T::Water => U::Liter,

        T::Height
        | T::WaistCircumference
        | T::DistanceWalkingRunning
        | T::DistanceSwimming
        | T::DistanceCycling
        | T::DistanceDelta
        | T::UnderwaterDepth => U::Meter,
        T::Weight | T::LeanBodyMass | T::BodyWaterMass => U::Kilogram,

        T::Steps | T::FlightsClimbed | T::UvIndex => U::Count,
        T::Speed => U::MeterPerSecond,

        T::DietaryCarbsConsumed
        | T::DietaryProteinConsumed
        | T::DietaryFatsConsumed
        | T::DietaryCaffeine
        | T::DietarySugar
        | T::DietaryFiber => U::Gram,

        T::ExerciseTime
        | T::SleepAsleep
        | T::SleepAwake
        | T::SleepAwakeInBed
        | T::SleepDeep
        | T::SleepInBed
        | T::SleepLight
        | T::SleepOutOfBed
        | T::SleepRem
        | T::SleepSession
        | T::SleepUnknown
        | T::Mindfulness
        | T::HeadacheNotPresent
        | T::HeadacheMild
        | T::HeadacheModerate
        | T::HeadacheSevere
        | T::HeadacheUnspecified => U::Minute,

        T::Audiogram => U::DecibelHearingLevel,
        T::Electrocardiogram => U::Volt,
        T::InsulinDelivery => U::InternationalUnit,

        T::BodyMassIndex
        | T::HighHeartRateEvent
        | T::LowHeartRateEvent
        | T::IrregularHeartRateEvent
        | T::Workout
        | T::WorkoutRoute
        | T::Nutrition
        | T::MenstruationFlow => U::NoUnit,

        T::Other(_) => U::UnknownUnit,
    }
}

/// Semantic category of a logical data type
///
/// Returns `Unknown` for types outside the catalog.
#[must_use]
pub const fn category_of(data_type: &HealthDataType) -> HealthDataCategory {
    use HealthDataCategory as C;
    use HealthDataType as T;

    match data_type {
        T::SleepAsleep
        | T::SleepAwake
        | T::SleepAwakeInBed
        | T::SleepDeep
        | T::SleepInBed
        | T::SleepLight
        | T::SleepOutOfBed
        | T::SleepRem
        | T::SleepSession
        | T::SleepUnknown
        | T::Mindfulness
        | T::HeadacheNotPresent
        | T::HeadacheMild
        | T::HeadacheModerate
        | T::HeadacheSevere
        | T::HeadacheUnspecified => C::Duration,

        T::Workout => C::Workout,
        T::WorkoutRoute => C::WorkoutRoute,
        T::Nutrition => C::Nutrition,
        T::Electrocardiogram => C::Electrocardiogram,
        T::Audiogram => C::Audiogram,
        T::InsulinDelivery => C::InsulinDelivery,
        T::MenstruationFlow => C::MenstruationFlow,

        T::ActiveEnergyBurned
        | T::BasalEnergyBurned
        | T::TotalCaloriesBurned
        | T::HeartRate
        | T::RestingHeartRate
        | T::WalkingHeartRate
        | T::HeartRateVariabilitySdnn
        | T::HeartRateVariabilityRmssd
        | T::BloodOxygen
        | T::BloodGlucose
        | T::BloodPressureSystolic
        | T::BloodPressureDiastolic
        | T::BodyTemperature
        | T::RespiratoryRate
        | T::PeripheralPerfusionIndex
        | T::ElectrodermalActivity
        | T::ForcedExpiratoryVolume
        | T::AtrialFibrillationBurden
        | T::Height
        | T::Weight
        | T::BodyFatPercentage
        | T::BodyMassIndex
        | T::LeanBodyMass
        | T::BodyWaterMass
        | T::WaistCircumference
        | T::Steps
        | T::FlightsClimbed
        | T::DistanceWalkingRunning
        | T::DistanceSwimming
        | T::DistanceCycling
        | T::DistanceDelta
        | T::Speed
        | T::ExerciseTime
        | T::UvIndex
        | T::WaterTemperature
        | T::UnderwaterDepth
        | T::Water
        | T::DietaryEnergyConsumed
        | T::DietaryCarbsConsumed
        | T::DietaryProteinConsumed
        | T::DietaryFatsConsumed
        | T::DietaryCaffeine
        | T::DietarySugar
        | T::DietaryFiber
        | T::HighHeartRateEvent
        | T::LowHeartRateEvent
        | T::IrregularHeartRateEvent => C::Numeric,

        T::Other(_) => C::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_types_are_measured_in_minutes() {
        for data_type in HealthDataType::KNOWN {
            if category_of(data_type) == HealthDataCategory::Duration {
                assert_eq!(unit_for(data_type), HealthDataUnit::Minute, "{data_type}");
            }
        }
    }

    #[test]
    fn only_unknown_types_get_unknown_unit() {
        for data_type in HealthDataType::KNOWN {
            assert_ne!(unit_for(data_type), HealthDataUnit::UnknownUnit);
            assert_ne!(category_of(data_type), HealthDataCategory::Unknown);
        }
        let other = HealthDataType::Other("NEW_TYPE".to_owned());
        assert_eq!(unit_for(&other), HealthDataUnit::UnknownUnit);
        assert_eq!(category_of(&other), HealthDataCategory::Unknown);
    }
}
