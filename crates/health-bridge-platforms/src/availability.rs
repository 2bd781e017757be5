// ABOUTME: Which logical data types each native platform can read and write
// ABOUTME: Static exclusion tables over the closed catalog; unknown types are never available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_bridge_core::{HealthDataType, HealthPlatform};

/// Catalog types Apple Health has no equivalent for
const APPLE_HEALTH_UNAVAILABLE: &[HealthDataType] = &[
    HealthDataType::DistanceDelta,
    HealthDataType::Speed,
    HealthDataType::TotalCaloriesBurned,
    HealthDataType::HeartRateVariabilityRmssd,
    HealthDataType::SleepOutOfBed,
    HealthDataType::SleepUnknown,
    HealthDataType::SleepSession,
];

/// Catalog types Health Connect has no equivalent for
const HEALTH_CONNECT_UNAVAILABLE: &[HealthDataType] = &[
    HealthDataType::Audiogram,
    HealthDataType::Electrocardiogram,
    HealthDataType::ElectrodermalActivity,
    HealthDataType::WalkingHeartRate,
    HealthDataType::InsulinDelivery,
    HealthDataType::HeartRateVariabilitySdnn,
    HealthDataType::UvIndex,
    HealthDataType::HighHeartRateEvent,
    HealthDataType::LowHeartRateEvent,
    HealthDataType::IrregularHeartRateEvent,
    HealthDataType::WorkoutRoute,
    HealthDataType::AtrialFibrillationBurden,
    HealthDataType::PeripheralPerfusionIndex,
    HealthDataType::ForcedExpiratoryVolume,
    HealthDataType::WaistCircumference,
    HealthDataType::BodyMassIndex,
    HealthDataType::ExerciseTime,
    HealthDataType::WaterTemperature,
    HealthDataType::UnderwaterDepth,
    HealthDataType::SleepAwakeInBed,
    HealthDataType::SleepInBed,
    HealthDataType::HeadacheNotPresent,
    HealthDataType::HeadacheMild,
    HealthDataType::HeadacheModerate,
    HealthDataType::HeadacheSevere,
    HealthDataType::HeadacheUnspecified,
];

const fn unavailable_on(platform: HealthPlatform) -> &'static [HealthDataType] {
    match platform {
        HealthPlatform::AppleHealth => APPLE_HEALTH_UNAVAILABLE,
        HealthPlatform::GoogleHealthConnect => HEALTH_CONNECT_UNAVAILABLE,
    }
}

/// Whether `platform` can read `data_type`
#[must_use]
pub fn is_available(data_type: &HealthDataType, platform: HealthPlatform) -> bool {
    data_type.is_known() && !unavailable_on(platform).contains(data_type)
}

/// Every catalog type `platform` can read, in catalog order
#[must_use]
pub fn available_types(platform: HealthPlatform) -> Vec<HealthDataType> {
    HealthDataType::KNOWN
        .iter()
        .filter(|data_type| is_available(data_type, platform))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_types_are_never_available() {
        let other = HealthDataType::Other("FUTURE".to_owned());
        for platform in HealthPlatform::ALL {
            assert!(!is_available(&other, platform));
        }
    }

    #[test]
    fn exclusion_tables_only_name_catalog_types() {
        for platform in HealthPlatform::ALL {
            let available = available_types(platform).len();
            let excluded = unavailable_on(platform).len();
            assert_eq!(available + excluded, HealthDataType::KNOWN.len());
        }
    }
}
