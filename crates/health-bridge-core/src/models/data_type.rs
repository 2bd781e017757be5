// ABOUTME: Logical health data type enumeration covering Apple Health and Health Connect
// ABOUTME: Closed catalog of known types plus an Other fallback for names added by newer platforms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::catalog::{category_of, unit_for, HealthDataCategory};
use super::unit::HealthDataUnit;

macro_rules! health_data_types {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal ),+ $(,)?) => {
        /// Logical kind of a health observation
        ///
        /// The known variants form the closed catalog. `Other` carries a type
        /// name the catalog does not know yet; it resolves to the unknown
        /// category, `UNKNOWN_UNIT`, and the numeric value variant.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum HealthDataType {
            $(
                $(#[$doc])*
                $variant,
            )+
            /// Type name not present in the catalog
            Other(String),
        }

        impl HealthDataType {
            /// Every catalog type in declaration order
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical name of this type
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $name,)+
                    Self::Other(name) => name,
                }
            }

            /// Resolve a type name, falling back to `Other` for unknown names
            #[must_use]
            pub fn from_name(name: &str) -> Self {
                match name {
                    $($name => Self::$variant,)+
                    other => Self::Other(other.to_owned()),
                }
            }
        }
    };
}

health_data_types! {
    // Energy
    /// Active energy burned
    ActiveEnergyBurned => "ACTIVE_ENERGY_BURNED",
    /// Basal (resting) energy burned
    BasalEnergyBurned => "BASAL_ENERGY_BURNED",
    /// Total energy burned
    TotalCaloriesBurned => "TOTAL_CALORIES_BURNED",

    // Vitals
    /// Heart rate
    HeartRate => "HEART_RATE",
    /// Resting heart rate
    RestingHeartRate => "RESTING_HEART_RATE",
    /// Walking heart rate average
    WalkingHeartRate => "WALKING_HEART_RATE",
    /// Heart rate variability, SDNN
    HeartRateVariabilitySdnn => "HEART_RATE_VARIABILITY_SDNN",
    /// Heart rate variability, RMSSD
    HeartRateVariabilityRmssd => "HEART_RATE_VARIABILITY_RMSSD",
    /// Blood oxygen saturation
    BloodOxygen => "BLOOD_OXYGEN",
    /// Blood glucose
    BloodGlucose => "BLOOD_GLUCOSE",
    /// Systolic blood pressure
    BloodPressureSystolic => "BLOOD_PRESSURE_SYSTOLIC",
    /// Diastolic blood pressure
    BloodPressureDiastolic => "BLOOD_PRESSURE_DIASTOLIC",
    /// Body temperature
    BodyTemperature => "BODY_TEMPERATURE",
    /// Respiratory rate
    RespiratoryRate => "RESPIRATORY_RATE",
    /// Peripheral perfusion index
    PeripheralPerfusionIndex => "PERIPHERAL_PERFUSION_INDEX",
    /// Electrodermal activity
    ElectrodermalActivity => "ELECTRODERMAL_ACTIVITY",
    /// Forced expiratory volume
    ForcedExpiratoryVolume => "FORCED_EXPIRATORY_VOLUME",
    /// Atrial fibrillation burden
    AtrialFibrillationBurden => "ATRIAL_FIBRILLATION_BURDEN",

    // Body measurements
    /// Height
    Height => "HEIGHT",
    /// Weight
    Weight => "WEIGHT",
    /// Body fat percentage
    BodyFatPercentage => "BODY_FAT_PERCENTAGE",
    /// Body mass index
    BodyMassIndex => "BODY_MASS_INDEX",
    /// Lean body mass
    LeanBodyMass => "LEAN_BODY_MASS",
    /// Body water mass
    BodyWaterMass => "BODY_WATER_MASS",
    /// Waist circumference
    WaistCircumference => "WAIST_CIRCUMFERENCE",

    // Activity
    /// Step count
    Steps => "STEPS",
    /// Flights of stairs climbed
    FlightsClimbed => "FLIGHTS_CLIMBED",
    /// Walking and running distance
    DistanceWalkingRunning => "DISTANCE_WALKING_RUNNING",
    /// Swimming distance
    DistanceSwimming => "DISTANCE_SWIMMING",
    /// Cycling distance
    DistanceCycling => "DISTANCE_CYCLING",
    /// Distance covered between two samples
    DistanceDelta => "DISTANCE_DELTA",
    /// Speed
    Speed => "SPEED",
    /// Exercise minutes
    ExerciseTime => "EXERCISE_TIME",
    /// UV exposure index
    UvIndex => "UV_INDEX",
    /// Water temperature during a dive or swim
    WaterTemperature => "WATER_TEMPERATURE",
    /// Underwater depth
    UnderwaterDepth => "UNDERWATER_DEPTH",

    // Single nutrients
    /// Water intake
    Water => "WATER",
    /// Dietary energy
    DietaryEnergyConsumed => "DIETARY_ENERGY_CONSUMED",
    /// Dietary carbohydrates
    DietaryCarbsConsumed => "DIETARY_CARBS_CONSUMED",
    /// Dietary protein
    DietaryProteinConsumed => "DIETARY_PROTEIN_CONSUMED",
    /// Dietary fat
    DietaryFatsConsumed => "DIETARY_FATS_CONSUMED",
    /// Dietary caffeine
    DietaryCaffeine => "DIETARY_CAFFEINE",
    /// Dietary sugar
    DietarySugar => "DIETARY_SUGAR",
    /// Dietary fiber
    DietaryFiber => "DIETARY_FIBER",

    // Heart events
    /// High heart rate notification
    HighHeartRateEvent => "HIGH_HEART_RATE_EVENT",
    /// Low heart rate notification
    LowHeartRateEvent => "LOW_HEART_RATE_EVENT",
    /// Irregular rhythm notification
    IrregularHeartRateEvent => "IRREGULAR_HEART_RATE_EVENT",

    // Interval-encoded observations
    /// Asleep, stage unspecified
    SleepAsleep => "SLEEP_ASLEEP",
    /// Awake during a sleep session
    SleepAwake => "SLEEP_AWAKE",
    /// Awake while in bed
    SleepAwakeInBed => "SLEEP_AWAKE_IN_BED",
    /// Deep sleep
    SleepDeep => "SLEEP_DEEP",
    /// In bed
    SleepInBed => "SLEEP_IN_BED",
    /// Light sleep
    SleepLight => "SLEEP_LIGHT",
    /// Out of bed during a sleep session
    SleepOutOfBed => "SLEEP_OUT_OF_BED",
    /// REM sleep
    SleepRem => "SLEEP_REM",
    /// Whole sleep session
    SleepSession => "SLEEP_SESSION",
    /// Sleep, stage unknown
    SleepUnknown => "SLEEP_UNKNOWN",
    /// Mindfulness session
    Mindfulness => "MINDFULNESS",
    /// Headache not present
    HeadacheNotPresent => "HEADACHE_NOT_PRESENT",
    /// Mild headache
    HeadacheMild => "HEADACHE_MILD",
    /// Moderate headache
    HeadacheModerate => "HEADACHE_MODERATE",
    /// Severe headache
    HeadacheSevere => "HEADACHE_SEVERE",
    /// Headache, severity unspecified
    HeadacheUnspecified => "HEADACHE_UNSPECIFIED",

    // Structured records
    /// Workout session
    Workout => "WORKOUT",
    /// GPS route of a workout
    WorkoutRoute => "WORKOUT_ROUTE",
    /// Meal or food entry
    Nutrition => "NUTRITION",
    /// Electrocardiogram recording
    Electrocardiogram => "ELECTROCARDIOGRAM",
    /// Hearing test result
    Audiogram => "AUDIOGRAM",
    /// Insulin delivery
    InsulinDelivery => "INSULIN_DELIVERY",
    /// Menstrual flow
    MenstruationFlow => "MENSTRUATION_FLOW",
}

impl HealthDataType {
    /// Default unit of this type (catalog lookup)
    #[must_use]
    pub fn unit(&self) -> HealthDataUnit {
        unit_for(self)
    }

    /// Semantic category of this type (catalog lookup)
    #[must_use]
    pub fn category(&self) -> HealthDataCategory {
        category_of(self)
    }

    /// Whether the value of this type is the length of its interval
    #[must_use]
    pub fn is_duration_based(&self) -> bool {
        self.category() == HealthDataCategory::Duration
    }

    /// Whether this type is part of the closed catalog
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for HealthDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HealthDataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthDataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
