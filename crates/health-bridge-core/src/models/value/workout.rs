// ABOUTME: Workout value variant and workout activity type enumeration
// ABOUTME: Activity kind, distance, energy and steps totals with their units, plus extended metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::keys;
use crate::errors::{HealthDataError, HealthDataResult};
use crate::models::unit::HealthDataUnit;
use crate::raw::{insert_opt, value_as_f64, RawRecord, RawRecordExt};

/// Kind of workout activity
///
/// Covers the activity kinds both platforms share. Platform-specific kinds
/// are carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkoutActivityType {
    /// American football
    AmericanFootball,
    /// Badminton
    Badminton,
    /// Baseball
    Baseball,
    /// Basketball
    Basketball,
    /// Cycling
    Biking,
    /// Boxing
    Boxing,
    /// Cross-country skiing
    CrossCountrySkiing,
    /// Cross training
    CrossTraining,
    /// Dancing
    Dancing,
    /// Downhill skiing
    DownhillSkiing,
    /// Elliptical trainer
    Elliptical,
    /// Functional strength training
    FunctionalStrengthTraining,
    /// Golf
    Golf,
    /// High-intensity interval training
    HighIntensityIntervalTraining,
    /// Hiking
    Hiking,
    /// Hockey
    Hockey,
    /// Martial arts
    MartialArts,
    /// Pilates
    Pilates,
    /// Rowing
    Rowing,
    /// Rugby
    Rugby,
    /// Running
    Running,
    /// Treadmill running
    RunningTreadmill,
    /// Skating
    Skating,
    /// Snowboarding
    Snowboarding,
    /// Soccer
    Soccer,
    /// Stair climbing
    StairClimbing,
    /// Swimming, unspecified
    Swimming,
    /// Open water swimming
    SwimmingOpenWater,
    /// Pool swimming
    SwimmingPool,
    /// Table tennis
    TableTennis,
    /// Tennis
    Tennis,
    /// Traditional strength training
    TraditionalStrengthTraining,
    /// Volleyball
    Volleyball,
    /// Walking
    Walking,
    /// Weightlifting
    Weightlifting,
    /// Yoga
    Yoga,
    /// Activity kind not covered above
    Other(String),
}

impl WorkoutActivityType {
    /// Resolve an activity name, keeping unknown names in `Other`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "AMERICAN_FOOTBALL" => Self::AmericanFootball,
            "BADMINTON" => Self::Badminton,
            "BASEBALL" => Self::Baseball,
            "BASKETBALL" => Self::Basketball,
            "BIKING" => Self::Biking,
            "BOXING" => Self::Boxing,
            "CROSS_COUNTRY_SKIING" => Self::CrossCountrySkiing,
            "CROSS_TRAINING" => Self::CrossTraining,
            "DANCING" => Self::Dancing,
            "DOWNHILL_SKIING" => Self::DownhillSkiing,
            "ELLIPTICAL" => Self::Elliptical,
            "FUNCTIONAL_STRENGTH_TRAINING" => Self::FunctionalStrengthTraining,
            "GOLF" => Self::Golf,
            "HIGH_INTENSITY_INTERVAL_TRAINING" => Self::HighIntensityIntervalTraining,
            "HIKING" => Self::Hiking,
            "HOCKEY" => Self::Hockey,
            "MARTIAL_ARTS" => Self::MartialArts,
            "PILATES" => Self::Pilates,
            "ROWING" => Self::Rowing,
            "RUGBY" => Self::Rugby,
            "RUNNING" => Self::Running,
            "RUNNING_TREADMILL" => Self::RunningTreadmill,
            "SKATING" => Self::Skating,
            "SNOWBOARDING" => Self::Snowboarding,
            "SOCCER" => Self::Soccer,
            "STAIR_CLIMBING" => Self::StairClimbing,
            "SWIMMING" => Self::Swimming,
            "SWIMMING_OPEN_WATER" => Self::SwimmingOpenWater,
            "SWIMMING_POOL" => Self::SwimmingPool,
            "TABLE_TENNIS" => Self::TableTennis,
            "TENNIS" => Self::Tennis,
            "TRADITIONAL_STRENGTH_TRAINING" => Self::TraditionalStrengthTraining,
            "VOLLEYBALL" => Self::Volleyball,
            "WALKING" => Self::Walking,
            "WEIGHTLIFTING" => Self::Weightlifting,
            "YOGA" => Self::Yoga,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Canonical name of this activity kind
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AmericanFootball => "AMERICAN_FOOTBALL",
            Self::Badminton => "BADMINTON",
            Self::Baseball => "BASEBALL",
            Self::Basketball => "BASKETBALL",
            Self::Biking => "BIKING",
            Self::Boxing => "BOXING",
            Self::CrossCountrySkiing => "CROSS_COUNTRY_SKIING",
            Self::CrossTraining => "CROSS_TRAINING",
            Self::Dancing => "DANCING",
            Self::DownhillSkiing => "DOWNHILL_SKIING",
            Self::Elliptical => "ELLIPTICAL",
            Self::FunctionalStrengthTraining => "FUNCTIONAL_STRENGTH_TRAINING",
            Self::Golf => "GOLF",
            Self::HighIntensityIntervalTraining => "HIGH_INTENSITY_INTERVAL_TRAINING",
            Self::Hiking => "HIKING",
            Self::Hockey => "HOCKEY",
            Self::MartialArts => "MARTIAL_ARTS",
            Self::Pilates => "PILATES",
            Self::Rowing => "ROWING",
            Self::Rugby => "RUGBY",
            Self::Running => "RUNNING",
            Self::RunningTreadmill => "RUNNING_TREADMILL",
            Self::Skating => "SKATING",
            Self::Snowboarding => "SNOWBOARDING",
            Self::Soccer => "SOCCER",
            Self::StairClimbing => "STAIR_CLIMBING",
            Self::Swimming => "SWIMMING",
            Self::SwimmingOpenWater => "SWIMMING_OPEN_WATER",
            Self::SwimmingPool => "SWIMMING_POOL",
            Self::TableTennis => "TABLE_TENNIS",
            Self::Tennis => "TENNIS",
            Self::TraditionalStrengthTraining => "TRADITIONAL_STRENGTH_TRAINING",
            Self::Volleyball => "VOLLEYBALL",
            Self::Walking => "WALKING",
            Self::Weightlifting => "WEIGHTLIFTING",
            Self::Yoga => "YOGA",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for WorkoutActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WorkoutActivityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkoutActivityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Payload of a WORKOUT record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutValue {
    /// Activity kind
    pub workout_activity_type: WorkoutActivityType,
    /// Total distance covered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    /// Unit of `total_distance`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance_unit: Option<HealthDataUnit>,
    /// Total energy burned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_energy_burned: Option<f64>,
    /// Unit of `total_energy_burned`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_energy_burned_unit: Option<HealthDataUnit>,
    /// Total steps taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<f64>,
    /// Unit of `total_steps`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_steps_unit: Option<HealthDataUnit>,
    /// Additional named metrics reported by the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_metrics: Option<BTreeMap<String, f64>>,
}

impl WorkoutValue {
    /// A workout of `workout_activity_type` with no totals
    #[must_use]
    pub const fn new(workout_activity_type: WorkoutActivityType) -> Self {
        Self {
            workout_activity_type,
            total_distance: None,
            total_distance_unit: None,
            total_energy_burned: None,
            total_energy_burned_unit: None,
            total_steps: None,
            total_steps_unit: None,
            extended_metrics: None,
        }
    }

    /// Parse the workout fields of a raw record
    ///
    /// # Errors
    /// `MissingField` when the activity kind is absent, `InvalidField` when
    /// any total, unit name or extended metric has the wrong shape
    pub fn parse(raw: &RawRecord) -> HealthDataResult<Self> {
        let activity = raw.required_str(keys::WORKOUT_ACTIVITY_TYPE)?;
        Ok(Self {
            workout_activity_type: WorkoutActivityType::from_name(activity),
            total_distance: raw.optional_f64(keys::TOTAL_DISTANCE)?,
            total_distance_unit: parse_unit(raw, keys::TOTAL_DISTANCE_UNIT)?,
            total_energy_burned: raw.optional_f64(keys::TOTAL_ENERGY_BURNED)?,
            total_energy_burned_unit: parse_unit(raw, keys::TOTAL_ENERGY_BURNED_UNIT)?,
            total_steps: raw.optional_f64(keys::TOTAL_STEPS)?,
            total_steps_unit: parse_unit(raw, keys::TOTAL_STEPS_UNIT)?,
            extended_metrics: parse_metrics(raw)?,
        })
    }

    /// Write the workout fields into a raw record
    pub fn write_raw(&self, raw: &mut RawRecord) {
        raw.insert(
            keys::WORKOUT_ACTIVITY_TYPE.to_owned(),
            self.workout_activity_type.as_str().into(),
        );
        insert_opt(raw, keys::TOTAL_DISTANCE, self.total_distance);
        insert_opt(
            raw,
            keys::TOTAL_DISTANCE_UNIT,
            self.total_distance_unit.map(HealthDataUnit::as_str),
        );
        insert_opt(raw, keys::TOTAL_ENERGY_BURNED, self.total_energy_burned);
        insert_opt(
            raw,
            keys::TOTAL_ENERGY_BURNED_UNIT,
            self.total_energy_burned_unit.map(HealthDataUnit::as_str),
        );
        insert_opt(raw, keys::TOTAL_STEPS, self.total_steps);
        insert_opt(
            raw,
            keys::TOTAL_STEPS_UNIT,
            self.total_steps_unit.map(HealthDataUnit::as_str),
        );
        if let Some(metrics) = &self.extended_metrics {
            let map = metrics
                .iter()
                .map(|(name, value)| (name.clone(), Value::from(*value)))
                .collect();
            raw.insert(keys::EXTENDED_METRICS.to_owned(), Value::Object(map));
        }
    }
}

fn parse_unit(raw: &RawRecord, key: &str) -> HealthDataResult<Option<HealthDataUnit>> {
    Ok(raw.optional_str(key)?.map(HealthDataUnit::from_name_lossy))
}

fn parse_metrics(raw: &RawRecord) -> HealthDataResult<Option<BTreeMap<String, f64>>> {
    let Some(metrics) = raw.optional_object(keys::EXTENDED_METRICS)? else {
        return Ok(None);
    };
    metrics
        .iter()
        .map(|(name, value)| {
            let path = format!("{}.{name}", keys::EXTENDED_METRICS);
            value_as_f64(value, &path).map(|v| (name.clone(), v))
        })
        .collect::<Result<BTreeMap<_, _>, HealthDataError>>()
        .map(Some)
}
