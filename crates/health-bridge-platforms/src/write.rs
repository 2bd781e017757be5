// ABOUTME: Typed write requests encoded into the raw record layout the native layer expects
// ABOUTME: Reuses each value variant's raw writer so reads and writes stay in lock-step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Write Path
//!
//! [`encode`] turns a [`WriteRequest`] into one or more raw records, using the
//! same keys and code tables the read path parses. Source fields
//! (`source_id`, `source_name`) and the record uuid are assigned by the
//! native platform on insert and are not written here.
//!
//! Asymmetries with the read path:
//! - ELECTROCARDIOGRAM and WORKOUT_ROUTE are read-only; no request carries them.
//! - Duration types are written as an interval only; their value is derived.
//! - Blood pressure is one request but two records (systolic, diastolic).
//! - A workout title travels in the record's metadata.

use chrono::{DateTime, Utc};
use health_bridge_core::constants::keys;
use health_bridge_core::models::{
    AudiogramSample, AudiogramValue, HealthDataCategory, InsulinDeliveryReason,
    InsulinDeliveryValue, MenstrualFlow, MenstruationFlowValue, NutritionValue,
    WorkoutActivityType, WorkoutValue,
};
use health_bridge_core::{
    HealthDataType, HealthDataUnit, HealthPlatform, HealthValue, RawRecord, RecordingMethod,
    WorkoutSummary,
};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::availability::is_available;
use crate::errors::{WriteError, WriteResult};

/// Metadata key carrying a workout's title
pub const TITLE_METADATA_KEY: &str = "title";

/// An application-level request to write one observation
#[derive(Debug, Clone, PartialEq)]
pub enum WriteRequest {
    /// Single magnitude of a numeric-category type
    Numeric {
        /// Numeric-category type
        data_type: HealthDataType,
        /// Magnitude in the type's catalog unit
        value: f64,
        /// Interval start
        start: DateTime<Utc>,
        /// Interval end; equal to `start` for instant readings
        end: DateTime<Utc>,
        /// How the reading was captured
        recording_method: RecordingMethod,
    },
    /// Systolic and diastolic pressure taken together
    BloodPressure {
        /// Systolic pressure in mmHg
        systolic: f64,
        /// Diastolic pressure in mmHg
        diastolic: f64,
        /// Interval start
        start: DateTime<Utc>,
        /// Interval end
        end: DateTime<Utc>,
        /// How the reading was captured
        recording_method: RecordingMethod,
    },
    /// Duration-category observation encoded purely as an interval
    Interval {
        /// Duration-category type
        data_type: HealthDataType,
        /// Interval start
        start: DateTime<Utc>,
        /// Interval end
        end: DateTime<Utc>,
        /// How the observation was captured
        recording_method: RecordingMethod,
    },
    /// Workout session
    Workout {
        /// Activity kind
        activity_type: WorkoutActivityType,
        /// Session start
        start: DateTime<Utc>,
        /// Session end
        end: DateTime<Utc>,
        /// Distance in meters
        total_distance: Option<f64>,
        /// Energy in kilocalories
        total_energy_burned: Option<f64>,
        /// Steps
        total_steps: Option<f64>,
        /// Display title
        title: Option<String>,
    },
    /// Meal
    Nutrition {
        /// Meal contents
        meal: NutritionValue,
        /// Meal start
        start: DateTime<Utc>,
        /// Meal end
        end: DateTime<Utc>,
    },
    /// Hearing test
    Audiogram {
        /// Per-frequency sensitivities
        samples: Vec<AudiogramSample>,
        /// Test start
        start: DateTime<Utc>,
        /// Test end
        end: DateTime<Utc>,
    },
    /// Insulin delivery
    InsulinDelivery {
        /// International units delivered
        units: f64,
        /// Delivery reason
        reason: InsulinDeliveryReason,
        /// Delivery start
        start: DateTime<Utc>,
        /// Delivery end
        end: DateTime<Utc>,
    },
    /// Menstrual flow
    MenstruationFlow {
        /// Flow intensity
        flow: MenstrualFlow,
        /// Whether this entry starts a new cycle
        is_start_of_cycle: bool,
        /// Entry start
        start: DateTime<Utc>,
        /// Entry end
        end: DateTime<Utc>,
    },
}

impl WriteRequest {
    /// Request kind, as named in errors
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Numeric { .. } => "numeric",
            Self::BloodPressure { .. } => "blood_pressure",
            Self::Interval { .. } => "interval",
            Self::Workout { .. } => "workout",
            Self::Nutrition { .. } => "nutrition",
            Self::Audiogram { .. } => "audiogram",
            Self::InsulinDelivery { .. } => "insulin_delivery",
            Self::MenstruationFlow { .. } => "menstruation_flow",
        }
    }

    /// Logical types of the records this request produces
    #[must_use]
    pub fn data_types(&self) -> Vec<HealthDataType> {
        match self {
            Self::Numeric { data_type, .. } | Self::Interval { data_type, .. } => {
                vec![data_type.clone()]
            }
            Self::BloodPressure { .. } => vec![
                HealthDataType::BloodPressureSystolic,
                HealthDataType::BloodPressureDiastolic,
            ],
            Self::Workout { .. } => vec![HealthDataType::Workout],
            Self::Nutrition { .. } => vec![HealthDataType::Nutrition],
            Self::Audiogram { .. } => vec![HealthDataType::Audiogram],
            Self::InsulinDelivery { .. } => vec![HealthDataType::InsulinDelivery],
            Self::MenstruationFlow { .. } => vec![HealthDataType::MenstruationFlow],
        }
    }

    const fn interval(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            Self::Numeric { start, end, .. }
            | Self::BloodPressure { start, end, .. }
            | Self::Interval { start, end, .. }
            | Self::Workout { start, end, .. }
            | Self::Nutrition { start, end, .. }
            | Self::Audiogram { start, end, .. }
            | Self::InsulinDelivery { start, end, .. }
            | Self::MenstruationFlow { start, end, .. } => (*start, *end),
        }
    }
}

/// Encode a write request into raw native records
///
/// Every record carries `data_type`, the interval, the recording method and
/// a fresh `client_record_id`, plus the value fields in the layout the read
/// path parses for `platform`.
///
/// # Errors
/// A `WriteError` when the interval is inverted (or empty for interval-only
/// types), the request cannot carry its data type, the platform lacks the
/// type, or a value is not finite or not expressible on the platform
pub fn encode(request: &WriteRequest, platform: HealthPlatform) -> WriteResult<Vec<RawRecord>> {
    let (start, end) = request.interval();
    if end < start {
        return Err(WriteError::InvertedInterval {
            start_ms: start.timestamp_millis(),
            end_ms: end.timestamp_millis(),
        });
    }
    for data_type in request.data_types() {
        check_request_kind(request, &data_type)?;
        if !is_available(&data_type, platform) {
            return Err(WriteError::UnsupportedOnPlatform {
                data_type: data_type.as_str().to_owned(),
                platform,
            });
        }
    }

    let records = match request {
        WriteRequest::Numeric {
            data_type,
            value,
            recording_method,
            ..
        } => {
            finite("value", *value)?;
            vec![numeric_record(data_type, *value, start, end, *recording_method, platform)]
        }
        WriteRequest::BloodPressure {
            systolic,
            diastolic,
            recording_method,
            ..
        } => {
            finite("systolic", *systolic)?;
            finite("diastolic", *diastolic)?;
            vec![
                numeric_record(
                    &HealthDataType::BloodPressureSystolic,
                    *systolic,
                    start,
                    end,
                    *recording_method,
                    platform,
                ),
                numeric_record(
                    &HealthDataType::BloodPressureDiastolic,
                    *diastolic,
                    start,
                    end,
                    *recording_method,
                    platform,
                ),
            ]
        }
        WriteRequest::Interval {
            data_type,
            recording_method,
            ..
        } => {
            if end == start {
                return Err(WriteError::EmptyInterval {
                    data_type: data_type.as_str().to_owned(),
                });
            }
            vec![base_record(data_type, start, end, *recording_method)]
        }
        WriteRequest::Workout {
            activity_type,
            total_distance,
            total_energy_burned,
            total_steps,
            title,
            ..
        } => {
            if end == start {
                return Err(WriteError::EmptyInterval {
                    data_type: HealthDataType::Workout.as_str().to_owned(),
                });
            }
            for (field, total) in [
                (keys::TOTAL_DISTANCE, total_distance),
                (keys::TOTAL_ENERGY_BURNED, total_energy_burned),
                (keys::TOTAL_STEPS, total_steps),
            ] {
                if let Some(total) = total {
                    non_negative(field, *total)?;
                }
            }
            vec![workout_record(
                activity_type,
                *total_distance,
                *total_energy_burned,
                *total_steps,
                title.as_deref(),
                start,
                end,
                platform,
            )]
        }
        WriteRequest::Nutrition { meal, .. } => {
            let mut raw = base_record(&HealthDataType::Nutrition, start, end, RecordingMethod::Manual);
            HealthValue::Nutrition(meal.clone()).write_raw(&mut raw, platform);
            vec![raw]
        }
        WriteRequest::Audiogram { samples, .. } => {
            if samples.is_empty() {
                return Err(WriteError::invalid_value(
                    keys::FREQUENCIES,
                    "at least one sample is required",
                ));
            }
            for sample in samples {
                non_negative(keys::FREQUENCIES, sample.frequency)?;
            }
            let mut raw = base_record(&HealthDataType::Audiogram, start, end, RecordingMethod::Manual);
            HealthValue::Audiogram(AudiogramValue {
                samples: samples.clone(),
            })
            .write_raw(&mut raw, platform);
            vec![raw]
        }
        WriteRequest::InsulinDelivery { units, reason, .. } => {
            non_negative(keys::VALUE, *units)?;
            let mut raw = base_record(
                &HealthDataType::InsulinDelivery,
                start,
                end,
                RecordingMethod::Manual,
            );
            HealthValue::InsulinDelivery(InsulinDeliveryValue {
                units: *units,
                reason: *reason,
            })
            .write_raw(&mut raw, platform);
            vec![raw]
        }
        WriteRequest::MenstruationFlow {
            flow,
            is_start_of_cycle,
            ..
        } => {
            if flow.code(platform).is_none() {
                return Err(WriteError::invalid_value(
                    keys::VALUE,
                    format!("{flow:?} flow has no code on {platform}"),
                ));
            }
            let mut raw = base_record(
                &HealthDataType::MenstruationFlow,
                start,
                end,
                RecordingMethod::Manual,
            );
            HealthValue::MenstruationFlow(MenstruationFlowValue {
                flow: *flow,
                is_start_of_cycle: *is_start_of_cycle,
                was_user_entered: Some(true),
            })
            .write_raw(&mut raw, platform);
            vec![raw]
        }
    };

    debug!(
        request = request.kind(),
        %platform,
        records = records.len(),
        "Encoded write request"
    );
    Ok(records)
}

fn check_request_kind(request: &WriteRequest, data_type: &HealthDataType) -> WriteResult<()> {
    let accepted = match request {
        WriteRequest::Numeric { .. } => {
            data_type.category() == HealthDataCategory::Numeric
                && !matches!(
                    data_type,
                    HealthDataType::BloodPressureSystolic | HealthDataType::BloodPressureDiastolic
                )
        }
        WriteRequest::Interval { .. } => data_type.category() == HealthDataCategory::Duration,
        _ => true,
    };
    if accepted {
        Ok(())
    } else {
        Err(WriteError::UnsupportedType {
            data_type: data_type.as_str().to_owned(),
            request: request.kind(),
        })
    }
}

fn finite(field: &'static str, value: f64) -> WriteResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WriteError::invalid_value(field, "must be finite"))
    }
}

fn non_negative(field: &'static str, value: f64) -> WriteResult<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(WriteError::invalid_value(field, "must not be negative"));
    }
    Ok(())
}

fn base_record(
    data_type: &HealthDataType,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    recording_method: RecordingMethod,
) -> RawRecord {
    let mut raw = RawRecord::new();
    raw.insert(keys::DATA_TYPE.to_owned(), data_type.as_str().into());
    raw.insert(keys::DATE_FROM.to_owned(), start.timestamp_millis().into());
    raw.insert(keys::DATE_TO.to_owned(), end.timestamp_millis().into());
    raw.insert(
        keys::RECORDING_METHOD.to_owned(),
        recording_method.code().into(),
    );
    raw.insert(
        keys::CLIENT_RECORD_ID.to_owned(),
        Uuid::new_v4().to_string().into(),
    );
    raw
}

fn numeric_record(
    data_type: &HealthDataType,
    value: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    recording_method: RecordingMethod,
    platform: HealthPlatform,
) -> RawRecord {
    let mut raw = base_record(data_type, start, end, recording_method);
    HealthValue::numeric(value).write_raw(&mut raw, platform);
    raw
}

#[allow(clippy::too_many_arguments)]
fn workout_record(
    activity_type: &WorkoutActivityType,
    total_distance: Option<f64>,
    total_energy_burned: Option<f64>,
    total_steps: Option<f64>,
    title: Option<&str>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    platform: HealthPlatform,
) -> RawRecord {
    let mut raw = base_record(&HealthDataType::Workout, start, end, RecordingMethod::Active);
    let value = WorkoutValue {
        total_distance,
        total_distance_unit: total_distance.map(|_| HealthDataUnit::Meter),
        total_energy_burned,
        total_energy_burned_unit: total_energy_burned.map(|_| HealthDataUnit::Kilocalorie),
        total_steps,
        total_steps_unit: total_steps.map(|_| HealthDataUnit::Count),
        ..WorkoutValue::new(activity_type.clone())
    };
    HealthValue::Workout(value).write_raw(&mut raw, platform);
    WorkoutSummary {
        workout_type: Some(activity_type.as_str().to_owned()),
        total_distance,
        total_energy_burned,
        total_steps,
    }
    .write_raw(&mut raw);
    if let Some(title) = title {
        let mut metadata = RawRecord::new();
        metadata.insert(TITLE_METADATA_KEY.to_owned(), title.into());
        raw.insert(keys::METADATA.to_owned(), Value::Object(metadata));
    }
    raw
}
