// ABOUTME: Integration tests for write-request encoding against the read path
// ABOUTME: Encoded records must assemble back into the requested observation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use health_bridge_core::models::{
    AudiogramSample, InsulinDeliveryReason, MealType, MenstrualFlow, NutritionValue,
    WorkoutActivityType,
};
use health_bridge_core::{
    HealthDataPoint, HealthDataType, HealthPlatform, HealthValue, RawRecord, RecordingMethod,
};
use health_bridge_platforms::{available_types, encode, is_available, WriteError, WriteRequest};
use serde_json::json;

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()
}

/// Assemble an encoded record the way the native layer would hand it back
fn read_back(mut raw: RawRecord, platform: HealthPlatform) -> HealthDataPoint {
    raw.insert("source_id".to_owned(), json!("com.example.app"));
    raw.insert("source_name".to_owned(), json!("Example"));
    let data_type = HealthDataType::from_name(raw["data_type"].as_str().unwrap());
    HealthDataPoint::assemble(&data_type, &raw, platform, "device").unwrap()
}

#[test]
fn test_numeric_write_reads_back() {
    let request = WriteRequest::Numeric {
        data_type: HealthDataType::HeartRate,
        value: 72.0,
        start: start(),
        end: start(),
        recording_method: RecordingMethod::Manual,
    };
    for platform in HealthPlatform::ALL {
        let records = encode(&request, platform).unwrap();
        assert_eq!(records.len(), 1);
        let point = read_back(records.into_iter().next().unwrap(), platform);
        assert_eq!(point.data_type(), &HealthDataType::HeartRate);
        assert_eq!(point.value(), &HealthValue::numeric(72.0));
        assert_eq!(point.recording_method(), RecordingMethod::Manual);
        assert_eq!(point.date_from(), start());
    }
}

#[test]
fn test_blood_pressure_writes_two_records() {
    let request = WriteRequest::BloodPressure {
        systolic: 120.0,
        diastolic: 80.0,
        start: start(),
        end: start(),
        recording_method: RecordingMethod::Automatic,
    };
    let records = encode(&request, HealthPlatform::AppleHealth).unwrap();
    assert_eq!(records.len(), 2);

    let points: Vec<_> = records
        .into_iter()
        .map(|raw| read_back(raw, HealthPlatform::AppleHealth))
        .collect();
    assert_eq!(points[0].data_type(), &HealthDataType::BloodPressureSystolic);
    assert_eq!(points[0].value(), &HealthValue::numeric(120.0));
    assert_eq!(points[1].data_type(), &HealthDataType::BloodPressureDiastolic);
    assert_eq!(points[1].value(), &HealthValue::numeric(80.0));
}

#[test]
fn test_interval_write_derives_minutes() {
    let request = WriteRequest::Interval {
        data_type: HealthDataType::SleepRem,
        start: start(),
        end: start() + Duration::minutes(25),
        recording_method: RecordingMethod::Automatic,
    };
    let raw = encode(&request, HealthPlatform::GoogleHealthConnect)
        .unwrap()
        .remove(0);
    assert!(raw.get("value").is_none());

    let point = read_back(raw, HealthPlatform::GoogleHealthConnect);
    assert_eq!(point.value(), &HealthValue::numeric(25.0));
}

#[test]
fn test_workout_write_reads_back_value_summary_and_title() {
    let request = WriteRequest::Workout {
        activity_type: WorkoutActivityType::Running,
        start: start(),
        end: start() + Duration::minutes(30),
        total_distance: Some(5_000.0),
        total_energy_burned: Some(320.0),
        total_steps: None,
        title: Some("Lunch run".to_owned()),
    };
    let raw = encode(&request, HealthPlatform::AppleHealth)
        .unwrap()
        .remove(0);
    let point = read_back(raw, HealthPlatform::AppleHealth);

    let HealthValue::Workout(workout) = point.value() else {
        panic!("expected workout value");
    };
    assert_eq!(workout.workout_activity_type, WorkoutActivityType::Running);
    assert_eq!(workout.total_distance, Some(5_000.0));
    assert_eq!(workout.total_steps, None);

    let summary = point.workout_summary().unwrap();
    assert_eq!(summary.workout_type.as_deref(), Some("RUNNING"));
    assert_eq!(summary.total_energy_burned, Some(320.0));

    assert_eq!(
        point.metadata().unwrap().get("title"),
        Some(&json!("Lunch run"))
    );
    assert_eq!(point.recording_method(), RecordingMethod::Active);
}

#[test]
fn test_structured_writes_read_back() {
    let meal = NutritionValue {
        meal_type: Some(MealType::Dinner),
        name: Some("Pasta".to_owned()),
        calories: Some(700.0),
        carbs: Some(90.0),
        ..NutritionValue::default()
    };
    let requests = [
        WriteRequest::Nutrition {
            meal: meal.clone(),
            start: start(),
            end: start() + Duration::minutes(20),
        },
        WriteRequest::InsulinDelivery {
            units: 2.5,
            reason: InsulinDeliveryReason::Basal,
            start: start(),
            end: start(),
        },
        WriteRequest::Audiogram {
            samples: vec![AudiogramSample {
                frequency: 1_000.0,
                left_ear_sensitivity: Some(10.0),
                right_ear_sensitivity: None,
            }],
            start: start(),
            end: start(),
        },
        WriteRequest::MenstruationFlow {
            flow: MenstrualFlow::Heavy,
            is_start_of_cycle: true,
            start: start(),
            end: start(),
        },
    ];

    for request in &requests {
        let raw = encode(request, HealthPlatform::AppleHealth).unwrap().remove(0);
        let point = read_back(raw, HealthPlatform::AppleHealth);
        match (request, point.value()) {
            (WriteRequest::Nutrition { meal, .. }, HealthValue::Nutrition(read)) => {
                assert_eq!(read, meal);
            }
            (WriteRequest::InsulinDelivery { units, reason, .. }, HealthValue::InsulinDelivery(read)) => {
                assert_eq!((read.units, read.reason), (*units, *reason));
            }
            (WriteRequest::Audiogram { samples, .. }, HealthValue::Audiogram(read)) => {
                assert_eq!(&read.samples, samples);
            }
            (WriteRequest::MenstruationFlow { flow, .. }, HealthValue::MenstruationFlow(read)) => {
                assert_eq!(read.flow, *flow);
                assert!(read.is_start_of_cycle);
            }
            (request, value) => panic!("{} read back as {value:?}", request.kind()),
        }
    }
}

#[test]
fn test_each_record_gets_a_fresh_client_record_id() {
    let request = WriteRequest::Numeric {
        data_type: HealthDataType::Steps,
        value: 100.0,
        start: start(),
        end: start() + Duration::minutes(1),
        recording_method: RecordingMethod::Unknown,
    };
    let first = encode(&request, HealthPlatform::AppleHealth).unwrap().remove(0);
    let second = encode(&request, HealthPlatform::AppleHealth).unwrap().remove(0);
    assert_ne!(first["client_record_id"], second["client_record_id"]);
}

#[test]
fn test_rejections() {
    let read_only = WriteRequest::Numeric {
        data_type: HealthDataType::Electrocardiogram,
        value: 1.0,
        start: start(),
        end: start(),
        recording_method: RecordingMethod::Unknown,
    };
    assert!(matches!(
        encode(&read_only, HealthPlatform::AppleHealth),
        Err(WriteError::UnsupportedType { .. })
    ));

    let unavailable = WriteRequest::Numeric {
        data_type: HealthDataType::WalkingHeartRate,
        value: 95.0,
        start: start(),
        end: start(),
        recording_method: RecordingMethod::Unknown,
    };
    assert!(matches!(
        encode(&unavailable, HealthPlatform::GoogleHealthConnect),
        Err(WriteError::UnsupportedOnPlatform { .. })
    ));
    assert!(encode(&unavailable, HealthPlatform::AppleHealth).is_ok());

    let inverted = WriteRequest::Interval {
        data_type: HealthDataType::Mindfulness,
        start: start(),
        end: start() - Duration::minutes(1),
        recording_method: RecordingMethod::Manual,
    };
    assert!(matches!(
        encode(&inverted, HealthPlatform::AppleHealth),
        Err(WriteError::InvertedInterval { .. })
    ));

    let empty = WriteRequest::Interval {
        data_type: HealthDataType::Mindfulness,
        start: start(),
        end: start(),
        recording_method: RecordingMethod::Manual,
    };
    assert!(matches!(
        encode(&empty, HealthPlatform::AppleHealth),
        Err(WriteError::EmptyInterval { .. })
    ));

    let no_flow = WriteRequest::MenstruationFlow {
        flow: MenstrualFlow::None,
        is_start_of_cycle: false,
        start: start(),
        end: start(),
    };
    assert!(encode(&no_flow, HealthPlatform::AppleHealth).is_ok());
    assert!(matches!(
        encode(&no_flow, HealthPlatform::GoogleHealthConnect),
        Err(WriteError::InvalidValue { .. })
    ));

    let not_finite = WriteRequest::Numeric {
        data_type: HealthDataType::Weight,
        value: f64::NAN,
        start: start(),
        end: start(),
        recording_method: RecordingMethod::Manual,
    };
    assert!(matches!(
        encode(&not_finite, HealthPlatform::AppleHealth),
        Err(WriteError::InvalidValue { .. })
    ));
}

#[test]
fn test_availability_tables() {
    assert!(is_available(&HealthDataType::Steps, HealthPlatform::AppleHealth));
    assert!(is_available(&HealthDataType::Steps, HealthPlatform::GoogleHealthConnect));
    assert!(!is_available(&HealthDataType::Speed, HealthPlatform::AppleHealth));
    assert!(!is_available(
        &HealthDataType::Electrocardiogram,
        HealthPlatform::GoogleHealthConnect
    ));
    assert!(available_types(HealthPlatform::AppleHealth).contains(&HealthDataType::Audiogram));
}
