// ABOUTME: Unified health data point composing a value with time window, source and provenance
// ABOUTME: Assembly from raw records, builder, raw mirror, and serde through a validating wire form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Data Point
//!
//! A point is built once, either from a raw record ([`HealthDataPoint::assemble`])
//! or from typed parts ([`HealthDataPointBuilder`]), and is immutable after.
//! Both paths go through [`HealthDataPointBuilder::build`], which rejects
//! inverted intervals and, for duration types, replaces the value with the
//! interval length in minutes.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use crate::constants::keys;
use crate::constants::defaults::{UNKNOWN_DEVICE, UNKNOWN_OS};
use crate::constants::units::MS_PER_MINUTE;
use crate::errors::{HealthDataError, HealthDataResult};
use crate::raw::{RawRecord, RawRecordExt};

use super::data_type::HealthDataType;
use super::platform::HealthPlatform;
use super::recording_method::RecordingMethod;
use super::unit::HealthDataUnit;
use super::value::HealthValue;
use super::workout_summary::WorkoutSummary;

/// Platform-specific extras carried alongside a point
pub type Metadata = BTreeMap<String, Value>;

/// One normalized health observation
///
/// Equality compares every stored field. Hashing covers a subset of them, so
/// equal points always hash equally.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthDataPoint {
    uuid: String,
    value: HealthValue,
    data_type: HealthDataType,
    unit: HealthDataUnit,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    source_platform: HealthPlatform,
    source_device_id: String,
    source_id: String,
    source_name: String,
    recording_method: RecordingMethod,
    workout_summary: Option<WorkoutSummary>,
    metadata: Option<Metadata>,
    product_type: String,
    os_version: String,
}

impl HealthDataPoint {
    /// Assemble a point from a raw native record
    ///
    /// The value is parsed as `data_type`'s category selects, except for
    /// duration types whose value is derived from the interval and never
    /// read from the record. Aggregate workout fields populate a
    /// [`WorkoutSummary`] whatever `data_type` is.
    ///
    /// # Errors
    /// A `HealthDataError` when a required field is absent or mis-shaped, a
    /// timestamp is negative, or `date_to` precedes `date_from`
    pub fn assemble(
        data_type: &HealthDataType,
        raw: &RawRecord,
        platform: HealthPlatform,
        device_id: &str,
    ) -> HealthDataResult<Self> {
        let date_from_ms = timestamp_ms(raw, keys::DATE_FROM)?;
        let date_to_ms = timestamp_ms(raw, keys::DATE_TO)?;
        if date_to_ms < date_from_ms {
            return Err(HealthDataError::InvertedInterval {
                date_from_ms,
                date_to_ms,
            });
        }

        let value = if data_type.is_duration_based() {
            HealthValue::numeric(0.0)
        } else {
            HealthValue::parse(data_type, raw, platform)?
        };

        let recording_method = RecordingMethod::from_code(
            raw.present(keys::RECORDING_METHOD).and_then(Value::as_i64),
        );
        let metadata = raw
            .optional_object(keys::METADATA)?
            .map(|map| {
                map.iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect::<Metadata>()
            });

        HealthDataPointBuilder::new(
            data_type.clone(),
            value,
            to_datetime(date_from_ms, keys::DATE_FROM)?,
            to_datetime(date_to_ms, keys::DATE_TO)?,
            platform,
        )
        .uuid(raw.optional_str(keys::UUID)?.unwrap_or_default())
        .source_device_id(device_id)
        .source(
            raw.required_str(keys::SOURCE_ID)?,
            raw.required_str(keys::SOURCE_NAME)?,
        )
        .recording_method(recording_method)
        .workout_summary(WorkoutSummary::detect(raw)?)
        .metadata(metadata)
        .product_type(raw.optional_str(keys::PRODUCT_TYPE)?.unwrap_or(UNKNOWN_DEVICE))
        .os_version(raw.optional_str(keys::OS_VERSION)?.unwrap_or(UNKNOWN_OS))
        .build()
    }

    /// Mirror of [`assemble`](Self::assemble)
    ///
    /// For a point produced by `assemble`, assembling the result with this
    /// point's type, platform and device id yields an equal point. The raw
    /// layout has no unit and no separate summary block, so reassembly
    /// restores the catalog unit, and a WORKOUT value with totals comes back
    /// with a matching [`WorkoutSummary`]. Builder-made points that differ
    /// there are not reproduced; use serde for a lossless copy.
    #[must_use]
    pub fn to_raw_record(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert(keys::UUID.to_owned(), self.uuid.clone().into());
        self.value.write_raw(&mut raw, self.source_platform);
        if let Some(summary) = &self.workout_summary {
            summary.write_raw(&mut raw);
        }
        raw.insert(keys::DATE_FROM.to_owned(), self.date_from_ms().into());
        raw.insert(keys::DATE_TO.to_owned(), self.date_to_ms().into());
        raw.insert(keys::SOURCE_ID.to_owned(), self.source_id.clone().into());
        raw.insert(keys::SOURCE_NAME.to_owned(), self.source_name.clone().into());
        raw.insert(
            keys::RECORDING_METHOD.to_owned(),
            self.recording_method.code().into(),
        );
        if let Some(metadata) = &self.metadata {
            let map = metadata
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            raw.insert(keys::METADATA.to_owned(), Value::Object(map));
        }
        raw.insert(keys::PRODUCT_TYPE.to_owned(), self.product_type.clone().into());
        raw.insert(keys::OS_VERSION.to_owned(), self.os_version.clone().into());
        raw
    }

    /// Source-assigned identifier; empty when the platform supplies none
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Type-specific payload
    #[must_use]
    pub const fn value(&self) -> &HealthValue {
        &self.value
    }

    /// Logical data type
    #[must_use]
    pub const fn data_type(&self) -> &HealthDataType {
        &self.data_type
    }

    /// Unit of the value
    #[must_use]
    pub const fn unit(&self) -> HealthDataUnit {
        self.unit
    }

    /// Interval start, inclusive
    #[must_use]
    pub const fn date_from(&self) -> DateTime<Utc> {
        self.date_from
    }

    /// Interval end, exclusive; equal to `date_from` for instant readings
    #[must_use]
    pub const fn date_to(&self) -> DateTime<Utc> {
        self.date_to
    }

    /// Interval start in epoch milliseconds
    #[must_use]
    pub fn date_from_ms(&self) -> i64 {
        self.date_from.timestamp_millis()
    }

    /// Interval end in epoch milliseconds
    #[must_use]
    pub fn date_to_ms(&self) -> i64 {
        self.date_to.timestamp_millis()
    }

    /// Interval length in minutes, not rounded
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        interval_minutes(self.date_from, self.date_to)
    }

    /// Originating platform
    #[must_use]
    pub const fn source_platform(&self) -> HealthPlatform {
        self.source_platform
    }

    /// Identifier of the device the point was read on
    #[must_use]
    pub fn source_device_id(&self) -> &str {
        &self.source_device_id
    }

    /// Identifier of the app or device that produced the reading
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Human-readable name of the producing app or device
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// How the reading was captured
    #[must_use]
    pub const fn recording_method(&self) -> RecordingMethod {
        self.recording_method
    }

    /// Aggregates of the workout the reading belongs to
    #[must_use]
    pub const fn workout_summary(&self) -> Option<&WorkoutSummary> {
        self.workout_summary.as_ref()
    }

    /// Platform-specific extras
    #[must_use]
    pub const fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Device product type
    #[must_use]
    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    /// Device OS version
    #[must_use]
    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    /// Name of the data type, derived
    #[must_use]
    pub fn type_string(&self) -> &str {
        self.data_type.as_str()
    }

    /// Name of the unit, derived
    #[must_use]
    pub const fn unit_string(&self) -> &'static str {
        self.unit.as_str()
    }
}

impl Hash for HealthDataPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
        self.value.hash_key(state);
        self.data_type.hash(state);
        self.unit.hash(state);
        self.date_from.hash(state);
        self.date_to.hash(state);
        self.source_platform.hash(state);
        self.source_device_id.hash(state);
        self.source_id.hash(state);
        self.source_name.hash(state);
        self.recording_method.hash(state);
        match &self.workout_summary {
            Some(summary) => {
                1_u8.hash(state);
                summary.hash_key(state);
            }
            None => 0_u8.hash(state),
        }
        self.metadata
            .as_ref()
            .map(|m| m.keys().collect::<Vec<_>>())
            .hash(state);
        self.product_type.hash(state);
        self.os_version.hash(state);
    }
}

/// Builder for [`HealthDataPoint`]
///
/// Optional parts default to: empty uuid and device id, empty source, unknown
/// recording method, no summary or metadata, sentinel product type and OS
/// version, and the catalog unit of the data type.
#[derive(Debug, Clone)]
pub struct HealthDataPointBuilder {
    point: HealthDataPoint,
}

impl HealthDataPointBuilder {
    /// Start a point from its required parts
    #[must_use]
    pub fn new(
        data_type: HealthDataType,
        value: HealthValue,
        date_from: DateTime<Utc>,
        date_to: DateTime<Utc>,
        source_platform: HealthPlatform,
    ) -> Self {
        Self {
            point: HealthDataPoint {
                uuid: String::new(),
                value,
                unit: data_type.unit(),
                data_type,
                date_from,
                date_to,
                source_platform,
                source_device_id: String::new(),
                source_id: String::new(),
                source_name: String::new(),
                recording_method: RecordingMethod::Unknown,
                workout_summary: None,
                metadata: None,
                product_type: UNKNOWN_DEVICE.to_owned(),
                os_version: UNKNOWN_OS.to_owned(),
            },
        }
    }

    /// Sets the source-assigned identifier
    #[must_use]
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.point.uuid = uuid.into();
        self
    }

    /// Overrides the catalog unit
    #[must_use]
    pub const fn unit(mut self, unit: HealthDataUnit) -> Self {
        self.point.unit = unit;
        self
    }

    /// Sets the device identifier
    #[must_use]
    pub fn source_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.point.source_device_id = device_id.into();
        self
    }

    /// Sets the producing source's identifier and name
    #[must_use]
    pub fn source(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.point.source_id = id.into();
        self.point.source_name = name.into();
        self
    }

    /// Sets the recording method
    #[must_use]
    pub const fn recording_method(mut self, method: RecordingMethod) -> Self {
        self.point.recording_method = method;
        self
    }

    /// Sets the workout summary (optional)
    #[must_use]
    pub fn workout_summary(mut self, summary: Option<WorkoutSummary>) -> Self {
        self.point.workout_summary = summary;
        self
    }

    /// Sets the metadata mapping (optional)
    #[must_use]
    pub fn metadata(mut self, metadata: Option<Metadata>) -> Self {
        self.point.metadata = metadata;
        self
    }

    /// Sets the device product type
    #[must_use]
    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.point.product_type = product_type.into();
        self
    }

    /// Sets the device OS version
    #[must_use]
    pub fn os_version(mut self, os_version: impl Into<String>) -> Self {
        self.point.os_version = os_version.into();
        self
    }

    /// Validate the interval and finish the point
    ///
    /// For duration types the value becomes the interval length in minutes,
    /// whatever value was supplied.
    ///
    /// # Errors
    /// `InvertedInterval` when `date_to` precedes `date_from`
    pub fn build(self) -> HealthDataResult<HealthDataPoint> {
        let mut point = self.point;
        if point.date_to < point.date_from {
            return Err(HealthDataError::InvertedInterval {
                date_from_ms: point.date_from_ms(),
                date_to_ms: point.date_to_ms(),
            });
        }
        if point.data_type.is_duration_based() {
            point.value = HealthValue::numeric(point.duration_minutes());
        }
        Ok(point)
    }
}

fn timestamp_ms(raw: &RawRecord, key: &'static str) -> HealthDataResult<i64> {
    let value = raw.required_i64(key)?;
    if value < 0 {
        return Err(HealthDataError::NegativeTimestamp { field: key, value });
    }
    Ok(value)
}

fn to_datetime(millis: i64, key: &str) -> HealthDataResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| HealthDataError::invalid(key, "epoch milliseconds in range"))
}

fn interval_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_MINUTE
}

// ============================================================================
// Serialized form
// ============================================================================

#[derive(Serialize)]
struct PointView<'a> {
    uuid: &'a str,
    value: &'a HealthValue,
    #[serde(rename = "type")]
    data_type: &'a HealthDataType,
    unit: HealthDataUnit,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    source_platform: HealthPlatform,
    source_device_id: &'a str,
    source_id: &'a str,
    source_name: &'a str,
    recording_method: RecordingMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    workout_summary: Option<&'a WorkoutSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
    product_type: &'a str,
    os_version: &'a str,
    type_string: &'a str,
    unit_string: &'static str,
}

#[derive(Deserialize)]
struct PointWire {
    #[serde(default)]
    uuid: String,
    value: HealthValue,
    #[serde(rename = "type")]
    data_type: HealthDataType,
    unit: HealthDataUnit,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    source_platform: HealthPlatform,
    source_device_id: String,
    source_id: String,
    source_name: String,
    #[serde(default)]
    recording_method: RecordingMethod,
    #[serde(default)]
    workout_summary: Option<WorkoutSummary>,
    #[serde(default)]
    metadata: Option<Metadata>,
    #[serde(default = "default_product_type")]
    product_type: String,
    #[serde(default = "default_os_version")]
    os_version: String,
}

fn default_product_type() -> String {
    UNKNOWN_DEVICE.to_owned()
}

fn default_os_version() -> String {
    UNKNOWN_OS.to_owned()
}

impl Serialize for HealthDataPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PointView {
            uuid: &self.uuid,
            value: &self.value,
            data_type: &self.data_type,
            unit: self.unit,
            date_from: self.date_from,
            date_to: self.date_to,
            source_platform: self.source_platform,
            source_device_id: &self.source_device_id,
            source_id: &self.source_id,
            source_name: &self.source_name,
            recording_method: self.recording_method,
            workout_summary: self.workout_summary.as_ref(),
            metadata: self.metadata.as_ref(),
            product_type: &self.product_type,
            os_version: &self.os_version,
            type_string: self.type_string(),
            unit_string: self.unit_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HealthDataPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = PointWire::deserialize(deserializer)?;
        HealthDataPointBuilder::new(
            wire.data_type,
            wire.value,
            wire.date_from,
            wire.date_to,
            wire.source_platform,
        )
        .uuid(wire.uuid)
        .unit(wire.unit)
        .source_device_id(wire.source_device_id)
        .source(wire.source_id, wire.source_name)
        .recording_method(wire.recording_method)
        .workout_summary(wire.workout_summary)
        .metadata(wire.metadata)
        .product_type(wire.product_type)
        .os_version(wire.os_version)
        .build()
        .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => RawRecord::new(),
        }
    }

    #[test]
    fn negative_timestamps_are_rejected() {
        let raw = record(json!({
            "date_from": -1, "date_to": 0, "source_id": "a", "source_name": "A", "value": 1
        }));
        let error = HealthDataPoint::assemble(
            &HealthDataType::Steps,
            &raw,
            HealthPlatform::AppleHealth,
            "device",
        )
        .unwrap_err();
        assert_eq!(
            error,
            HealthDataError::NegativeTimestamp {
                field: "date_from",
                value: -1
            }
        );
    }

    #[test]
    fn builder_rejects_inverted_interval() {
        let from = DateTime::from_timestamp_millis(1_000).unwrap();
        let to = DateTime::from_timestamp_millis(900).unwrap();
        let result = HealthDataPointBuilder::new(
            HealthDataType::HeartRate,
            HealthValue::numeric(60.0),
            from,
            to,
            HealthPlatform::GoogleHealthConnect,
        )
        .build();
        assert!(matches!(
            result,
            Err(HealthDataError::InvertedInterval { .. })
        ));
    }

    #[test]
    fn unparseable_recording_method_is_unknown() {
        let raw = record(json!({
            "date_from": 0, "date_to": 0, "source_id": "a", "source_name": "A",
            "value": 1, "recording_method": "manual"
        }));
        let point = HealthDataPoint::assemble(
            &HealthDataType::Steps,
            &raw,
            HealthPlatform::AppleHealth,
            "device",
        )
        .unwrap();
        assert_eq!(point.recording_method(), RecordingMethod::Unknown);
    }
}
