// ABOUTME: Workout route value variant with ordered geolocation samples
// ABOUTME: Parsed from the nested route sub-record, not the outer record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::keys;
use crate::errors::{HealthDataError, HealthDataResult};
use crate::raw::{insert_opt, nest, value_as_record, RawRecord, RawRecordExt};

/// One GPS fix along a workout route
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RouteLocation {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Fix time
    pub timestamp: DateTime<Utc>,
    /// Altitude in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Horizontal accuracy in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    /// Vertical accuracy in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_accuracy: Option<f64>,
}

impl RouteLocation {
    fn parse(raw: &RawRecord) -> HealthDataResult<Self> {
        let millis = raw.required_i64(keys::TIMESTAMP)?;
        let timestamp = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| HealthDataError::invalid(keys::TIMESTAMP, "epoch milliseconds"))?;
        Ok(Self {
            latitude: raw.required_f64(keys::LATITUDE)?,
            longitude: raw.required_f64(keys::LONGITUDE)?,
            timestamp,
            altitude: raw.optional_f64(keys::ALTITUDE)?,
            horizontal_accuracy: raw.optional_f64(keys::HORIZONTAL_ACCURACY)?,
            vertical_accuracy: raw.optional_f64(keys::VERTICAL_ACCURACY)?,
        })
    }

    fn to_raw(self) -> Value {
        let mut raw = RawRecord::new();
        raw.insert(keys::LATITUDE.to_owned(), self.latitude.into());
        raw.insert(keys::LONGITUDE.to_owned(), self.longitude.into());
        raw.insert(
            keys::TIMESTAMP.to_owned(),
            self.timestamp.timestamp_millis().into(),
        );
        insert_opt(&mut raw, keys::ALTITUDE, self.altitude);
        insert_opt(&mut raw, keys::HORIZONTAL_ACCURACY, self.horizontal_accuracy);
        insert_opt(&mut raw, keys::VERTICAL_ACCURACY, self.vertical_accuracy);
        Value::Object(raw)
    }
}

/// Payload of a WORKOUT_ROUTE record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRouteValue {
    /// Fixes in time order
    pub locations: Vec<RouteLocation>,
}

impl WorkoutRouteValue {
    /// Parse the route sub-record
    ///
    /// `route` is the nested mapping found under the outer record's `route`
    /// key.
    ///
    /// # Errors
    /// `MissingField`/`InvalidField` when the location list or any fix is
    /// absent or mis-shaped; nested fields are reported with their path
    pub fn parse(route: &RawRecord) -> HealthDataResult<Self> {
        let locations = route
            .required_array(keys::LOCATIONS)
            .map_err(|e| nest(keys::ROUTE, e))?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let path = format!("{}.{}[{index}]", keys::ROUTE, keys::LOCATIONS);
                value_as_record(item, &path)
                    .and_then(RouteLocation::parse)
                    .map_err(|e| nest(&path, e))
            })
            .collect::<HealthDataResult<Vec<_>>>()?;
        Ok(Self { locations })
    }

    /// Write the route sub-record under the outer record's `route` key
    pub fn write_raw(&self, raw: &mut RawRecord) {
        let locations = self
            .locations
            .iter()
            .copied()
            .map(RouteLocation::to_raw)
            .collect();
        let mut route = RawRecord::new();
        route.insert(keys::LOCATIONS.to_owned(), Value::Array(locations));
        raw.insert(keys::ROUTE.to_owned(), Value::Object(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_errors_name_their_path() {
        let Value::Object(route) = json!({
            "locations": [
                { "latitude": 1.0, "longitude": 2.0, "timestamp": 1000 },
                { "latitude": 1.0, "timestamp": 2000 },
            ]
        }) else {
            unreachable!()
        };
        let error = WorkoutRouteValue::parse(&route).unwrap_err();
        assert_eq!(error.field(), Some("route.locations[1].longitude"));
    }
}
