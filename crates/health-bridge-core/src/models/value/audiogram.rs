// ABOUTME: Audiogram value variant with per-frequency ear sensitivities
// ABOUTME: Raw parallel arrays are zipped into ordered (frequency, left, right) samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::keys;
use crate::errors::{HealthDataError, HealthDataResult};
use crate::raw::{value_as_f64, value_as_optional_f64, RawRecord, RawRecordExt};

/// Hearing sensitivity at one test frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AudiogramSample {
    /// Test frequency in hertz
    pub frequency: f64,
    /// Left ear sensitivity in dBHL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_ear_sensitivity: Option<f64>,
    /// Right ear sensitivity in dBHL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_ear_sensitivity: Option<f64>,
}

/// Payload of an AUDIOGRAM record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudiogramValue {
    /// Samples in test order
    pub samples: Vec<AudiogramSample>,
}

impl AudiogramValue {
    /// Zip the raw frequency and sensitivity arrays into samples
    ///
    /// # Errors
    /// `MissingField` when an array is absent, `InvalidField` when an element
    /// is not numeric or the arrays differ in length
    pub fn parse(raw: &RawRecord) -> HealthDataResult<Self> {
        let frequencies = raw.required_array(keys::FREQUENCIES)?;
        let left = raw.required_array(keys::LEFT_EAR_SENSITIVITIES)?;
        let right = raw.required_array(keys::RIGHT_EAR_SENSITIVITIES)?;

        for (key, side) in [
            (keys::LEFT_EAR_SENSITIVITIES, left),
            (keys::RIGHT_EAR_SENSITIVITIES, right),
        ] {
            if side.len() != frequencies.len() {
                return Err(HealthDataError::invalid(
                    key,
                    "one entry per frequency",
                ));
            }
        }

        let samples = frequencies
            .iter()
            .zip(left.iter().zip(right))
            .enumerate()
            .map(|(index, (frequency, (l, r)))| -> HealthDataResult<AudiogramSample> {
                Ok(AudiogramSample {
                    frequency: value_as_f64(
                        frequency,
                        &format!("{}[{index}]", keys::FREQUENCIES),
                    )?,
                    left_ear_sensitivity: value_as_optional_f64(
                        l,
                        &format!("{}[{index}]", keys::LEFT_EAR_SENSITIVITIES),
                    )?,
                    right_ear_sensitivity: value_as_optional_f64(
                        r,
                        &format!("{}[{index}]", keys::RIGHT_EAR_SENSITIVITIES),
                    )?,
                })
            })
            .collect::<HealthDataResult<Vec<_>>>()?;

        Ok(Self { samples })
    }

    /// Write the samples back as parallel arrays
    pub fn write_raw(&self, raw: &mut RawRecord) {
        let column = |pick: fn(&AudiogramSample) -> Option<f64>| -> Value {
            Value::Array(
                self.samples
                    .iter()
                    .map(|sample| pick(sample).map_or(Value::Null, Value::from))
                    .collect(),
            )
        };
        raw.insert(
            keys::FREQUENCIES.to_owned(),
            column(|sample| Some(sample.frequency)),
        );
        raw.insert(
            keys::LEFT_EAR_SENSITIVITIES.to_owned(),
            column(|sample| sample.left_ear_sensitivity),
        );
        raw.insert(
            keys::RIGHT_EAR_SENSITIVITIES.to_owned(),
            column(|sample| sample.right_ear_sensitivity),
        );
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
    fn arrays_are_zipped_in_order() {
        let raw = record(json!({
            "frequencies": [500.0, 1000.0],
            "left_ear_sensitivities": [10.0, null],
            "right_ear_sensitivities": [15.0, 20.0],
        }));
        let value = AudiogramValue::parse(&raw).unwrap();
        assert_eq!(value.samples.len(), 2);
        assert_eq!(value.samples[1].frequency, 1000.0);
        assert_eq!(value.samples[1].left_ear_sensitivity, None);
        assert_eq!(value.samples[1].right_ear_sensitivity, Some(20.0));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let raw = record(json!({
            "frequencies": [500.0, 1000.0],
            "left_ear_sensitivities": [10.0],
            "right_ear_sensitivities": [15.0, 20.0],
        }));
        assert_eq!(
            AudiogramValue::parse(&raw).unwrap_err().field(),
            Some("left_ear_sensitivities")
        );
    }
}
