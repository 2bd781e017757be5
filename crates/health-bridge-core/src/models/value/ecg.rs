// ABOUTME: Electrocardiogram value variant with ordered voltage samples and classification
// ABOUTME: Classification codes outside the shared table degrade to Unrecognized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::codes::{
    ECG_ATRIAL_FIBRILLATION, ECG_INCONCLUSIVE_HIGH_HEART_RATE, ECG_INCONCLUSIVE_LOW_HEART_RATE,
    ECG_INCONCLUSIVE_OTHER, ECG_INCONCLUSIVE_POOR_READING, ECG_NOT_SET, ECG_SINUS_RHYTHM,
    ECG_UNRECOGNIZED,
};
use crate::constants::keys;
use crate::errors::HealthDataResult;
use crate::raw::{insert_opt, nest, value_as_record, RawRecord, RawRecordExt};

/// Rhythm classification attached to an ECG recording
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EcgClassification {
    /// No classification was made
    #[default]
    NotSet,
    /// Normal sinus rhythm
    SinusRhythm,
    /// Atrial fibrillation
    AtrialFibrillation,
    /// Inconclusive because the heart rate was too low
    InconclusiveLowHeartRate,
    /// Inconclusive because the heart rate was too high
    InconclusiveHighHeartRate,
    /// Inconclusive because of a poor reading
    InconclusivePoorReading,
    /// Inconclusive for another reason
    InconclusiveOther,
    /// Classification code not recognized
    Unrecognized,
}

impl EcgClassification {
    /// Classify a raw code; unmapped codes are `Unrecognized`
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            ECG_NOT_SET => Self::NotSet,
            ECG_SINUS_RHYTHM => Self::SinusRhythm,
            ECG_ATRIAL_FIBRILLATION => Self::AtrialFibrillation,
            ECG_INCONCLUSIVE_LOW_HEART_RATE => Self::InconclusiveLowHeartRate,
            ECG_INCONCLUSIVE_HIGH_HEART_RATE => Self::InconclusiveHighHeartRate,
            ECG_INCONCLUSIVE_POOR_READING => Self::InconclusivePoorReading,
            ECG_INCONCLUSIVE_OTHER => Self::InconclusiveOther,
            _ => Self::Unrecognized,
        }
    }

    /// Raw code of this classification
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::NotSet => ECG_NOT_SET,
            Self::SinusRhythm => ECG_SINUS_RHYTHM,
            Self::AtrialFibrillation => ECG_ATRIAL_FIBRILLATION,
            Self::InconclusiveLowHeartRate => ECG_INCONCLUSIVE_LOW_HEART_RATE,
            Self::InconclusiveHighHeartRate => ECG_INCONCLUSIVE_HIGH_HEART_RATE,
            Self::InconclusivePoorReading => ECG_INCONCLUSIVE_POOR_READING,
            Self::InconclusiveOther => ECG_INCONCLUSIVE_OTHER,
            Self::Unrecognized => ECG_UNRECOGNIZED,
        }
    }
}

/// One voltage sample of an ECG recording
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VoltageSample {
    /// Voltage in volts
    pub voltage: f64,
    /// Offset from the start of the recording in seconds
    pub time_since_sample_start: f64,
}

/// Payload of an ELECTROCARDIOGRAM record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElectrocardiogramValue {
    /// Samples in recording order
    pub voltage_values: Vec<VoltageSample>,
    /// Average heart rate over the recording
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<f64>,
    /// Sampling frequency in hertz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_frequency: Option<f64>,
    /// Rhythm classification
    #[serde(default)]
    pub classification: EcgClassification,
}

impl ElectrocardiogramValue {
    /// Parse the ECG fields of a raw record
    ///
    /// # Errors
    /// `MissingField` when the sample list is absent, `InvalidField` when a
    /// sample or a scalar field has the wrong shape
    pub fn parse(raw: &RawRecord) -> HealthDataResult<Self> {
        let voltage_values = raw
            .required_array(keys::VOLTAGE_VALUES)?
            .iter()
            .enumerate()
            .map(|(index, item)| -> HealthDataResult<VoltageSample> {
                let path = format!("{}[{index}]", keys::VOLTAGE_VALUES);
                let sample = value_as_record(item, &path)?;
                Ok(VoltageSample {
                    voltage: sample
                        .required_f64(keys::VOLTAGE)
                        .map_err(|e| nest(&path, e))?,
                    time_since_sample_start: sample
                        .required_f64(keys::TIME_SINCE_SAMPLE_START)
                        .map_err(|e| nest(&path, e))?,
                })
            })
            .collect::<HealthDataResult<Vec<_>>>()?;

        Ok(Self {
            voltage_values,
            average_heart_rate: raw.optional_f64(keys::AVERAGE_HEART_RATE)?,
            sampling_frequency: raw.optional_f64(keys::SAMPLING_FREQUENCY)?,
            classification: raw
                .optional_i64(keys::CLASSIFICATION)?
                .map_or(EcgClassification::NotSet, EcgClassification::from_code),
        })
    }

    /// Write the ECG fields into a raw record
    pub fn write_raw(&self, raw: &mut RawRecord) {
        let samples = self
            .voltage_values
            .iter()
            .map(|sample| {
                let mut item = RawRecord::new();
                item.insert(keys::VOLTAGE.to_owned(), sample.voltage.into());
                item.insert(
                    keys::TIME_SINCE_SAMPLE_START.to_owned(),
                    sample.time_since_sample_start.into(),
                );
                Value::Object(item)
            })
            .collect();
        raw.insert(keys::VOLTAGE_VALUES.to_owned(), Value::Array(samples));
        insert_opt(raw, keys::AVERAGE_HEART_RATE, self.average_heart_rate);
        insert_opt(raw, keys::SAMPLING_FREQUENCY, self.sampling_frequency);
        raw.insert(
            keys::CLASSIFICATION.to_owned(),
            self.classification.code().into(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_codes_round_trip() {
        for code in ECG_NOT_SET..=ECG_UNRECOGNIZED {
            assert_eq!(EcgClassification::from_code(code).code(), code);
        }
    }

    #[test]
    fn unmapped_classification_is_unrecognized() {
        assert_eq!(
            EcgClassification::from_code(42),
            EcgClassification::Unrecognized
        );
    }
}
