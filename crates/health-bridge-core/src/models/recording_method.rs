// ABOUTME: Recording method classifier mapping raw provenance codes to a closed enumeration
// ABOUTME: Total function: absent or unmapped codes classify as Unknown, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::codes::{
    RECORDING_METHOD_ACTIVE, RECORDING_METHOD_AUTOMATIC, RECORDING_METHOD_MANUAL,
    RECORDING_METHOD_UNKNOWN,
};

/// How a reading was captured
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordingMethod {
    /// Provenance not reported or not recognized
    #[default]
    Unknown,
    /// Recorded during an active session the user started
    Active,
    /// Recorded passively by a device
    Automatic,
    /// Entered by hand
    Manual,
}

impl RecordingMethod {
    /// Classify a raw provenance code
    #[must_use]
    pub const fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(RECORDING_METHOD_ACTIVE) => Self::Active,
            Some(RECORDING_METHOD_AUTOMATIC) => Self::Automatic,
            Some(RECORDING_METHOD_MANUAL) => Self::Manual,
            _ => Self::Unknown,
        }
    }

    /// Raw provenance code of this method
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Unknown => RECORDING_METHOD_UNKNOWN,
            Self::Active => RECORDING_METHOD_ACTIVE,
            Self::Automatic => RECORDING_METHOD_AUTOMATIC,
            Self::Manual => RECORDING_METHOD_MANUAL,
        }
    }

    /// Whether this method is one of `excluded`
    #[must_use]
    pub fn is_excluded_by(self, excluded: &[Self]) -> bool {
        excluded.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        for method in [
            RecordingMethod::Unknown,
            RecordingMethod::Active,
            RecordingMethod::Automatic,
            RecordingMethod::Manual,
        ] {
            assert_eq!(RecordingMethod::from_code(Some(method.code())), method);
        }
    }

    #[test]
    fn absent_and_unmapped_codes_are_unknown() {
        assert_eq!(RecordingMethod::from_code(None), RecordingMethod::Unknown);
        assert_eq!(RecordingMethod::from_code(Some(4)), RecordingMethod::Unknown);
        assert_eq!(RecordingMethod::from_code(Some(-1)), RecordingMethod::Unknown);
    }

    #[test]
    fn exclusion_predicate() {
        let excluded = [RecordingMethod::Manual];
        assert!(RecordingMethod::Manual.is_excluded_by(&excluded));
        assert!(!RecordingMethod::Automatic.is_excluded_by(&excluded));
    }
}
