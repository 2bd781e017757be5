// ABOUTME: Menstruation flow value variant with flow intensity and cycle-start flag
// ABOUTME: Flow codes are platform-specific; each platform has its own closed table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::codes::{
    APPLE_FLOW_HEAVY, APPLE_FLOW_LIGHT, APPLE_FLOW_MEDIUM, APPLE_FLOW_NONE,
    APPLE_FLOW_UNSPECIFIED, HEALTH_CONNECT_FLOW_HEAVY, HEALTH_CONNECT_FLOW_LIGHT,
    HEALTH_CONNECT_FLOW_MEDIUM, HEALTH_CONNECT_FLOW_UNKNOWN,
};
use crate::constants::keys;
use crate::errors::{HealthDataError, HealthDataResult};
use crate::models::platform::HealthPlatform;
use crate::raw::{insert_opt, RawRecord, RawRecordExt};

/// Menstrual flow intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MenstrualFlow {
    /// Flow recorded without an intensity
    Unspecified,
    /// No flow
    None,
    /// Light flow
    Light,
    /// Medium flow
    Medium,
    /// Heavy flow
    Heavy,
}

impl MenstrualFlow {
    /// Map a platform flow code
    ///
    /// # Errors
    /// `UnknownCode` when the code is outside the platform's table
    pub const fn from_code(code: i64, platform: HealthPlatform) -> HealthDataResult<Self> {
        let flow = match platform {
            HealthPlatform::AppleHealth => match code {
                APPLE_FLOW_UNSPECIFIED => Some(Self::Unspecified),
                APPLE_FLOW_LIGHT => Some(Self::Light),
                APPLE_FLOW_MEDIUM => Some(Self::Medium),
                APPLE_FLOW_HEAVY => Some(Self::Heavy),
                APPLE_FLOW_NONE => Some(Self::None),
                _ => None,
            },
            HealthPlatform::GoogleHealthConnect => match code {
                HEALTH_CONNECT_FLOW_UNKNOWN => Some(Self::Unspecified),
                HEALTH_CONNECT_FLOW_LIGHT => Some(Self::Light),
                HEALTH_CONNECT_FLOW_MEDIUM => Some(Self::Medium),
                HEALTH_CONNECT_FLOW_HEAVY => Some(Self::Heavy),
                _ => None,
            },
        };
        match flow {
            Some(flow) => Ok(flow),
            None => Err(HealthDataError::UnknownCode {
                field: keys::VALUE,
                code,
            }),
        }
    }

    /// Platform flow code, if the platform can express this intensity
    ///
    /// Health Connect has no code for `None`.
    #[must_use]
    pub const fn code(self, platform: HealthPlatform) -> Option<i64> {
        match platform {
            HealthPlatform::AppleHealth => Some(match self {
                Self::Unspecified => APPLE_FLOW_UNSPECIFIED,
                Self::None => APPLE_FLOW_NONE,
                Self::Light => APPLE_FLOW_LIGHT,
                Self::Medium => APPLE_FLOW_MEDIUM,
                Self::Heavy => APPLE_FLOW_HEAVY,
            }),
            HealthPlatform::GoogleHealthConnect => match self {
                Self::Unspecified => Some(HEALTH_CONNECT_FLOW_UNKNOWN),
                Self::None => None,
                Self::Light => Some(HEALTH_CONNECT_FLOW_LIGHT),
                Self::Medium => Some(HEALTH_CONNECT_FLOW_MEDIUM),
                Self::Heavy => Some(HEALTH_CONNECT_FLOW_HEAVY),
            },
        }
    }
}

/// Payload of a MENSTRUATION_FLOW record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MenstruationFlowValue {
    /// Flow intensity
    pub flow: MenstrualFlow,
    /// Whether this entry starts a new cycle
    #[serde(default)]
    pub is_start_of_cycle: bool,
    /// Whether the user entered the entry by hand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_user_entered: Option<bool>,
}

impl MenstruationFlowValue {
    /// Parse flow intensity and cycle flags
    ///
    /// # Errors
    /// `MissingField`/`InvalidField` for absent or mis-shaped fields,
    /// `UnknownCode` for a flow code outside the platform's table
    pub fn parse(raw: &RawRecord, platform: HealthPlatform) -> HealthDataResult<Self> {
        Ok(Self {
            flow: MenstrualFlow::from_code(raw.required_i64(keys::VALUE)?, platform)?,
            is_start_of_cycle: raw.optional_bool(keys::IS_START_OF_CYCLE)?.unwrap_or(false),
            was_user_entered: raw.optional_bool(keys::WAS_USER_ENTERED)?,
        })
    }

    /// Write flow code and cycle flags
    ///
    /// A flow the platform cannot express leaves `value` unset.
    pub fn write_raw(&self, raw: &mut RawRecord, platform: HealthPlatform) {
        insert_opt(raw, keys::VALUE, self.flow.code(platform));
        raw.insert(
            keys::IS_START_OF_CYCLE.to_owned(),
            self.is_start_of_cycle.into(),
        );
        insert_opt(raw, keys::WAS_USER_ENTERED, self.was_user_entered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FLOWS: [MenstrualFlow; 5] = [
        MenstrualFlow::Unspecified,
        MenstrualFlow::None,
        MenstrualFlow::Light,
        MenstrualFlow::Medium,
        MenstrualFlow::Heavy,
    ];

    #[test]
    fn platform_tables_disagree_on_codes() {
        assert_eq!(
            MenstrualFlow::from_code(2, HealthPlatform::AppleHealth),
            Ok(MenstrualFlow::Light)
        );
        assert_eq!(
            MenstrualFlow::from_code(2, HealthPlatform::GoogleHealthConnect),
            Ok(MenstrualFlow::Medium)
        );
        assert!(MenstrualFlow::from_code(0, HealthPlatform::AppleHealth).is_err());
        assert!(MenstrualFlow::from_code(5, HealthPlatform::GoogleHealthConnect).is_err());
    }

    #[test]
    fn expressible_codes_round_trip() {
        for platform in HealthPlatform::ALL {
            for flow in ALL_FLOWS {
                if let Some(code) = flow.code(platform) {
                    assert_eq!(MenstrualFlow::from_code(code, platform), Ok(flow));
                }
            }
        }
        assert_eq!(
            MenstrualFlow::None.code(HealthPlatform::GoogleHealthConnect),
            None
        );
    }
}
