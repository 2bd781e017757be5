// ABOUTME: Insulin delivery value variant with delivered units and delivery reason
// ABOUTME: The reason table is closed; unmapped codes are malformed records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::codes::{INSULIN_REASON_BASAL, INSULIN_REASON_BOLUS};
use crate::constants::keys;
use crate::errors::{HealthDataError, HealthDataResult};
use crate::raw::{RawRecord, RawRecordExt};

/// Why insulin was delivered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsulinDeliveryReason {
    /// Background delivery
    Basal,
    /// Mealtime or correction dose
    Bolus,
}

impl InsulinDeliveryReason {
    /// Map a raw reason code
    ///
    /// # Errors
    /// `UnknownCode` when the code is neither basal nor bolus
    pub const fn from_code(code: i64) -> HealthDataResult<Self> {
        match code {
            INSULIN_REASON_BASAL => Ok(Self::Basal),
            INSULIN_REASON_BOLUS => Ok(Self::Bolus),
            _ => Err(HealthDataError::UnknownCode {
                field: keys::REASON,
                code,
            }),
        }
    }

    /// Raw code of this reason
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Basal => INSULIN_REASON_BASAL,
            Self::Bolus => INSULIN_REASON_BOLUS,
        }
    }
}

/// Payload of an INSULIN_DELIVERY record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InsulinDeliveryValue {
    /// International units delivered
    pub units: f64,
    /// Delivery reason
    pub reason: InsulinDeliveryReason,
}

impl InsulinDeliveryValue {
    /// Parse the delivered units and reason code
    ///
    /// # Errors
    /// `MissingField`/`InvalidField` for absent or mis-shaped fields,
    /// `UnknownCode` for an unmapped reason
    pub fn parse(raw: &RawRecord) -> HealthDataResult<Self> {
        Ok(Self {
            units: raw.required_f64(keys::VALUE)?,
            reason: InsulinDeliveryReason::from_code(raw.required_i64(keys::REASON)?)?,
        })
    }

    /// Write the delivered units and reason code
    pub fn write_raw(&self, raw: &mut RawRecord) {
        raw.insert(keys::VALUE.to_owned(), self.units.into());
        raw.insert(keys::REASON.to_owned(), self.reason.code().into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_reason_is_an_error() {
        assert_eq!(
            InsulinDeliveryReason::from_code(9),
            Err(HealthDataError::UnknownCode {
                field: "reason",
                code: 9
            })
        );
    }
}
