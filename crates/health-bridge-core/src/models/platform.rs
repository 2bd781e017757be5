// ABOUTME: Originating native health platform of a record
// ABOUTME: Exactly two platforms: Apple Health and Google Health Connect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Native platform a record was read from or is written to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthPlatform {
    /// Apple Health (`HealthKit`)
    AppleHealth,
    /// Google Health Connect
    GoogleHealthConnect,
}

impl HealthPlatform {
    /// Both platforms
    pub const ALL: [Self; 2] = [Self::AppleHealth, Self::GoogleHealthConnect];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AppleHealth => "apple_health",
            Self::GoogleHealthConnect => "google_health_connect",
        }
    }

    /// Parse a platform name, accepting snake_case or kebab-case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "apple_health" | "healthkit" => Some(Self::AppleHealth),
            "google_health_connect" | "health_connect" => Some(Self::GoogleHealthConnect),
            _ => None,
        }
    }
}

impl fmt::Display for HealthPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
