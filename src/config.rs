// ABOUTME: Pipeline configuration loaded from environment variables
// ABOUTME: Parallelism threshold, dedup toggle, and the fallback device id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration. There are no config files; every knob has
//! a default and an unparseable value falls back to it with a warning.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Environment variable names
pub mod env_keys {
    /// Batch size at which record assembly switches to the rayon pool
    pub const PARALLEL_THRESHOLD: &str = "HEALTH_BRIDGE_PARALLEL_THRESHOLD";
    /// Whether `normalize` runs the dedup pass
    pub const DEDUPLICATE: &str = "HEALTH_BRIDGE_DEDUPLICATE";
    /// Device id used when the input does not name one
    pub const DEVICE_ID: &str = "HEALTH_BRIDGE_DEVICE_ID";
}

/// Default batch size at which assembly runs in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Default device id
pub const DEFAULT_DEVICE_ID: &str = "unknown";

/// Normalization pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Batches at or above this size are assembled on the rayon pool
    pub parallel_threshold: usize,
    /// Run the dedup pass after assembly
    pub deduplicate: bool,
    /// Device id stamped on points when the input does not provide one
    pub device_id: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            deduplicate: true,
            device_id: DEFAULT_DEVICE_ID.to_owned(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            parallel_threshold: env_parse_or(
                env_keys::PARALLEL_THRESHOLD,
                defaults.parallel_threshold,
            ),
            deduplicate: env_bool_or(env_keys::DEDUPLICATE, defaults.deduplicate),
            device_id: env::var(env_keys::DEVICE_ID)
                .ok()
                .filter(|id| !id.trim().is_empty())
                .unwrap_or(defaults.device_id),
        }
    }

    /// Override the parallelism threshold
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enable or disable the dedup pass
    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Override the fallback device id
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = device_id.into();
        self
    }

    /// Whether a batch of `len` records should be assembled in parallel
    #[must_use]
    pub const fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}

fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Unparseable value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn env_bool_or(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                warn!(key, value = %raw, default, "Unparseable boolean, using default");
                default
            }
        },
        Err(_) => default,
    }
}
