// ABOUTME: Unit tests for environment-driven pipeline configuration
// ABOUTME: Defaults, overrides, and fallback on unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_bridge::config::{env_keys, DEFAULT_DEVICE_ID, DEFAULT_PARALLEL_THRESHOLD};
use health_bridge::BridgeConfig;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var(env_keys::PARALLEL_THRESHOLD);
    env::remove_var(env_keys::DEDUPLICATE);
    env::remove_var(env_keys::DEVICE_ID);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = BridgeConfig::from_env();
    assert_eq!(config, BridgeConfig::default());
    assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    assert!(config.deduplicate);
    assert_eq!(config.device_id, DEFAULT_DEVICE_ID);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_keys::PARALLEL_THRESHOLD, "1024");
    env::set_var(env_keys::DEDUPLICATE, "false");
    env::set_var(env_keys::DEVICE_ID, "pixel-8");

    let config = BridgeConfig::from_env();
    assert_eq!(config.parallel_threshold, 1024);
    assert!(!config.deduplicate);
    assert_eq!(config.device_id, "pixel-8");
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(env_keys::PARALLEL_THRESHOLD, "lots");
    env::set_var(env_keys::DEDUPLICATE, "maybe");
    env::set_var(env_keys::DEVICE_ID, "   ");

    assert_eq!(BridgeConfig::from_env(), BridgeConfig::default());
    clear_env();
}

#[test]
#[serial]
fn test_boolean_spellings() {
    clear_env();
    for (raw, expected) in [("0", false), ("off", false), ("YES", true), ("1", true)] {
        env::set_var(env_keys::DEDUPLICATE, raw);
        assert_eq!(BridgeConfig::from_env().deduplicate, expected, "{raw}");
    }
    clear_env();
}

#[test]
fn test_config_serializes_with_snake_case_fields() {
    let json = serde_json::to_value(BridgeConfig::default().with_device_id("d")).unwrap();
    assert_eq!(json["parallel_threshold"], DEFAULT_PARALLEL_THRESHOLD);
    assert_eq!(json["deduplicate"], true);
    assert_eq!(json["device_id"], "d");
}
