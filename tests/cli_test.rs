// ABOUTME: End-to-end tests for the health-bridge binary
// ABOUTME: Runs normalize and catalog against temporary files and checks output and exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn health_bridge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_health-bridge"))
        .args(args)
        .env_remove("HEALTH_BRIDGE_DEDUPLICATE")
        .env_remove("HEALTH_BRIDGE_DEVICE_ID")
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run health-bridge")
}

fn write_input(dir: &TempDir, document: &Value) -> String {
    let path = dir.path().join("input.json");
    fs::write(&path, serde_json::to_vec(document).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

fn heart_rate(uuid: &str, bpm: f64, date_to: i64) -> Value {
    json!({
        "uuid": uuid, "value": bpm, "date_from": 1_000, "date_to": date_to,
        "source_id": "com.google.fit", "source_name": "Fit"
    })
}

#[test]
fn test_normalize_writes_points_and_reports_failures() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        &json!({
            "device_id": "pixel-8",
            "records": [
                heart_rate("a", 70.0, 1_000),
                heart_rate("a", 70.0, 1_000),
                heart_rate("bad", 70.0, 500),
                heart_rate("b", 72.0, 2_000)
            ]
        }),
    );
    let output_path = dir.path().join("points.json");

    let output = health_bridge(&[
        "normalize",
        "--input",
        &input,
        "--type",
        "HEART_RATE",
        "--platform",
        "google-health-connect",
        "--output",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("record 2:"), "{stderr}");

    let points: Vec<Value> = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["uuid"], "a");
    assert_eq!(points[0]["source_device_id"], "pixel-8");
    assert_eq!(points[0]["source_platform"], "google_health_connect");
    assert_eq!(points[1]["uuid"], "b");
}

#[test]
fn test_normalize_no_dedup_and_device_override_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        &json!([heart_rate("a", 70.0, 1_000), heart_rate("a", 70.0, 1_000)]),
    );

    let output = health_bridge(&[
        "normalize",
        "-i",
        &input,
        "-t",
        "HEART_RATE",
        "-p",
        "apple-health",
        "--device-id",
        "watch",
        "--no-dedup",
    ]);
    assert!(output.status.success(), "{output:?}");

    let points: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p["source_device_id"] == "watch"));
}

#[test]
fn test_normalize_fails_on_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{").unwrap();

    let output = health_bridge(&[
        "normalize",
        "--input",
        path.to_str().unwrap(),
        "--type",
        "STEPS",
        "--platform",
        "apple-health",
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_catalog_lists_types_with_availability() {
    let output = health_bridge(&["catalog"]);
    assert!(output.status.success(), "{output:?}");
    let entries: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();

    let steps = entries.iter().find(|e| e["type"] == "STEPS").unwrap();
    assert_eq!(steps["unit"], "COUNT");
    assert_eq!(steps["category"], "numeric");
    assert_eq!(
        steps["available_on"],
        json!(["apple_health", "google_health_connect"])
    );

    let filtered = health_bridge(&["catalog", "--platform", "google-health-connect"]);
    let entries: Vec<Value> = serde_json::from_slice(&filtered.stdout).unwrap();
    assert!(entries.iter().all(|e| e["type"] != "ELECTROCARDIOGRAM"));
    assert!(entries.iter().any(|e| e["type"] == "SLEEP_SESSION"));
}
