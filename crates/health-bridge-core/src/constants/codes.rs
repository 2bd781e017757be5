// ABOUTME: Named constants for native integer code tables
// ABOUTME: Recording method, menstrual flow, ECG classification, and insulin reason codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Native code tables
//!
//! The two platforms hand over several enumerations as bare integers. Where
//! they agree the code lives once; where they disagree (menstrual flow) each
//! platform gets its own table.

// =============================================================================
// Recording Method (shared)
// =============================================================================

/// Recording method: unknown
pub const RECORDING_METHOD_UNKNOWN: i64 = 0;

/// Recording method: actively recorded (e.g. a workout session)
pub const RECORDING_METHOD_ACTIVE: i64 = 1;

/// Recording method: passively recorded by a device
pub const RECORDING_METHOD_AUTOMATIC: i64 = 2;

/// Recording method: entered by hand
pub const RECORDING_METHOD_MANUAL: i64 = 3;

// =============================================================================
// Menstrual Flow: Apple Health
// =============================================================================

/// Apple Health flow: unspecified
pub const APPLE_FLOW_UNSPECIFIED: i64 = 1;

/// Apple Health flow: light
pub const APPLE_FLOW_LIGHT: i64 = 2;

/// Apple Health flow: medium
pub const APPLE_FLOW_MEDIUM: i64 = 3;

/// Apple Health flow: heavy
pub const APPLE_FLOW_HEAVY: i64 = 4;

/// Apple Health flow: none
pub const APPLE_FLOW_NONE: i64 = 5;

// =============================================================================
// Menstrual Flow: Health Connect
// =============================================================================

/// Health Connect flow: unknown
pub const HEALTH_CONNECT_FLOW_UNKNOWN: i64 = 0;

/// Health Connect flow: light
pub const HEALTH_CONNECT_FLOW_LIGHT: i64 = 1;

/// Health Connect flow: medium
pub const HEALTH_CONNECT_FLOW_MEDIUM: i64 = 2;

/// Health Connect flow: heavy
pub const HEALTH_CONNECT_FLOW_HEAVY: i64 = 3;

// =============================================================================
// Electrocardiogram Classification (shared)
// =============================================================================

/// ECG classification: not set
pub const ECG_NOT_SET: i64 = 0;

/// ECG classification: sinus rhythm
pub const ECG_SINUS_RHYTHM: i64 = 1;

/// ECG classification: atrial fibrillation
pub const ECG_ATRIAL_FIBRILLATION: i64 = 2;

/// ECG classification: inconclusive, low heart rate
pub const ECG_INCONCLUSIVE_LOW_HEART_RATE: i64 = 3;

/// ECG classification: inconclusive, high heart rate
pub const ECG_INCONCLUSIVE_HIGH_HEART_RATE: i64 = 4;

/// ECG classification: inconclusive, poor reading
pub const ECG_INCONCLUSIVE_POOR_READING: i64 = 5;

/// ECG classification: inconclusive, other reason
pub const ECG_INCONCLUSIVE_OTHER: i64 = 6;

/// ECG classification: unrecognized
pub const ECG_UNRECOGNIZED: i64 = 7;

// =============================================================================
// Insulin Delivery Reason (shared)
// =============================================================================

/// Insulin delivery: basal
pub const INSULIN_REASON_BASAL: i64 = 1;

/// Insulin delivery: bolus
pub const INSULIN_REASON_BOLUS: i64 = 2;
