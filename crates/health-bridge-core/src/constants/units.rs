// ABOUTME: Unit conversion constants for time measurements
// ABOUTME: Provides named constants to eliminate magic numbers in duration math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Milliseconds per minute
pub const MS_PER_MINUTE: f64 = MS_PER_SECOND * SECONDS_PER_MINUTE;
