// ABOUTME: Platform layer for Apple Health and Health Connect
// ABOUTME: Per-platform type availability and typed write-request encoding into raw records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! Platform-specific knowledge that sits between the unified model and the
//! native SDK calls: which logical types each platform exposes, and how a
//! typed write request becomes the raw record the native layer inserts.

/// Which logical data types each platform exposes
pub mod availability;
/// Write-request validation errors
pub mod errors;
/// Typed write requests and their raw encoding
pub mod write;

pub use availability::{available_types, is_available};
pub use errors::{WriteError, WriteResult};
pub use write::{encode, WriteRequest};
