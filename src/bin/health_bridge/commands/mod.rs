// ABOUTME: Re-exports command modules for health-bridge
// ABOUTME: Provides access to the normalize and catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod normalize;
