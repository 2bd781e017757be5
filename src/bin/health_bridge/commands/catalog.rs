// ABOUTME: catalog command for health-bridge
// ABOUTME: Prints every logical data type with its unit, category and platform availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use health_bridge::model::{HealthDataCategory, HealthDataType, HealthDataUnit, HealthPlatform};
use health_bridge::platforms::is_available;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct CatalogEntry<'a> {
    #[serde(rename = "type")]
    data_type: &'a HealthDataType,
    unit: HealthDataUnit,
    category: HealthDataCategory,
    available_on: Vec<HealthPlatform>,
}

impl<'a> CatalogEntry<'a> {
    fn new(data_type: &'a HealthDataType) -> Self {
        Self {
            data_type,
            unit: data_type.unit(),
            category: data_type.category(),
            available_on: HealthPlatform::ALL
                .into_iter()
                .filter(|platform| is_available(data_type, *platform))
                .collect(),
        }
    }
}

/// Print the catalog, restricted to `platform` when given
pub fn run(platform: Option<HealthPlatform>) -> Result<()> {
    let entries: Vec<CatalogEntry<'_>> = HealthDataType::KNOWN
        .iter()
        .map(CatalogEntry::new)
        .filter(|entry| match platform {
            Some(platform) => entry.available_on.contains(&platform),
            None => true,
        })
        .collect();

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &entries)?;
    writeln!(stdout)?;
    Ok(())
}
