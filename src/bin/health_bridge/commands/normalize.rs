// ABOUTME: normalize command for health-bridge
// ABOUTME: Reads raw records, runs the pipeline, writes points as JSON and reports failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use health_bridge::model::HealthDataType;
use health_bridge::{normalize, BatchOutcome, BridgeConfig, RecordBatch};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::NormalizeArgs;

/// Run the pipeline over one input file
///
/// Per-record failures are reported on stderr and do not fail the command.
pub fn run(args: &NormalizeArgs, config: BridgeConfig) -> Result<()> {
    let file = File::open(&args.input)
        .map_err(|e| anyhow!("Failed to open {}: {e}", args.input.display()))?;
    let batch = RecordBatch::read_from(BufReader::new(file))?;

    let device_id = args
        .device_id
        .clone()
        .or(batch.device_id)
        .unwrap_or_else(|| config.device_id.clone());
    let deduplicate = config.deduplicate && !args.no_dedup;
    let config = config.with_deduplicate(deduplicate);
    let data_type = HealthDataType::from_name(&args.data_type);

    let outcome = normalize(
        &data_type,
        &batch.records,
        args.platform,
        &device_id,
        &config,
    );

    report_failures(&outcome);
    write_points(&outcome, args.output.as_deref())?;

    info!(
        data_type = %data_type,
        records = batch.records.len(),
        points = outcome.points.len(),
        failed = outcome.failure_count(),
        "Normalized batch"
    );
    Ok(())
}

fn report_failures(outcome: &BatchOutcome) {
    if outcome.is_complete() {
        return;
    }
    eprintln!("{} record(s) could not be normalized:", outcome.failure_count());
    for failure in &outcome.failures {
        eprintln!("  {failure}");
    }
}

fn write_points(outcome: &BatchOutcome, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow!("Failed to create {}: {e}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &outcome.points)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &outcome.points)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
