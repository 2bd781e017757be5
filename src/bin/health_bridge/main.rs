// ABOUTME: health-bridge CLI - normalizes raw native health records from the command line
// ABOUTME: Runs the batch pipeline over JSON files and prints the data type catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Normalize a JSON array of raw step records read from Apple Health
//! health-bridge normalize --input steps.json --type STEPS --platform apple-health
//!
//! # Keep duplicates and write the points to a file
//! health-bridge normalize --input hr.json --type HEART_RATE \
//!     --platform google-health-connect --no-dedup --output points.json
//!
//! # Print the catalog of types readable on Health Connect
//! health-bridge catalog --platform google-health-connect
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use health_bridge::model::HealthPlatform;
use health_bridge::{BridgeConfig, LoggingConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "health-bridge",
    about = "Normalize Apple Health and Health Connect records",
    long_about = "Turns raw native health records into the unified health data point model, \
                  reporting malformed records and removing exact duplicates."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Assemble and deduplicate a batch of raw records
    Normalize(NormalizeArgs),

    /// Print the logical data type catalog as JSON
    Catalog {
        /// Only list types available on this platform
        #[arg(long, value_parser = parse_platform)]
        platform: Option<HealthPlatform>,
    },
}

/// Arguments of `health-bridge normalize`
#[derive(Args)]
struct NormalizeArgs {
    /// JSON file holding an array of raw records, or a `{device_id, records}` envelope
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Logical data type of every record in the batch (e.g. STEPS)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    data_type: String,

    /// Platform the records were read from
    #[arg(long, short = 'p', value_parser = parse_platform)]
    platform: HealthPlatform,

    /// Device id stamped on every point (overrides the input and environment)
    #[arg(long)]
    device_id: Option<String>,

    /// Keep duplicate points
    #[arg(long)]
    no_dedup: bool,

    /// Write points here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

fn parse_platform(name: &str) -> Result<HealthPlatform, String> {
    HealthPlatform::from_name(name).ok_or_else(|| {
        format!("unknown platform '{name}' (expected apple-health or google-health-connect)")
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;
    let config = BridgeConfig::from_env();
    debug!(?config, "Loaded configuration");

    match cli.command {
        Command::Normalize(args) => commands::normalize::run(&args, config),
        Command::Catalog { platform } => commands::catalog::run(platform),
    }
}
