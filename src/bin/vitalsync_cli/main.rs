// ABOUTME: VitalSync CLI - command-line access to the simulated wearable provider
// ABOUTME: Prints metrics, history, insights, profile data and a live dashboard as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Connect and print the current snapshot
//! vitalsync-cli metrics
//!
//! # Print 30 days of HRV history
//! vitalsync-cli history hrv --range 30d
//!
//! # Print insight cards for the last quarter
//! vitalsync-cli insights --range 90d
//!
//! # Follow the dashboard for five live updates
//! VITALSYNC_LIVE_INTERVAL_MS=1000 vitalsync-cli watch --updates 5
//!
//! # Print profile, paired devices and connection status
//! vitalsync-cli profile
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::debug;
use vitalsync::{
    config::TelemetryConfig, intelligence::TimeRange, logging::LoggingConfig,
    models::HistoryKind, providers::WearableProvider,
};

#[derive(Parser)]
#[command(
    name = "vitalsync-cli",
    about = "VitalSync wearable telemetry CLI",
    long_about = "Query the simulated wearable provider: current metrics, history series, insights and live updates."
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
    /// Connect and print the current metric snapshot
    Metrics,

    /// Print one history series
    History {
        /// Series to print (hrv, sleep, stress, activity)
        kind: HistoryKind,

        /// Window (7d, 30d, 90d)
        #[arg(long, default_value = "7d")]
        range: TimeRange,

        /// Explicit number of days, overriding --range
        #[arg(long)]
        days: Option<u32>,
    },

    /// Print insight cards and aggregates
    Insights {
        /// Window (7d, 30d, 90d)
        #[arg(long, default_value = "7d")]
        range: TimeRange,
    },

    /// Start a dashboard session and print live overviews
    Watch {
        /// Number of live updates to print before exiting
        #[arg(long, default_value = "3")]
        updates: usize,
    },

    /// Print the user profile, paired devices and connection status
    Profile,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = TelemetryConfig::from_env().context("Invalid VitalSync configuration")?;
    debug!("{}", config.summary());

    let provider: Arc<dyn WearableProvider> = Arc::new(config.build_provider());

    match cli.command {
        Command::Metrics => commands::telemetry::metrics(provider.as_ref()).await?,
        Command::History { kind, range, days } => {
            commands::telemetry::history(
                provider.as_ref(),
                &config,
                kind,
                days.unwrap_or_else(|| range.days()),
            )
            .await?;
        }
        Command::Insights { range } => {
            commands::insights::report(provider.as_ref(), &config, range).await?;
        }
        Command::Watch { updates } => commands::telemetry::watch(provider, updates).await?,
        Command::Profile => commands::telemetry::profile(provider.as_ref()).await?,
    }

    Ok(())
}
