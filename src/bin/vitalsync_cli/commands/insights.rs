// ABOUTME: Insight commands for vitalsync-cli
// ABOUTME: Loads the history series of a window and prints the insight report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use vitalsync::{
    config::TelemetryConfig,
    intelligence::{InsightReport, TimeRange},
    providers::WearableProvider,
};

use crate::helpers::display::print_json;

/// Print the insight report for `range`
pub async fn report(
    provider: &dyn WearableProvider,
    config: &TelemetryConfig,
    range: TimeRange,
) -> Result<()> {
    if config.policy.require_connection_for_history {
        provider.connect().await?;
    }
    let days = range.days();
    let (hrv, sleep, stress) = tokio::try_join!(
        provider.get_hrv_history(days),
        provider.get_sleep_history(days),
        provider.get_stress_history(days),
    )
    .context("Failed to load history for insights")?;

    let report = InsightReport::from_series(range, &hrv, &sleep, &stress);
    print_json(&report)
}
