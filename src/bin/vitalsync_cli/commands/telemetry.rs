// ABOUTME: Telemetry commands for vitalsync-cli
// ABOUTME: Handles metrics, history, watch and profile operations against the provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use vitalsync::{
    config::TelemetryConfig, dashboard::DashboardSession, models::HistoryKind,
    providers::WearableProvider,
};

use crate::helpers::display::print_json;

/// Connect and print the current snapshot
pub async fn metrics(provider: &dyn WearableProvider) -> Result<()> {
    provider
        .connect()
        .await
        .with_context(|| format!("Failed to connect to {}", provider.name()))?;
    let snapshot = provider.get_current_metrics().await?;
    print_json(&snapshot)
}

/// Print one history series
pub async fn history(
    provider: &dyn WearableProvider,
    config: &TelemetryConfig,
    kind: HistoryKind,
    days: u32,
) -> Result<()> {
    if config.policy.require_connection_for_history {
        provider.connect().await?;
    }
    info!(kind = %kind, days, "Fetching history");
    let series = provider
        .get_history_json(kind, days)
        .await
        .with_context(|| format!("Failed to load {kind} history"))?;
    print_json(&series)
}

/// Start a dashboard session and print `updates` live overviews
pub async fn watch(provider: Arc<dyn WearableProvider>, updates: usize) -> Result<()> {
    let mut session = DashboardSession::start(provider).await;
    print_json(&json!({
        "connected": session.is_connected(),
        "overview": session.overview(),
    }))?;

    if !session.is_connected() {
        anyhow::bail!("Dashboard is not connected; no live updates available");
    }

    for _ in 0..updates {
        let next = tokio::select! {
            next = session.next_update() => next,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, closing dashboard session");
                None
            }
        };
        let Some(overview) = next else {
            break;
        };
        print_json(&overview)?;
    }
    session.close();
    Ok(())
}

/// Print profile, devices and connection status
pub async fn profile(provider: &dyn WearableProvider) -> Result<()> {
    if let Err(e) = provider.connect().await {
        tracing::warn!(error = %e, "Showing profile while disconnected");
    }
    print_json(&json!({
        "profile": provider.user_profile(),
        "devices": provider.devices(),
        "status": provider.connection_status(),
    }))
}
