// ABOUTME: Dashboard session combining the connect flow, the current snapshot and live updates
// ABOUTME: Keeps a health overview that folds in rounded heart rate and stress from the live feed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard Session
//!
//! [`DashboardSession::start`] runs the dashboard mount sequence against a
//! shared provider: connect, read the current metrics, then open a live feed.
//! Any failure along the way leaves a disconnected session showing the
//! reference overview instead of returning an error.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use vitalsync_core::models::{LiveUpdate, MetricSnapshot};
use vitalsync_providers::{LiveFeed, WearableProvider};

/// Headline numbers shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthOverview {
    /// HRV score
    pub hrv: f64,
    /// Last night's sleep score
    pub sleep_score: u8,
    /// Stress level
    pub stress: u8,
    /// Body battery
    pub body_battery: u8,
    /// Heart rate (bpm)
    pub heart_rate: u16,
    /// Steps today
    pub steps: u32,
}

impl Default for HealthOverview {
    fn default() -> Self {
        Self::from_snapshot(&MetricSnapshot::reference())
    }
}

impl HealthOverview {
    /// Overview of a full snapshot
    #[must_use]
    pub const fn from_snapshot(snapshot: &MetricSnapshot) -> Self {
        Self {
            hrv: snapshot.hrv,
            sleep_score: snapshot.sleep.score,
            stress: snapshot.stress,
            body_battery: snapshot.body_battery,
            heart_rate: snapshot.heart_rate.current,
            steps: snapshot.steps,
        }
    }

    /// Replace heart rate and stress with the rounded live values
    pub fn apply_live_update(&mut self, update: &LiveUpdate) {
        self.heart_rate = round_to_u16(update.heart_rate);
        self.stress = round_to_u8(update.stress);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u16(value: f64) -> u16 {
    value.round().clamp(0.0, f64::from(u16::MAX)) as u16
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}

/// One dashboard's view of a provider
pub struct DashboardSession {
    provider: Arc<dyn WearableProvider>,
    overview: HealthOverview,
    feed: Option<LiveFeed>,
}

impl DashboardSession {
    /// Connect, load the snapshot and subscribe to live data
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn start(provider: Arc<dyn WearableProvider>) -> Self {
        let mut session = Self {
            provider,
            overview: HealthOverview::default(),
            feed: None,
        };
        session.mount().await;
        session
    }

    async fn mount(&mut self) {
        let provider_name = self.provider.name();
        if let Err(e) = self.provider.connect().await {
            warn!(provider = provider_name, error = %e, "Dashboard could not connect");
            return;
        }
        match self.provider.get_current_metrics().await {
            Ok(snapshot) => {
                self.overview = HealthOverview::from_snapshot(&snapshot);
                self.feed = Some(self.provider.subscribe());
                info!(provider = provider_name, "Dashboard session live");
            }
            Err(e) => {
                warn!(provider = provider_name, error = %e, "Dashboard could not load metrics");
            }
        }
    }

    /// Retry the mount sequence after a failed start or a disconnect
    pub async fn reconnect(&mut self) {
        self.close();
        self.mount().await;
    }

    /// Whether the session has a live feed and the provider is connected
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.feed
            .as_ref()
            .is_some_and(|feed| !feed.handle().is_cancelled())
            && self.provider.connection_state().is_connected()
    }

    /// Current overview
    #[must_use]
    pub const fn overview(&self) -> &HealthOverview {
        &self.overview
    }

    /// Wait for the next live update and fold it into the overview
    ///
    /// Returns `None` when the session has no live feed or the feed ended.
    pub async fn next_update(&mut self) -> Option<HealthOverview> {
        let update = self.feed.as_mut()?.recv().await;
        match update {
            Some(update) => {
                self.overview.apply_live_update(&update);
                Some(self.overview)
            }
            None => {
                self.feed = None;
                None
            }
        }
    }

    /// Stop live updates
    pub fn close(&mut self) {
        if let Some(feed) = self.feed.take() {
            feed.cancel();
        }
    }
}
