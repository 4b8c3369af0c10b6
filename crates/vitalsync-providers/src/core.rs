// ABOUTME: Core provider trait and settings for wearable telemetry access
// ABOUTME: Defines the connect/query/subscribe contract, connection policy and snapshot sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Wearable Provider Contract
//!
//! [`WearableProvider`] is the seam consumers program against. It mirrors a
//! device vendor API:
//!
//! - **Lifecycle**: `connect` (async, simulated round trip) and `disconnect`
//! - **Snapshot**: `get_current_metrics`, gated on the connection state
//! - **History**: one series per metric family over a window of days
//! - **Live data**: callback subscriptions and channel feeds
//!
//! ## Example
//!
//! ```rust,no_run
//! use vitalsync_providers::{MockWearableProvider, WearableProvider};
//!
//! # async fn example() -> Result<(), vitalsync_providers::ProviderError> {
//! let provider = MockWearableProvider::new();
//! provider.connect().await?;
//! let snapshot = provider.get_current_metrics().await?;
//! println!("HRV {}", snapshot.hrv);
//! # Ok(())
//! # }
//! ```

use crate::constants::timing;
use crate::errors::ProviderResult;
use crate::models::{
    Acknowledgement, ActivitySample, ConnectionState, ConnectionStatus, DeviceInfo,
    HistoryKind, HistorySeries, HrvSample, LiveUpdate, MetricSnapshot, SleepSample, StressSample,
    UserProfile,
};
use crate::subscription::{LiveFeed, SubscriptionHandle};
use crate::utils::RetryBackoffConfig;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use std::time::Duration;

/// Callback invoked with every live update
pub type LiveCallback = Box<dyn FnMut(LiveUpdate) + Send + 'static>;

/// Connection-state rules for history queries and live subscriptions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionPolicy {
    /// History queries fail with `NotConnected` while disconnected
    pub require_connection_for_history: bool,
    /// `disconnect` cancels every live subscription of the provider
    pub cancel_subscriptions_on_disconnect: bool,
}

impl ConnectionPolicy {
    /// Strict policy: history needs a connection and disconnect ends live data
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            require_connection_for_history: true,
            cancel_subscriptions_on_disconnect: true,
        }
    }
}

/// Tunables for a simulated provider
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Simulated connect round trip
    pub connect_delay: Duration,
    /// Interval between live updates
    pub live_interval: Duration,
    /// Probability in `[0, 1]` that one connect attempt fails
    pub connect_failure_rate: f64,
    /// Retry behavior for failed connect attempts
    pub retry: RetryBackoffConfig,
    /// Connection-state policy
    pub policy: ConnectionPolicy,
    /// Fixed RNG seed for reproducible data
    pub seed: Option<u64>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            connect_delay: Duration::from_millis(timing::DEFAULT_CONNECT_DELAY_MS),
            live_interval: Duration::from_millis(timing::DEFAULT_LIVE_INTERVAL_MS),
            connect_failure_rate: 0.0,
            retry: RetryBackoffConfig::default(),
            policy: ConnectionPolicy::default(),
            seed: None,
        }
    }
}

/// Produces the snapshot served by `get_current_metrics`
pub trait SnapshotSource: Send + Sync + Debug {
    /// Current readings
    fn snapshot(&self) -> MetricSnapshot;
}

/// Fixed illustrative reading
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceSnapshot;

impl SnapshotSource for ReferenceSnapshot {
    fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot::reference()
    }
}

/// Connect/query/subscribe contract of a wearable device API
#[async_trait]
pub trait WearableProvider: Send + Sync {
    /// Provider display name
    fn name(&self) -> &'static str;

    /// Current connection state
    fn connection_state(&self) -> ConnectionState;

    /// Connection bookkeeping for status displays
    fn connection_status(&self) -> ConnectionStatus;

    /// Simulate the connect handshake
    ///
    /// Connecting while already connected succeeds and stays connected.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConnectionFailed` when every attempt fails.
    async fn connect(&self) -> ProviderResult<Acknowledgement>;

    /// Drop the connection immediately; a no-op when already disconnected
    fn disconnect(&self) -> Acknowledgement;

    /// Current readings
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotConnected` unless connected.
    async fn get_current_metrics(&self) -> ProviderResult<MetricSnapshot>;

    /// Daily HRV for the last `days` days, oldest first
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidRange` for a zero-day window and
    /// `ProviderError::NotConnected` when the policy requires a connection.
    async fn get_hrv_history(&self, days: u32) -> ProviderResult<HistorySeries<HrvSample>>;

    /// Nightly sleep for the last `days` days, oldest first
    ///
    /// # Errors
    ///
    /// Same as [`WearableProvider::get_hrv_history`].
    async fn get_sleep_history(&self, days: u32) -> ProviderResult<HistorySeries<SleepSample>>;

    /// Daily stress for the last `days` days, oldest first
    ///
    /// # Errors
    ///
    /// Same as [`WearableProvider::get_hrv_history`].
    async fn get_stress_history(&self, days: u32) -> ProviderResult<HistorySeries<StressSample>>;

    /// Daily activity for the last `days` days, oldest first
    ///
    /// # Errors
    ///
    /// Same as [`WearableProvider::get_hrv_history`].
    async fn get_activity_data(&self, days: u32)
        -> ProviderResult<HistorySeries<ActivitySample>>;

    /// Any history series as JSON, for generic consumers such as the CLI
    ///
    /// # Errors
    ///
    /// Same as [`WearableProvider::get_hrv_history`].
    async fn get_history_json(&self, kind: HistoryKind, days: u32) -> ProviderResult<Value> {
        let value = match kind {
            HistoryKind::Hrv => serde_json::to_value(self.get_hrv_history(days).await?),
            HistoryKind::Sleep => serde_json::to_value(self.get_sleep_history(days).await?),
            HistoryKind::Stress => serde_json::to_value(self.get_stress_history(days).await?),
            HistoryKind::Activity => serde_json::to_value(self.get_activity_data(days).await?),
        };
        value.map_err(|e| crate::errors::ProviderError::configuration(self.name(), e.to_string()))
    }

    /// Invoke `callback` with a fresh update every live interval until cancelled
    ///
    /// Must be called from within a Tokio runtime.
    fn subscribe_to_real_time_data(&self, callback: LiveCallback) -> SubscriptionHandle;

    /// Channel-based live subscription
    ///
    /// Must be called from within a Tokio runtime.
    fn subscribe(&self) -> LiveFeed;

    /// Profile of the account the device belongs to
    fn user_profile(&self) -> UserProfile;

    /// Paired devices
    fn devices(&self) -> Vec<DeviceInfo>;
}
