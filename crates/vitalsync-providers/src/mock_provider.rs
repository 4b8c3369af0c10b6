// ABOUTME: Simulated wearable provider standing in for a real device vendor API
// ABOUTME: Connect handshake, reference snapshot, random history series and live updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Mock Wearable Provider
//!
//! A provider that needs no device, network or credentials. It is built once
//! at application start and shared by handle (typically
//! `Arc<dyn WearableProvider>`) with every consumer.
//!
//! ## Behavior
//!
//! - `connect` sleeps for the configured delay, then succeeds unless the
//!   configured failure rate says otherwise
//! - `get_current_metrics` requires a connection and serves the snapshot source
//! - history queries draw every field uniformly from fixed ranges
//! - live subscriptions tick on the Tokio clock, so tests can pause time
//!
//! ## Thread Safety
//!
//! The connection flag is atomic; a disconnect racing a metrics read resolves
//! to one order or the other, never to a torn state.

use crate::clock::{Clock, SystemClock};
use crate::constants::{profile, providers};
use crate::core::{
    ConnectionPolicy, LiveCallback, ProviderSettings, ReferenceSnapshot, SnapshotSource,
    WearableProvider,
};
use crate::errors::{ProviderError, ProviderResult};
use crate::generator::SampleGenerator;
use crate::models::{
    Acknowledgement, ActivitySample, ConnectionState, ConnectionStatus, DeviceInfo, DeviceType,
    HistoryKind, HistorySeries, HrvSample, MetricSnapshot, SleepSample, StressSample,
    UserProfile,
};
use crate::schedule::TickSchedule;
use crate::subscription::{spawn_live_task, LiveFeed, SubscriptionHandle, SubscriptionRegistry};
use crate::utils::with_retry;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Simulated wearable device provider
pub struct MockWearableProvider {
    settings: ProviderSettings,
    state: AtomicU8,
    connected_at: RwLock<Option<DateTime<Utc>>>,
    last_sync: RwLock<DateTime<Utc>>,
    clock: Arc<dyn Clock>,
    generator: Arc<SampleGenerator>,
    snapshot_source: Box<dyn SnapshotSource>,
    subscriptions: SubscriptionRegistry,
}

impl Default for MockWearableProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWearableProvider {
    /// Provider with default settings, the system clock and entropy-seeded data
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Provider with explicit settings
    #[must_use]
    pub fn with_settings(settings: ProviderSettings) -> Self {
        Self::builder().settings(settings).build()
    }

    /// Start building a customized provider
    #[must_use]
    pub fn builder() -> MockWearableProviderBuilder {
        MockWearableProviderBuilder::default()
    }

    /// Settings in effect
    #[must_use]
    pub const fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Connection policy in effect
    #[must_use]
    pub const fn policy(&self) -> ConnectionPolicy {
        self.settings.policy
    }

    fn set_state(&self, state: ConnectionState) -> ConnectionState {
        ConnectionState::from_u8(self.state.swap(state.to_u8(), Ordering::SeqCst))
    }

    fn ensure_connected(&self) -> ProviderResult<()> {
        if self.connection_state().is_connected() {
            Ok(())
        } else {
            Err(ProviderError::not_connected(self.name()))
        }
    }

    fn check_history_request(&self, kind: HistoryKind, days: u32) -> ProviderResult<()> {
        if days == 0 {
            return Err(ProviderError::invalid_range(days));
        }
        if self.settings.policy.require_connection_for_history {
            self.ensure_connected()?;
        }
        debug!(provider = self.name(), kind = %kind, days, "Generating history series");
        Ok(())
    }

    /// One simulated handshake
    async fn connect_once(&self) -> ProviderResult<Acknowledgement> {
        tokio::time::sleep(self.settings.connect_delay).await;

        if self.generator.chance(self.settings.connect_failure_rate) {
            self.set_state(ConnectionState::Disconnected);
            *self
                .connected_at
                .write()
                .unwrap_or_else(PoisonError::into_inner) = None;
            return Err(ProviderError::connection_failed(
                self.name(),
                "simulated handshake failure",
            ));
        }

        let now = self.clock.now();
        let previous = self.set_state(ConnectionState::Connected);
        if !previous.is_connected() {
            *self
                .connected_at
                .write()
                .unwrap_or_else(PoisonError::into_inner) = Some(now);
        }
        *self
            .last_sync
            .write()
            .unwrap_or_else(PoisonError::into_inner) = now;

        Ok(Acknowledgement::ok(providers::CONNECT_MESSAGE))
    }
}

#[async_trait]
impl WearableProvider for MockWearableProvider {
    fn name(&self) -> &'static str {
        providers::GARMIN
    }

    fn connection_state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    fn connection_status(&self) -> ConnectionStatus {
        ConnectionStatus {
            provider: self.name().to_owned(),
            state: self.connection_state(),
            connected_at: *self
                .connected_at
                .read()
                .unwrap_or_else(PoisonError::into_inner),
            active_subscriptions: self.subscriptions.active_count(),
        }
    }

    async fn connect(&self) -> ProviderResult<Acknowledgement> {
        info!(provider = self.name(), "Connecting to wearable");
        match with_retry("connect", &self.settings.retry, || self.connect_once()).await {
            Ok(ack) => {
                info!(provider = self.name(), "Wearable connected");
                Ok(ack)
            }
            Err(e) => {
                warn!(provider = self.name(), error = %e, "Wearable connection failed");
                Err(e)
            }
        }
    }

    fn disconnect(&self) -> Acknowledgement {
        let previous = self.set_state(ConnectionState::Disconnected);
        *self
            .connected_at
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;

        if self.settings.policy.cancel_subscriptions_on_disconnect {
            let cancelled = self.subscriptions.cancel_all();
            debug!(provider = self.name(), cancelled, "Cancelled live subscriptions");
        }
        if previous.is_connected() {
            info!(provider = self.name(), "Wearable disconnected");
        }
        Acknowledgement::ok(providers::DISCONNECT_MESSAGE)
    }

    async fn get_current_metrics(&self) -> ProviderResult<MetricSnapshot> {
        self.ensure_connected()?;
        Ok(self.snapshot_source.snapshot())
    }

    async fn get_hrv_history(&self, days: u32) -> ProviderResult<HistorySeries<HrvSample>> {
        self.check_history_request(HistoryKind::Hrv, days)?;
        Ok(self.generator.hrv_history(self.clock.today(), days))
    }

    async fn get_sleep_history(&self, days: u32) -> ProviderResult<HistorySeries<SleepSample>> {
        self.check_history_request(HistoryKind::Sleep, days)?;
        Ok(self.generator.sleep_history(self.clock.today(), days))
    }

    async fn get_stress_history(&self, days: u32) -> ProviderResult<HistorySeries<StressSample>> {
        self.check_history_request(HistoryKind::Stress, days)?;
        Ok(self.generator.stress_history(self.clock.today(), days))
    }

    async fn get_activity_data(
        &self,
        days: u32,
    ) -> ProviderResult<HistorySeries<ActivitySample>> {
        self.check_history_request(HistoryKind::Activity, days)?;
        Ok(self.generator.activity_history(self.clock.today(), days))
    }

    fn subscribe_to_real_time_data(&self, callback: LiveCallback) -> SubscriptionHandle {
        let (handle, shared) = spawn_live_task(
            TickSchedule::new(self.settings.live_interval),
            Arc::clone(&self.generator),
            Arc::clone(&self.clock),
            callback,
        );
        self.subscriptions.register(shared);
        debug!(
            provider = self.name(),
            subscription = %handle.id(),
            interval_ms = self.settings.live_interval.as_millis() as u64,
            "Live subscription started"
        );
        handle
    }

    fn subscribe(&self) -> LiveFeed {
        let (callback, receiver) = LiveFeed::channel();
        let handle = self.subscribe_to_real_time_data(callback);
        LiveFeed::new(receiver, handle)
    }

    fn user_profile(&self) -> UserProfile {
        UserProfile::demo()
    }

    fn devices(&self) -> Vec<DeviceInfo> {
        vec![DeviceInfo {
            id: profile::DEVICE_ID.to_owned(),
            name: profile::DEVICE_NAME.to_owned(),
            device_type: DeviceType::Smartwatch,
            last_sync: *self
                .last_sync
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        }]
    }
}

/// Builder for [`MockWearableProvider`]
#[derive(Default)]
pub struct MockWearableProviderBuilder {
    settings: ProviderSettings,
    clock: Option<Arc<dyn Clock>>,
    snapshot_source: Option<Box<dyn SnapshotSource>>,
}

impl MockWearableProviderBuilder {
    /// Replace all settings
    #[must_use]
    pub fn settings(mut self, settings: ProviderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Connection policy
    #[must_use]
    pub fn policy(mut self, policy: ConnectionPolicy) -> Self {
        self.settings.policy = policy;
        self
    }

    /// Fixed RNG seed
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.settings.seed = Some(seed);
        self
    }

    /// Simulated connect round trip
    #[must_use]
    pub fn connect_delay(mut self, delay: std::time::Duration) -> Self {
        self.settings.connect_delay = delay;
        self
    }

    /// Live update interval
    #[must_use]
    pub fn live_interval(mut self, interval: std::time::Duration) -> Self {
        self.settings.live_interval = interval;
        self
    }

    /// Probability that a connect attempt fails
    #[must_use]
    pub fn connect_failure_rate(mut self, rate: f64) -> Self {
        self.settings.connect_failure_rate = rate;
        self
    }

    /// Clock for history dates and live timestamps
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Source of `get_current_metrics` snapshots
    #[must_use]
    pub fn snapshot_source(mut self, source: Box<dyn SnapshotSource>) -> Self {
        self.snapshot_source = Some(source);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> MockWearableProvider {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let last_sync = clock.now();
        let generator = Arc::new(SampleGenerator::with_seed(self.settings.seed));
        debug!(
            provider = providers::GARMIN,
            seed = ?generator.seed(),
            live_interval_ms = self.settings.live_interval.as_millis(),
            "Built mock wearable provider"
        );
        MockWearableProvider {
            generator,
            settings: self.settings,
            state: AtomicU8::new(ConnectionState::Disconnected.to_u8()),
            connected_at: RwLock::new(None),
            last_sync: RwLock::new(last_sync),
            clock,
            snapshot_source: self
                .snapshot_source
                .unwrap_or_else(|| Box::new(ReferenceSnapshot)),
            subscriptions: SubscriptionRegistry::default(),
        }
    }
}
