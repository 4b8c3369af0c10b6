// ABOUTME: Wearable telemetry provider implementations for VitalSync
// ABOUTME: Provider trait, mock wearable provider, live subscriptions, clocks and retry utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Wearable telemetry providers and the plumbing around them.
//!
//! The only provider shipped is [`MockWearableProvider`], which stands in for a
//! real device API: it simulates a connect handshake, serves a reference
//! snapshot, fabricates history series and pushes live updates on a timer.

// Re-export vitalsync-core modules so provider code can keep `crate::errors::*` paths
pub use vitalsync_core::constants;
pub use vitalsync_core::errors;
pub use vitalsync_core::models;

/// Wall-clock abstraction with a controllable test implementation
pub mod clock;
/// Provider trait, settings, connection policy and snapshot sources
pub mod core;
/// Seeded random sample generation for history and live data
pub mod generator;
/// Simulated wearable device provider
pub mod mock_provider;
/// Pure tick arithmetic for live update timers
pub mod schedule;
/// Cancellable live subscriptions and channel feeds
pub mod subscription;
/// Retry with exponential backoff
pub mod utils;

pub use crate::core::{
    ConnectionPolicy, LiveCallback, ProviderSettings, ReferenceSnapshot, SnapshotSource,
    WearableProvider,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use generator::SampleGenerator;
pub use mock_provider::{MockWearableProvider, MockWearableProviderBuilder};
pub use schedule::TickSchedule;
pub use subscription::{LiveFeed, SubscriptionHandle};
pub use utils::{with_retry, RetryBackoffConfig};
pub use vitalsync_core::errors::provider::{ProviderError, ProviderResult};
