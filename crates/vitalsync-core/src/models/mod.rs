// ABOUTME: Core data models for the VitalSync telemetry service
// ABOUTME: Re-exports snapshot, history, live update and profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every model is produced by a telemetry provider and handed to consumers by
//! value. Nothing here is persisted; a new snapshot or series fully replaces
//! whatever the consumer held before.
//!
//! ## Core Models
//!
//! - `MetricSnapshot`: one point-in-time bundle of current readings
//! - `HrvSample`, `SleepSample`, `StressSample`, `ActivitySample`: per-day history
//! - `LiveUpdate`: periodic partial update pushed to subscribers
//! - `UserProfile`, `DeviceInfo`, `ConnectionStatus`: profile screen data

mod history;
mod live;
mod metrics;
mod profile;

pub use history::{
    ActivitySample, DatedSample, HistoryKind, HistorySeries, HrvSample, Readiness, SleepSample,
    StressLevel, StressSample,
};
pub use live::{LiveUpdate, SubscriptionId};
pub use metrics::{Acknowledgement, ConnectionState, HeartRateReading, MetricSnapshot, SleepSummary};
pub use profile::{ConnectionStatus, DeviceInfo, DeviceType, UserProfile};
