// ABOUTME: Live telemetry update and subscription identifier models
// ABOUTME: LiveUpdate carries the transient heart rate and stress pushed on every tick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Periodic partial update delivered to live subscribers
///
/// Only the latest value matters to a subscriber; updates are never retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveUpdate {
    /// Heart rate in beats per minute
    pub heart_rate: f64,
    /// Instantaneous stress
    pub stress: f64,
    /// When the update was produced
    pub timestamp: DateTime<Utc>,
}

/// Identifier of a live subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub Uuid);

impl SubscriptionId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
