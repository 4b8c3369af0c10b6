// ABOUTME: User profile, paired device and connection status models
// ABOUTME: Demo profile data surfaced by the profile screen alongside the device toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::metrics::ConnectionState;
use crate::constants::profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Demo user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age bracket
    pub age: String,
    /// Gender label
    pub gender: String,
    /// Menopause status label
    pub menopause_status: String,
    /// Wellness goals
    pub health_goals: Vec<String>,
}

impl UserProfile {
    /// The demo profile served by the mock provider
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: profile::USER_NAME.to_owned(),
            age: profile::USER_AGE.to_owned(),
            gender: profile::USER_GENDER.to_owned(),
            menopause_status: profile::USER_MENOPAUSE_STATUS.to_owned(),
            health_goals: profile::HEALTH_GOALS
                .iter()
                .map(|goal| (*goal).to_owned())
                .collect(),
        }
    }
}

/// Form factor of a paired device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Wrist-worn smartwatch
    Smartwatch,
    /// Chest strap or other heart rate monitor
    HeartRateMonitor,
}

/// A paired wearable device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device identifier
    pub id: String,
    /// Model name
    pub name: String,
    /// Form factor
    pub device_type: DeviceType,
    /// Last successful sync
    pub last_sync: DateTime<Utc>,
}

/// Snapshot of a provider's connection bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    /// Provider display name
    pub provider: String,
    /// Current lifecycle state
    pub state: ConnectionState,
    /// When the current connection was established
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_at: Option<DateTime<Utc>>,
    /// Live subscriptions not yet cancelled
    pub active_subscriptions: usize,
}
