// ABOUTME: Current-reading snapshot and connection lifecycle models
// ABOUTME: MetricSnapshot, SleepSummary, HeartRateReading, ConnectionState, Acknowledgement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::reference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device connection lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No active connection (initial state)
    #[default]
    Disconnected,
    /// Simulated handshake completed
    Connected,
}

impl ConnectionState {
    /// Convert from atomic u8 representation
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Connected,
            _ => Self::Disconnected,
        }
    }

    /// Convert to atomic u8 representation
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Disconnected => 0,
            Self::Connected => 1,
        }
    }

    /// Whether this is the connected state
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connected => write!(f, "connected"),
        }
    }
}

/// Result of a connect or disconnect call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Whether the transition succeeded
    pub success: bool,
    /// Human-readable status message
    pub message: String,
}

impl Acknowledgement {
    /// Successful acknowledgement with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Last night's sleep summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    /// Sleep score (0-100)
    pub score: u8,
    /// Display duration, e.g. `7h 45m`
    pub duration: String,
    /// Deep sleep hours
    pub deep: f64,
    /// REM sleep hours
    pub rem: f64,
    /// Light sleep hours
    pub light: f64,
}

/// Heart rate readings in beats per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateReading {
    /// Most recent reading
    pub current: u16,
    /// Resting heart rate
    pub resting: u16,
    /// Observed maximum
    pub max: u16,
}

/// A single point-in-time bundle of current metric readings
///
/// # Examples
///
/// ```rust
/// use vitalsync_core::models::MetricSnapshot;
///
/// let snapshot = MetricSnapshot::reference();
/// assert_eq!(snapshot.heart_rate.current, 56);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Heart rate variability
    pub hrv: f64,
    /// Last night's sleep
    pub sleep: SleepSummary,
    /// Stress level (0-100)
    pub stress: u8,
    /// Body battery energy reserve (0-100)
    pub body_battery: u8,
    /// Heart rate readings
    pub heart_rate: HeartRateReading,
    /// Steps today
    pub steps: u32,
    /// Estimated VO2 max
    pub vo2_max: f64,
    /// Breaths per minute
    pub respiration_rate: f64,
}

impl MetricSnapshot {
    /// The fixed illustrative reading served by the reference source
    #[must_use]
    pub fn reference() -> Self {
        Self {
            hrv: reference::HRV,
            sleep: SleepSummary {
                score: reference::SLEEP_SCORE,
                duration: reference::SLEEP_DURATION.to_owned(),
                deep: reference::SLEEP_DEEP_HOURS,
                rem: reference::SLEEP_REM_HOURS,
                light: reference::SLEEP_LIGHT_HOURS,
            },
            stress: reference::STRESS,
            body_battery: reference::BODY_BATTERY,
            heart_rate: HeartRateReading {
                current: reference::HEART_RATE_CURRENT,
                resting: reference::HEART_RATE_RESTING,
                max: reference::HEART_RATE_MAX,
            },
            steps: reference::STEPS,
            vo2_max: reference::VO2_MAX,
            respiration_rate: reference::RESPIRATION_RATE,
        }
    }
}
