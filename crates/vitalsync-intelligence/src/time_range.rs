// ABOUTME: Selectable history windows offered by the insights view
// ABOUTME: Parses 7d, 30d and 90d labels and maps them onto day counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use vitalsync_core::constants::history::STANDARD_WINDOWS;

/// Rejected time range label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time range '{0}' (expected 7d, 30d or 90d)")]
pub struct TimeRangeError(pub String);

/// History window for insights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    /// Last week
    #[default]
    #[serde(rename = "7d")]
    Week,
    /// Last month
    #[serde(rename = "30d")]
    Month,
    /// Last quarter
    #[serde(rename = "90d")]
    Quarter,
}

impl TimeRange {
    /// All ranges, shortest first
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Quarter];

    /// Window length in days
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => STANDARD_WINDOWS[0],
            Self::Month => STANDARD_WINDOWS[1],
            Self::Quarter => STANDARD_WINDOWS[2],
        }
    }

    /// Short label such as `30d`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7d" | "7" | "week" => Ok(Self::Week),
            "30d" | "30" | "month" => Ok(Self::Month),
            "90d" | "90" | "quarter" => Ok(Self::Quarter),
            _ => Err(TimeRangeError(s.to_owned())),
        }
    }
}
