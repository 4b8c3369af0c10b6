// ABOUTME: Per-day history sample models for HRV, sleep, stress and activity series
// ABOUTME: HistoryKind selector plus categorical readiness and stress labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered per-day samples, oldest first
pub type HistorySeries<T> = Vec<T>;

/// A sample pinned to one calendar day
pub trait DatedSample {
    /// Calendar day the sample covers
    fn date(&self) -> NaiveDate;
}

/// Which history series to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    /// Heart rate variability
    Hrv,
    /// Sleep score and stages
    Sleep,
    /// Daily stress
    Stress,
    /// Steps, calories and active minutes
    Activity,
}

impl HistoryKind {
    /// All kinds in display order
    pub const ALL: [Self; 4] = [Self::Hrv, Self::Sleep, Self::Stress, Self::Activity];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hrv => "hrv",
            Self::Sleep => "sleep",
            Self::Stress => "stress",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hrv" => Ok(Self::Hrv),
            "sleep" => Ok(Self::Sleep),
            "stress" => Ok(Self::Stress),
            "activity" | "steps" => Ok(Self::Activity),
            other => Err(format!(
                "unknown history kind '{other}' (expected hrv, sleep, stress or activity)"
            )),
        }
    }
}

/// Recovery readiness label attached to HRV samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Readiness {
    /// Recovered and ready to train
    Ready,
    /// Recovery still in progress
    NeedsRecovery,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
            Self::NeedsRecovery => write!(f, "Needs Recovery"),
        }
    }
}

/// Categorical stress label attached to stress samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    /// Low stress day
    Low,
    /// Medium stress day
    Medium,
    /// High stress day
    High,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// One day of heart rate variability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrvSample {
    /// Calendar day
    pub date: NaiveDate,
    /// HRV value
    pub hrv: f64,
    /// Readiness label
    pub readiness: Readiness,
}

/// One night of sleep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSample {
    /// Calendar day the night ended on
    pub date: NaiveDate,
    /// Sleep score
    pub score: f64,
    /// Total hours asleep
    pub duration: f64,
    /// Deep sleep hours
    pub deep: f64,
    /// REM sleep hours
    pub rem: f64,
    /// Light sleep hours
    pub light: f64,
}

/// One day of stress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressSample {
    /// Calendar day
    pub date: NaiveDate,
    /// Average stress
    pub stress: f64,
    /// Categorical label
    pub level: StressLevel,
}

/// One day of activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySample {
    /// Calendar day
    pub date: NaiveDate,
    /// Step count
    pub steps: u32,
    /// Calories burned
    pub calories: f64,
    /// Active minutes
    pub active_minutes: f64,
}

macro_rules! impl_dated_sample {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DatedSample for $ty {
                fn date(&self) -> NaiveDate {
                    self.date
                }
            }
        )+
    };
}

impl_dated_sample!(HrvSample, SleepSample, StressSample, ActivitySample);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_kind_parsing() {
        assert_eq!("HRV".parse::<HistoryKind>(), Ok(HistoryKind::Hrv));
        assert_eq!("steps".parse::<HistoryKind>(), Ok(HistoryKind::Activity));
        assert!("calories".parse::<HistoryKind>().is_err());
        for kind in HistoryKind::ALL {
            assert_eq!(kind.as_str().parse::<HistoryKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_labels_display() {
        assert_eq!(Readiness::NeedsRecovery.to_string(), "Needs Recovery");
        assert_eq!(StressLevel::Medium.to_string(), "Medium");
    }
}
