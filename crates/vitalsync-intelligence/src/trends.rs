// ABOUTME: Trend and average computations over telemetry history series
// ABOUTME: HRV direction, mean stress and sleep scores, latest-night sleep stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use vitalsync_core::constants::insights::HRV_TREND_WINDOW;
use vitalsync_core::models::{HrvSample, SleepSample, StressSample};

/// Direction of a metric over recent days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Recent values above the preceding ones
    Improving,
    /// Recent values at or below the preceding ones
    Declining,
}

impl TrendDirection {
    /// Whether the trend is upward
    #[must_use]
    pub const fn is_improving(self) -> bool {
        matches!(self, Self::Improving)
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improving => f.write_str("Improving"),
            Self::Declining => f.write_str("Declining"),
        }
    }
}

/// Hours spent in one sleep stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepStageShare {
    /// Stage name (`Deep Sleep`, `REM Sleep`, `Light Sleep`)
    pub stage: String,
    /// Hours in the stage
    pub hours: f64,
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = count as f64;
    values.sum::<f64>() / count
}

/// Compare the latest HRV values with the ones just before them
///
/// Uses up to three samples per side. Short series split evenly, so two
/// samples compare the last day with the one before it. Returns `None` for
/// fewer than two samples.
#[must_use]
pub fn hrv_trend(samples: &[HrvSample]) -> Option<TrendDirection> {
    if samples.len() < 2 {
        return None;
    }
    let window = HRV_TREND_WINDOW.min(samples.len() / 2);
    let (rest, recent) = samples.split_at(samples.len() - window);
    let previous = &rest[rest.len() - window..];

    let recent = mean(recent.iter().map(|s| s.hrv));
    let previous = mean(previous.iter().map(|s| s.hrv));
    Some(if recent > previous {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    })
}

/// Mean daily stress, `0.0` for an empty series
#[must_use]
pub fn average_stress(samples: &[StressSample]) -> f64 {
    mean(samples.iter().map(|s| s.stress))
}

/// Mean nightly sleep score, `0.0` for an empty series
#[must_use]
pub fn average_sleep_score(samples: &[SleepSample]) -> f64 {
    mean(samples.iter().map(|s| s.score))
}

/// Stage breakdown of the most recent night, empty for an empty series
#[must_use]
pub fn sleep_stage_distribution(samples: &[SleepSample]) -> Vec<SleepStageShare> {
    samples.last().map_or_else(Vec::new, |night| {
        vec![
            SleepStageShare {
                stage: "Deep Sleep".to_owned(),
                hours: night.deep,
            },
            SleepStageShare {
                stage: "REM Sleep".to_owned(),
                hours: night.rem,
            },
            SleepStageShare {
                stage: "Light Sleep".to_owned(),
                hours: night.light,
            },
        ]
    })
}
