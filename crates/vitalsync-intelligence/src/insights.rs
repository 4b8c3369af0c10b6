// ABOUTME: Insight cards summarizing recovery, sleep and stress history
// ABOUTME: Builds the HRV Trend, Sleep Quality and Stress Level cards for a time range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight report assembly
//!
//! A report bundles every aggregate the insights view shows for one
//! [`TimeRange`]. Cards carry display-ready values: averages are rounded to
//! whole numbers and the HRV trend is rendered as a word.

use crate::time_range::TimeRange;
use crate::trends::{
    average_sleep_score, average_stress, hrv_trend, sleep_stage_distribution, SleepStageShare,
    TrendDirection,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vitalsync_core::constants::insights::STRESS_FAVORABLE_BELOW;
use vitalsync_core::models::{HrvSample, SleepSample, StressSample};

/// Which aggregate a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// HRV direction
    HrvTrend,
    /// Average sleep score
    SleepQuality,
    /// Average stress
    StressLevel,
}

/// One summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightCard {
    /// Aggregate shown
    pub kind: InsightKind,
    /// Card heading
    pub title: String,
    /// Display value
    pub value: String,
    /// One-line explanation
    pub description: String,
    /// Whether the value reads as good news
    pub favorable: bool,
}

/// Every insight aggregate for one time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Window the series cover
    pub range: TimeRange,
    /// HRV direction, `None` with fewer than two samples
    pub hrv_trend: Option<TrendDirection>,
    /// Mean daily stress
    pub average_stress: f64,
    /// Mean nightly sleep score
    pub average_sleep_score: f64,
    /// Latest-night sleep stages
    pub sleep_stages: Vec<SleepStageShare>,
    /// Summary cards
    pub cards: Vec<InsightCard>,
}

impl InsightReport {
    /// Compute the report from the three series of one window
    #[must_use]
    pub fn from_series(
        range: TimeRange,
        hrv: &[HrvSample],
        sleep: &[SleepSample],
        stress: &[StressSample],
    ) -> Self {
        debug!(
            range = %range,
            hrv_samples = hrv.len(),
            sleep_samples = sleep.len(),
            stress_samples = stress.len(),
            "Building insight report"
        );
        Self {
            range,
            hrv_trend: hrv_trend(hrv),
            average_stress: average_stress(stress),
            average_sleep_score: average_sleep_score(sleep),
            sleep_stages: sleep_stage_distribution(sleep),
            cards: build_insight_cards(hrv, sleep, stress),
        }
    }
}

/// Build the HRV Trend, Sleep Quality and Stress Level cards
///
/// A missing HRV trend renders as declining.
#[must_use]
pub fn build_insight_cards(
    hrv: &[HrvSample],
    sleep: &[SleepSample],
    stress: &[StressSample],
) -> Vec<InsightCard> {
    let trend = hrv_trend(hrv).unwrap_or(TrendDirection::Declining);
    let avg_stress = average_stress(stress);
    let avg_sleep = average_sleep_score(sleep);
    let direction = if trend.is_improving() {
        "upward"
    } else {
        "downward"
    };

    vec![
        InsightCard {
            kind: InsightKind::HrvTrend,
            title: "HRV Trend".to_owned(),
            value: trend.to_string(),
            description: format!("Your recovery is trending {direction}"),
            favorable: trend.is_improving(),
        },
        InsightCard {
            kind: InsightKind::SleepQuality,
            title: "Sleep Quality".to_owned(),
            value: format!("{}", avg_sleep.round()),
            description: "Average sleep score this week".to_owned(),
            favorable: true,
        },
        InsightCard {
            kind: InsightKind::StressLevel,
            title: "Stress Level".to_owned(),
            value: format!("{}", avg_stress.round()),
            description: "Average stress level".to_owned(),
            favorable: avg_stress < STRESS_FAVORABLE_BELOW,
        },
    ]
}
