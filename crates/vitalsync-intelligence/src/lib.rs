// ABOUTME: Insight engine turning telemetry history series into display aggregates
// ABOUTME: Time ranges, HRV trend detection, averages, sleep stages and insight cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `VitalSync` Intelligence
//!
//! Pure functions over [`HistorySeries`](vitalsync_core::models::HistorySeries)
//! values. Nothing here touches a provider, so every aggregate can be tested
//! against hand-built series.

/// Insight cards assembled from the aggregates
pub mod insights;
/// Selectable history windows
pub mod time_range;
/// Trend and average computations
pub mod trends;

pub use insights::{build_insight_cards, InsightCard, InsightKind, InsightReport};
pub use time_range::{TimeRange, TimeRangeError};
pub use trends::{
    average_sleep_score, average_stress, hrv_trend, sleep_stage_distribution, SleepStageShare,
    TrendDirection,
};
