// ABOUTME: Integration tests for the insights engine
// ABOUTME: Checks trend, averages, sleep stages and cards on hand-built and generated series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use vitalsync::intelligence::{
    average_sleep_score, average_stress, build_insight_cards, sleep_stage_distribution,
    InsightKind, InsightReport, TimeRange, TrendDirection,
};
use vitalsync::models::{SleepSample, StressLevel, StressSample};
use vitalsync::providers::WearableProvider;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .checked_add_days(chrono::Days::new(offset))
        .unwrap()
}

fn stress(values: &[f64]) -> Vec<StressSample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &stress)| StressSample {
            date: day(i as u64),
            stress,
            level: StressLevel::Medium,
        })
        .collect()
}

fn sleep(scores: &[f64]) -> Vec<SleepSample> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| SleepSample {
            date: day(i as u64),
            score,
            duration: 8.0,
            deep: 1.5 + i as f64 * 0.1,
            rem: 1.6,
            light: 4.2,
        })
        .collect()
}

#[test]
fn test_averages() {
    assert!((average_stress(&stress(&[20.0, 30.0, 40.0])) - 30.0).abs() < 1e-9);
    assert!((average_sleep_score(&sleep(&[80.0, 90.0])) - 85.0).abs() < 1e-9);
    assert!(average_stress(&[]).abs() < f64::EPSILON);
    assert!(average_sleep_score(&[]).abs() < f64::EPSILON);
}

#[test]
fn test_sleep_stages_come_from_latest_night() {
    let stages = sleep_stage_distribution(&sleep(&[80.0, 85.0, 90.0]));
    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0].stage, "Deep Sleep");
    assert!((stages[0].hours - 1.7).abs() < 1e-9);
    assert_eq!(stages[1].stage, "REM Sleep");
    assert_eq!(stages[2].stage, "Light Sleep");

    assert!(sleep_stage_distribution(&[]).is_empty());
}

#[test]
fn test_cards_round_and_flag_values() {
    let cards = build_insight_cards(&[], &sleep(&[81.6, 82.0]), &stress(&[25.0, 28.4]));
    assert_eq!(cards.len(), 3);

    assert_eq!(cards[0].kind, InsightKind::HrvTrend);
    assert_eq!(cards[0].value, "Declining");
    assert!(!cards[0].favorable);

    assert_eq!(cards[1].kind, InsightKind::SleepQuality);
    assert_eq!(cards[1].title, "Sleep Quality");
    assert_eq!(cards[1].value, "82");

    assert_eq!(cards[2].kind, InsightKind::StressLevel);
    assert_eq!(cards[2].value, "27");
    assert!(cards[2].favorable);

    let stressed = build_insight_cards(&[], &[], &stress(&[30.0, 50.0]));
    assert_eq!(stressed[2].value, "40");
    assert!(!stressed[2].favorable);
}

#[tokio::test(start_paused = true)]
async fn test_report_over_generated_history() {
    let provider = common::test_provider();
    for range in TimeRange::ALL {
        let days = range.days();
        let hrv = provider.get_hrv_history(days).await.unwrap();
        let sleep = provider.get_sleep_history(days).await.unwrap();
        let stress = provider.get_stress_history(days).await.unwrap();

        let report = InsightReport::from_series(range, &hrv, &sleep, &stress);

        assert_eq!(report.range, range);
        assert!(matches!(
            report.hrv_trend,
            Some(TrendDirection::Improving | TrendDirection::Declining)
        ));
        assert!((20.0..60.0).contains(&report.average_stress));
        assert!((75.0..95.0).contains(&report.average_sleep_score));
        assert_eq!(report.sleep_stages.len(), 3);
        assert_eq!(report.cards.len(), 3);
    }
}
