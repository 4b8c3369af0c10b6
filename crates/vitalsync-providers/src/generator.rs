// ABOUTME: Random sample generation for history series and live telemetry updates
// ABOUTME: ChaCha8 RNG seeded from entropy or a fixed seed for reproducible output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sample Generator
//!
//! All fabricated numbers flow through [`SampleGenerator`]. Each field is drawn
//! independently and uniformly from the half-open ranges in
//! [`crate::constants::ranges`]. History windows cover `days` calendar days
//! ending on (and including) the supplied end date, oldest first.

use crate::constants::ranges;
use crate::models::{
    ActivitySample, HistorySeries, HrvSample, LiveUpdate, Readiness, SleepSample, StressLevel,
    StressSample,
};
use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

/// Thread-safe uniform sample source
pub struct SampleGenerator {
    rng: Mutex<ChaCha8Rng>,
    seed: Option<u64>,
}

impl fmt::Debug for SampleGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleGenerator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SampleGenerator {
    /// Generator seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
            seed: None,
        }
    }

    /// Generator with a fixed seed; identical seeds yield identical draws
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Build from an optional seed
    #[must_use]
    pub fn with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Seed in use, if fixed
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut rng)
    }

    /// Uniform draw from a half-open range
    #[must_use]
    pub fn uniform(&self, range: Range<f64>) -> f64 {
        self.with_rng(|rng| rng.gen_range(range))
    }

    /// Uniform draw from `[0, 1)`
    #[must_use]
    pub fn unit(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }

    /// `true` with the given probability (clamped to `[0, 1]`)
    #[must_use]
    pub fn chance(&self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        let probability = probability.clamp(0.0, 1.0);
        self.with_rng(|rng| rng.gen_bool(probability))
    }

    /// Daily HRV with a readiness label
    #[must_use]
    pub fn hrv_history(&self, end: NaiveDate, days: u32) -> HistorySeries<HrvSample> {
        window(end, days)
            .map(|date| HrvSample {
                date,
                hrv: self.uniform(ranges::HRV),
                readiness: if self.unit() < ranges::READINESS_READY_PROBABILITY {
                    Readiness::Ready
                } else {
                    Readiness::NeedsRecovery
                },
            })
            .collect()
    }

    /// Nightly sleep score and stage breakdown
    #[must_use]
    pub fn sleep_history(&self, end: NaiveDate, days: u32) -> HistorySeries<SleepSample> {
        window(end, days)
            .map(|date| SleepSample {
                date,
                score: self.uniform(ranges::SLEEP_SCORE),
                duration: self.uniform(ranges::SLEEP_DURATION_HOURS),
                deep: self.uniform(ranges::SLEEP_DEEP_HOURS),
                rem: self.uniform(ranges::SLEEP_REM_HOURS),
                light: self.uniform(ranges::SLEEP_LIGHT_HOURS),
            })
            .collect()
    }

    /// Daily stress with a categorical level
    #[must_use]
    pub fn stress_history(&self, end: NaiveDate, days: u32) -> HistorySeries<StressSample> {
        window(end, days)
            .map(|date| StressSample {
                date,
                stress: self.uniform(ranges::STRESS),
                level: self.stress_level(),
            })
            .collect()
    }

    /// Daily steps, calories and active minutes
    #[must_use]
    pub fn activity_history(&self, end: NaiveDate, days: u32) -> HistorySeries<ActivitySample> {
        window(end, days)
            .map(|date| ActivitySample {
                date,
                steps: self.uniform(ranges::STEPS).floor() as u32,
                calories: self.uniform(ranges::CALORIES),
                active_minutes: self.uniform(ranges::ACTIVE_MINUTES),
            })
            .collect()
    }

    /// One live heart rate and stress reading
    #[must_use]
    pub fn live_update(&self, timestamp: DateTime<Utc>) -> LiveUpdate {
        LiveUpdate {
            heart_rate: self.uniform(ranges::LIVE_HEART_RATE),
            stress: self.uniform(ranges::LIVE_STRESS),
            timestamp,
        }
    }

    // High on the first draw, otherwise Medium or Low on an independent second draw
    fn stress_level(&self) -> StressLevel {
        if self.unit() > ranges::STRESS_HIGH_THRESHOLD {
            StressLevel::High
        } else if self.unit() > ranges::STRESS_MEDIUM_THRESHOLD {
            StressLevel::Medium
        } else {
            StressLevel::Low
        }
    }
}

/// Calendar days `end - (days - 1) ..= end`, oldest first
fn window(end: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..days)
        .rev()
        .filter_map(move |offset| end.checked_sub_days(Days::new(u64::from(offset))))
}
