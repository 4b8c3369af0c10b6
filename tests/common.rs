// ABOUTME: Shared test utilities for VitalSync integration tests
// ABOUTME: Provides quiet logging, a fixed manual clock and fast simulated providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `vitalsync`

use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::{Arc, Once};
use std::time::Duration;
use vitalsync::providers::{ManualClock, MockWearableProvider, MockWearableProviderBuilder};

static INIT_LOGGER: Once = Once::new();

/// Live interval used by test providers
pub const TEST_LIVE_INTERVAL: Duration = Duration::from_millis(5000);

/// Connect delay used by test providers
pub const TEST_CONNECT_DELAY: Duration = Duration::from_millis(1000);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar day every test clock reports as today
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Manual clock fixed at noon on [`test_today`]
pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap(),
    ))
}

/// Builder preconfigured with the test clock, a seed and the reference timings
pub fn test_provider_builder() -> MockWearableProviderBuilder {
    init_test_logging();
    MockWearableProvider::builder()
        .clock(test_clock())
        .seed(7)
        .connect_delay(TEST_CONNECT_DELAY)
        .live_interval(TEST_LIVE_INTERVAL)
}

/// Provider built from [`test_provider_builder`]
pub fn test_provider() -> MockWearableProvider {
    test_provider_builder().build()
}

/// Sleep just past `ticks` live intervals on the paused Tokio clock
pub async fn sleep_ticks(ticks: u32) {
    tokio::time::sleep(TEST_LIVE_INTERVAL * ticks + Duration::from_millis(1)).await;
}
