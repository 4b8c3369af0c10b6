// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Reference readings, sampling ranges, timing defaults and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

use std::ops::Range;

/// Provider identity
pub mod providers {
    /// Display name of the simulated wearable vendor
    pub const GARMIN: &str = "Garmin";
    /// Acknowledgement returned by a successful connect
    pub const CONNECT_MESSAGE: &str = "Connected to Garmin successfully";
    /// Acknowledgement returned by disconnect
    pub const DISCONNECT_MESSAGE: &str = "Disconnected from Garmin";
}

/// Timing defaults for the simulated device
pub mod timing {
    /// Simulated connect round trip
    pub const DEFAULT_CONNECT_DELAY_MS: u64 = 1000;
    /// Interval between live updates
    pub const DEFAULT_LIVE_INTERVAL_MS: u64 = 5000;
    /// Connect attempts before giving up (1 means no retry)
    pub const DEFAULT_CONNECT_MAX_ATTEMPTS: u32 = 1;
    /// Base delay for exponential retry backoff
    pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 250;
    /// Upper bound for a single retry backoff
    pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 5000;
    /// Default fractional jitter applied to retry backoff
    pub const DEFAULT_RETRY_JITTER_FACTOR: f64 = 0.1;
    /// Buffered live updates per channel subscription
    pub const LIVE_FEED_CAPACITY: usize = 16;
}

/// Fixed single-reading snapshot served by the reference snapshot source
pub mod reference {
    /// Heart rate variability
    pub const HRV: f64 = 7.9;
    /// Sleep score
    pub const SLEEP_SCORE: u8 = 82;
    /// Sleep duration display string
    pub const SLEEP_DURATION: &str = "7h 45m";
    /// Deep sleep hours
    pub const SLEEP_DEEP_HOURS: f64 = 2.1;
    /// REM sleep hours
    pub const SLEEP_REM_HOURS: f64 = 1.8;
    /// Light sleep hours
    pub const SLEEP_LIGHT_HOURS: f64 = 3.85;
    /// Stress level
    pub const STRESS: u8 = 35;
    /// Body battery
    pub const BODY_BATTERY: u8 = 68;
    /// Current heart rate
    pub const HEART_RATE_CURRENT: u16 = 56;
    /// Resting heart rate
    pub const HEART_RATE_RESTING: u16 = 54;
    /// Max heart rate
    pub const HEART_RATE_MAX: u16 = 185;
    /// Daily steps
    pub const STEPS: u32 = 8492;
    /// VO2 max
    pub const VO2_MAX: f64 = 42.0;
    /// Breaths per minute
    pub const RESPIRATION_RATE: f64 = 16.0;
}

/// History window bounds
pub mod history {
    /// Standard dashboard windows in days
    pub const STANDARD_WINDOWS: [u32; 3] = [7, 30, 90];
    /// One year of daily samples
    pub const YEAR_WINDOW_DAYS: u32 = 365;
}

/// Half-open uniform sampling ranges for generated data
pub mod ranges {
    use super::Range;

    /// Daily HRV
    pub const HRV: Range<f64> = 7.5..9.0;
    /// Probability of a `Ready` readiness label
    pub const READINESS_READY_PROBABILITY: f64 = 0.7;

    /// Sleep score
    pub const SLEEP_SCORE: Range<f64> = 75.0..95.0;
    /// Sleep duration in hours
    pub const SLEEP_DURATION_HOURS: Range<f64> = 7.0..9.0;
    /// Deep sleep hours
    pub const SLEEP_DEEP_HOURS: Range<f64> = 1.5..2.5;
    /// REM sleep hours
    pub const SLEEP_REM_HOURS: Range<f64> = 1.2..2.0;
    /// Light sleep hours
    pub const SLEEP_LIGHT_HOURS: Range<f64> = 3.0..5.0;

    /// Daily stress
    pub const STRESS: Range<f64> = 20.0..60.0;
    /// First draw above this marks a high-stress day
    pub const STRESS_HIGH_THRESHOLD: f64 = 0.7;
    /// Second draw above this marks a medium-stress day
    pub const STRESS_MEDIUM_THRESHOLD: f64 = 0.3;

    /// Daily steps
    pub const STEPS: Range<f64> = 6000.0..12000.0;
    /// Daily calories
    pub const CALORIES: Range<f64> = 1800.0..2600.0;
    /// Daily active minutes
    pub const ACTIVE_MINUTES: Range<f64> = 30.0..120.0;

    /// Live heart rate
    pub const LIVE_HEART_RATE: Range<f64> = 50.0..70.0;
    /// Live stress
    pub const LIVE_STRESS: Range<f64> = 20.0..60.0;
}

/// Demo profile data served by the mock provider
pub mod profile {
    /// Demo user display name
    pub const USER_NAME: &str = "Demo User";
    /// Demo user age bracket
    pub const USER_AGE: &str = "Adult";
    /// Demo user gender label
    pub const USER_GENDER: &str = "user";
    /// Demo menopause status label
    pub const USER_MENOPAUSE_STATUS: &str = "demo";
    /// Demo health goals
    pub const HEALTH_GOALS: [&str; 3] = ["Better Sleep", "Stress Management", "Wellness Tracking"];
    /// Simulated watch identifier
    pub const DEVICE_ID: &str = "garmin_watch_001";
    /// Simulated watch model
    pub const DEVICE_NAME: &str = "Garmin Venu 3";
}

/// Environment variable names read by the configuration layer
pub mod env_keys {
    /// Connect delay in milliseconds
    pub const CONNECT_DELAY_MS: &str = "VITALSYNC_CONNECT_DELAY_MS";
    /// Live update interval in milliseconds
    pub const LIVE_INTERVAL_MS: &str = "VITALSYNC_LIVE_INTERVAL_MS";
    /// Probability in [0, 1] that a connect attempt fails
    pub const CONNECT_FAILURE_RATE: &str = "VITALSYNC_CONNECT_FAILURE_RATE";
    /// Connect attempts including the first one
    pub const CONNECT_MAX_ATTEMPTS: &str = "VITALSYNC_CONNECT_MAX_ATTEMPTS";
    /// Base retry backoff in milliseconds
    pub const RETRY_BASE_DELAY_MS: &str = "VITALSYNC_RETRY_BASE_DELAY_MS";
    /// Upper bound for one retry backoff in milliseconds
    pub const RETRY_MAX_DELAY_MS: &str = "VITALSYNC_RETRY_MAX_DELAY_MS";
    /// Fractional jitter applied to retry backoff
    pub const RETRY_JITTER_FACTOR: &str = "VITALSYNC_RETRY_JITTER_FACTOR";
    /// Require a connection for history queries
    pub const REQUIRE_CONNECTION_FOR_HISTORY: &str = "VITALSYNC_REQUIRE_CONNECTION_FOR_HISTORY";
    /// Cancel live subscriptions on disconnect
    pub const CANCEL_SUBSCRIPTIONS_ON_DISCONNECT: &str =
        "VITALSYNC_CANCEL_SUBSCRIPTIONS_ON_DISCONNECT";
    /// Fixed RNG seed for reproducible data
    pub const SEED: &str = "VITALSYNC_SEED";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service names for structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const VITALSYNC: &str = "vitalsync";
}

/// Thresholds used by the insights view
pub mod insights {
    /// Samples averaged on each side of an HRV trend comparison
    pub const HRV_TREND_WINDOW: usize = 3;
    /// Average stress below this value is shown as favorable
    pub const STRESS_FAVORABLE_BELOW: f64 = 30.0;
}
