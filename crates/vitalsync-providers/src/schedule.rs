// ABOUTME: Pure tick arithmetic for periodic live telemetry delivery
// ABOUTME: Maps elapsed time to due ticks and tick numbers to absolute deadlines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;
use tokio::time::Instant;

/// Smallest interval a schedule will accept
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-rate tick schedule
///
/// Deadlines are derived from the start instant rather than from the previous
/// tick, so delivery never drifts even when a callback runs long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
}

impl TickSchedule {
    /// Schedule firing every `interval` (raised to [`MIN_TICK_INTERVAL`] if smaller)
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_TICK_INTERVAL),
        }
    }

    /// Interval between ticks
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks that have come due after `elapsed`
    #[must_use]
    pub fn ticks_due(&self, elapsed: Duration) -> u64 {
        u64::try_from(elapsed.as_nanos() / self.interval.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Offset from start of the 1-based `tick`
    #[must_use]
    pub fn offset_of(&self, tick: u64) -> Duration {
        let nanos = self.interval.as_nanos().saturating_mul(u128::from(tick));
        u64::try_from(nanos).map_or(Duration::MAX, Duration::from_nanos)
    }

    /// Absolute deadline of the 1-based `tick`
    #[must_use]
    pub fn deadline(&self, start: Instant, tick: u64) -> Instant {
        start
            .checked_add(self.offset_of(tick))
            .unwrap_or_else(|| start + Duration::from_secs(86_400 * 365 * 30))
    }
}
