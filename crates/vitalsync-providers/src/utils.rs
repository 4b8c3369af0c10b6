// ABOUTME: Shared utilities for telemetry provider implementations
// ABOUTME: Exponential backoff retry with jitter for retryable provider failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::timing;
use crate::errors::ProviderResult;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryBackoffConfig {
    /// Total attempts including the first (1 disables retry)
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Fractional jitter in `[0, 1]` applied to each delay
    pub jitter_factor: f64,
}

impl Default for RetryBackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: timing::DEFAULT_CONNECT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(timing::DEFAULT_RETRY_BASE_DELAY_MS),
            max_delay: Duration::from_millis(timing::DEFAULT_RETRY_MAX_DELAY_MS),
            jitter_factor: timing::DEFAULT_RETRY_JITTER_FACTOR,
        }
    }
}

impl RetryBackoffConfig {
    /// Configuration that never retries
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Un-jittered delay before retry number `retry` (1-based)
    #[must_use]
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(31);
        self.base_delay
            .saturating_mul(2_u32.saturating_pow(exponent))
            .min(self.max_delay)
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if self.jitter_factor <= 0.0 {
            return delay;
        }
        let factor = self.jitter_factor.min(1.0);
        let scale = rand::thread_rng().gen_range((1.0 - factor)..=(1.0 + factor));
        delay.mul_f64(scale).min(self.max_delay)
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// exhausts `config.max_attempts`
///
/// # Errors
///
/// Returns the last error produced by `operation`.
pub async fn with_retry<T, F, Fut>(
    operation_name: &str,
    config: &RetryBackoffConfig,
    mut operation: F,
) -> ProviderResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ProviderResult<T>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(operation = operation_name, attempt, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                let delay = config.jittered(config.backoff_for(attempt));
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Retryable failure, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProviderError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn config(max_attempts: u32) -> RetryBackoffConfig {
        RetryBackoffConfig {
            max_attempts,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(1000),
            jitter_factor: 0.0,
        }
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = config(5);
        assert_eq!(config.backoff_for(1), Duration::from_millis(100));
        assert_eq!(config.backoff_for(2), Duration::from_millis(200));
        assert_eq!(config.backoff_for(4), Duration::from_millis(800));
        assert_eq!(config.backoff_for(5), Duration::from_millis(1000));
        assert_eq!(config.backoff_for(40), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_until_success() {
        let calls = AtomicU32::new(0);
        let result = with_retry("connect", &config(3), || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(ProviderError::connection_failed("Garmin", "flaky"))
            } else {
                Ok(7)
            }
        })
        .await;

        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: ProviderResult<()> = with_retry("connect", &config(2), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::connection_failed("Garmin", "down"))
        })
        .await;

        assert!(matches!(result, Err(ProviderError::ConnectionFailed { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_errors_fail_fast() {
        let calls = AtomicU32::new(0);
        let result: ProviderResult<()> = with_retry("history", &config(5), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::not_connected("Garmin"))
        })
        .await;

        assert!(matches!(result, Err(ProviderError::NotConnected { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_retry_makes_a_single_attempt() {
        let calls = AtomicU32::new(0);
        let result: ProviderResult<()> =
            with_retry("connect", &RetryBackoffConfig::no_retry(), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ProviderError::connection_failed("Garmin", "down"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
