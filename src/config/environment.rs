// ABOUTME: Environment configuration for the simulated wearable provider
// ABOUTME: Parses VITALSYNC_* variables, validates them and converts them into provider settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use vitalsync_core::constants::{env_keys, timing};
use vitalsync_providers::{
    ConnectionPolicy, MockWearableProvider, ProviderSettings, RetryBackoffConfig,
};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string, falling back to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Simulated provider configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Simulated connect round trip
    pub connect_delay: Duration,
    /// Interval between live updates
    pub live_interval: Duration,
    /// Probability in `[0, 1]` that one connect attempt fails
    pub connect_failure_rate: f64,
    /// Connect retry behavior
    pub retry: RetryBackoffConfig,
    /// Connection-state policy
    pub policy: ConnectionPolicy,
    /// Fixed RNG seed
    pub seed: Option<u64>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        let settings = ProviderSettings::default();
        Self {
            environment: Environment::default(),
            connect_delay: settings.connect_delay,
            live_interval: settings.live_interval,
            connect_failure_rate: settings.connect_failure_rate,
            retry: settings.retry,
            policy: settings.policy,
            seed: settings.seed,
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        let defaults = RetryBackoffConfig::default();
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            connect_delay: Duration::from_millis(parse_var(
                env_keys::CONNECT_DELAY_MS,
                timing::DEFAULT_CONNECT_DELAY_MS,
            )?),
            live_interval: Duration::from_millis(parse_var(
                env_keys::LIVE_INTERVAL_MS,
                timing::DEFAULT_LIVE_INTERVAL_MS,
            )?),
            connect_failure_rate: parse_var(env_keys::CONNECT_FAILURE_RATE, 0.0)?,
            retry: RetryBackoffConfig {
                max_attempts: parse_var(env_keys::CONNECT_MAX_ATTEMPTS, defaults.max_attempts)?,
                base_delay: Duration::from_millis(parse_var(
                    env_keys::RETRY_BASE_DELAY_MS,
                    timing::DEFAULT_RETRY_BASE_DELAY_MS,
                )?),
                max_delay: Duration::from_millis(parse_var(
                    env_keys::RETRY_MAX_DELAY_MS,
                    timing::DEFAULT_RETRY_MAX_DELAY_MS,
                )?),
                jitter_factor: parse_var(env_keys::RETRY_JITTER_FACTOR, defaults.jitter_factor)?,
            },
            policy: ConnectionPolicy {
                require_connection_for_history: parse_flag(
                    env_keys::REQUIRE_CONNECTION_FOR_HISTORY,
                    false,
                )?,
                cancel_subscriptions_on_disconnect: parse_flag(
                    env_keys::CANCEL_SUBSCRIPTIONS_ON_DISCONNECT,
                    false,
                )?,
            },
            seed: env::var(env_keys::SEED)
                .ok()
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .with_context(|| format!("{} must be an unsigned integer", env_keys::SEED))
                })
                .transpose()?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero live interval, a failure rate outside
    /// `[0, 1]`, zero connect attempts or a jitter factor outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.live_interval.is_zero() {
            bail!("{} must be greater than zero", env_keys::LIVE_INTERVAL_MS);
        }
        if !(0.0..=1.0).contains(&self.connect_failure_rate) {
            bail!(
                "{} must be between 0 and 1, got {}",
                env_keys::CONNECT_FAILURE_RATE,
                self.connect_failure_rate
            );
        }
        if self.retry.max_attempts == 0 {
            bail!("{} must be at least 1", env_keys::CONNECT_MAX_ATTEMPTS);
        }
        if !(0.0..=1.0).contains(&self.retry.jitter_factor) {
            bail!(
                "{} must be between 0 and 1, got {}",
                env_keys::RETRY_JITTER_FACTOR,
                self.retry.jitter_factor
            );
        }
        if self.retry.max_delay < self.retry.base_delay {
            bail!(
                "{} must not be smaller than {}",
                env_keys::RETRY_MAX_DELAY_MS,
                env_keys::RETRY_BASE_DELAY_MS
            );
        }
        Ok(())
    }

    /// Settings for a provider built from this configuration
    #[must_use]
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            connect_delay: self.connect_delay,
            live_interval: self.live_interval,
            connect_failure_rate: self.connect_failure_rate,
            retry: self.retry.clone(),
            policy: self.policy,
            seed: self.seed,
        }
    }

    /// Build the simulated provider described by this configuration
    #[must_use]
    pub fn build_provider(&self) -> MockWearableProvider {
        MockWearableProvider::with_settings(self.provider_settings())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "VitalSync Configuration:\n\
             - Environment: {}\n\
             - Connect Delay: {}ms\n\
             - Live Interval: {}ms\n\
             - Connect Failure Rate: {}\n\
             - Connect Attempts: {}\n\
             - History Requires Connection: {}\n\
             - Disconnect Cancels Subscriptions: {}\n\
             - Seed: {}",
            self.environment,
            self.connect_delay.as_millis(),
            self.live_interval.as_millis(),
            self.connect_failure_rate,
            self.retry.max_attempts,
            enabled(self.policy.require_connection_for_history),
            enabled(self.policy.cancel_subscriptions_on_disconnect),
            self.seed
                .map_or_else(|| "random".to_owned(), |seed| seed.to_string()),
        )
    }
}

const fn enabled(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value '{raw}' for {key}")),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &str, default: bool) -> Result<bool> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("Invalid boolean '{raw}' for {key}"),
    }
}
