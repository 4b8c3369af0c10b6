// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates VITALSYNC_* parsing, validation failures and provider settings conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::time::Duration;
use vitalsync::config::{Environment, TelemetryConfig};
use vitalsync::constants::env_keys;
use vitalsync::logging::{LogFormat, LoggingConfig};
use vitalsync::providers::WearableProvider;

const ALL_KEYS: [&str; 10] = [
    env_keys::CONNECT_DELAY_MS,
    env_keys::LIVE_INTERVAL_MS,
    env_keys::CONNECT_FAILURE_RATE,
    env_keys::CONNECT_MAX_ATTEMPTS,
    env_keys::RETRY_BASE_DELAY_MS,
    env_keys::RETRY_MAX_DELAY_MS,
    env_keys::RETRY_JITTER_FACTOR,
    env_keys::REQUIRE_CONNECTION_FOR_HISTORY,
    env_keys::CANCEL_SUBSCRIPTIONS_ON_DISCONNECT,
    env_keys::SEED,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
    env::remove_var(env_keys::ENVIRONMENT);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = TelemetryConfig::from_env().unwrap();

    assert_eq!(config, TelemetryConfig::default());
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.connect_delay, Duration::from_millis(1000));
    assert_eq!(config.live_interval, Duration::from_millis(5000));
    assert!(!config.policy.require_connection_for_history);
    assert!(!config.policy.cancel_subscriptions_on_disconnect);
    assert_eq!(config.seed, None);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var(env_keys::ENVIRONMENT, "production");
    env::set_var(env_keys::CONNECT_DELAY_MS, "10");
    env::set_var(env_keys::LIVE_INTERVAL_MS, "250");
    env::set_var(env_keys::CONNECT_FAILURE_RATE, "0.25");
    env::set_var(env_keys::CONNECT_MAX_ATTEMPTS, "4");
    env::set_var(env_keys::REQUIRE_CONNECTION_FOR_HISTORY, "true");
    env::set_var(env_keys::CANCEL_SUBSCRIPTIONS_ON_DISCONNECT, "1");
    env::set_var(env_keys::SEED, "1234");

    let config = TelemetryConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    assert_eq!(config.connect_delay, Duration::from_millis(10));
    assert_eq!(config.live_interval, Duration::from_millis(250));
    assert!((config.connect_failure_rate - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.retry.max_attempts, 4);
    assert!(config.policy.require_connection_for_history);
    assert!(config.policy.cancel_subscriptions_on_disconnect);
    assert_eq!(config.seed, Some(1234));

    let settings = config.provider_settings();
    assert_eq!(settings.live_interval, Duration::from_millis(250));
    assert_eq!(settings.policy, config.policy);
    assert_eq!(settings.seed, Some(1234));
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env();
    env::set_var(env_keys::CONNECT_FAILURE_RATE, "1.5");
    assert!(TelemetryConfig::from_env().is_err());

    clear_env();
    env::set_var(env_keys::LIVE_INTERVAL_MS, "0");
    assert!(TelemetryConfig::from_env().is_err());

    clear_env();
    env::set_var(env_keys::CONNECT_DELAY_MS, "soon");
    let err = TelemetryConfig::from_env().unwrap_err();
    assert!(err.to_string().contains(env_keys::CONNECT_DELAY_MS));

    clear_env();
    env::set_var(env_keys::REQUIRE_CONNECTION_FOR_HISTORY, "maybe");
    assert!(TelemetryConfig::from_env().is_err());

    clear_env();
}

#[tokio::test(start_paused = true)]
#[serial]
async fn test_built_provider_follows_configuration() {
    clear_env();
    env::set_var(env_keys::REQUIRE_CONNECTION_FOR_HISTORY, "yes");
    let config = TelemetryConfig::from_env().unwrap();
    clear_env();

    let provider = config.build_provider();
    assert!(provider.get_hrv_history(7).await.unwrap_err().is_not_connected());
    assert!(config.summary().contains("History Requires Connection: Enabled"));
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var(env_keys::ENVIRONMENT, "production");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var(env_keys::ENVIRONMENT);

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.environment.is_production());
    assert!(config.include_location);
    assert_eq!(config.service_name, "vitalsync");

    let cli = LoggingConfig::for_cli(true);
    assert_eq!(cli.level, "debug");
    assert_eq!(cli.format, LogFormat::Compact);
}
