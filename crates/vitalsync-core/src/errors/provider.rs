// ABOUTME: Structured error types for wearable telemetry provider operations
// ABOUTME: Distinguishes connection-state, range and configuration failures with retry hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Error Types
//!
//! Errors raised by telemetry providers. Callers are expected to handle
//! `NotConnected` by presenting a disconnected state rather than failing hard.

use thiserror::Error;

/// Errors raised by a telemetry provider
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Operation requires an active device connection
    #[error("Not connected to {provider}. Please connect first.")]
    NotConnected {
        /// Provider that rejected the call
        provider: String,
    },

    /// The simulated connection handshake failed
    #[error("Failed to connect to {provider}: {reason}")]
    ConnectionFailed {
        /// Provider that failed to connect
        provider: String,
        /// Human-readable failure reason
        reason: String,
    },

    /// A history window of zero days was requested
    #[error("Invalid history range: {days} days (expected at least 1)")]
    InvalidRange {
        /// Requested number of days
        days: u32,
    },

    /// Provider is misconfigured or its internal state is unusable
    #[error("Configuration error for {provider}: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What went wrong
        details: String,
    },
}

impl ProviderError {
    /// Create a "not connected" error
    #[must_use]
    pub fn not_connected(provider: impl Into<String>) -> Self {
        Self::NotConnected {
            provider: provider.into(),
        }
    }

    /// Create a "connection failed" error
    #[must_use]
    pub fn connection_failed(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Create an "invalid range" error
    #[must_use]
    pub const fn invalid_range(days: u32) -> Self {
        Self::InvalidRange { days }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(provider: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConfigurationError {
            provider: provider.into(),
            details: details.into(),
        }
    }

    /// Whether retrying the same operation may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. })
    }

    /// Whether this error signals a missing connection
    #[must_use]
    pub const fn is_not_connected(&self) -> bool {
        matches!(self, Self::NotConnected { .. })
    }
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_connection_failures_are_retryable() {
        assert!(ProviderError::connection_failed("garmin", "timeout").is_retryable());
        assert!(!ProviderError::not_connected("garmin").is_retryable());
        assert!(!ProviderError::invalid_range(0).is_retryable());
        assert!(!ProviderError::configuration("garmin", "lock").is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let err = ProviderError::not_connected("Garmin");
        assert_eq!(err.to_string(), "Not connected to Garmin. Please connect first.");
        assert!(err.is_not_connected());

        let err = ProviderError::invalid_range(0);
        assert_eq!(err.to_string(), "Invalid history range: 0 days (expected at least 1)");
    }
}
