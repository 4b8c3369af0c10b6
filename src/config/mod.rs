// ABOUTME: Configuration module for the VitalSync telemetry service
// ABOUTME: Environment-only settings for the simulated provider and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! Everything is read from environment variables. There are no config files.

/// Environment variable parsing, validation and provider settings
pub mod environment;

pub use environment::{Environment, TelemetryConfig};
