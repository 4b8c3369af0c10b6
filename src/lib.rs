// ABOUTME: Main library entry point for the VitalSync wearable telemetry service
// ABOUTME: Wires the simulated provider, insights engine, configuration, logging and dashboard session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `VitalSync`
//!
//! A simulated wearable telemetry service that stands in for a real device
//! vendor API. It serves a current health snapshot, per-day history series
//! and a live feed of heart rate and stress readings.
//!
//! ## Architecture
//!
//! - **Core** (`vitalsync-core`): models, constants and errors
//! - **Providers** (`vitalsync-providers`): the `WearableProvider` contract and
//!   the simulated `MockWearableProvider`
//! - **Intelligence** (`vitalsync-intelligence`): HRV trend, averages and
//!   insight cards
//! - **This crate**: environment configuration, logging, the dashboard
//!   session and the `vitalsync-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitalsync::config::TelemetryConfig;
//! use vitalsync::dashboard::DashboardSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = TelemetryConfig::from_env()?;
//!     let provider = Arc::new(config.build_provider());
//!     let mut session = DashboardSession::start(provider).await;
//!     if let Some(overview) = session.next_update().await {
//!         println!("Heart rate: {}", overview.heart_rate);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Dashboard session over a shared provider
pub mod dashboard;

/// Structured logging setup
pub mod logging;

/// Shared domain models, constants and errors
pub use vitalsync_core::{constants, errors, models};

/// Insight aggregates
pub use vitalsync_intelligence as intelligence;

/// Provider contract and simulated provider
pub use vitalsync_providers as providers;
