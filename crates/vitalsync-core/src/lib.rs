// ABOUTME: Core types and constants for the VitalSync wearable telemetry service
// ABOUTME: Foundation crate with error handling, health metric models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VitalSync Core
//!
//! Foundation crate providing shared types and constants for the VitalSync
//! telemetry workspace. Providers, insights and the dashboard all speak in
//! these types.
//!
//! ## Modules
//!
//! - **errors**: `ProviderError` and the `ProviderResult` alias
//! - **constants**: reference readings, sampling ranges and timing defaults
//! - **models**: snapshots, history samples, live updates and profile data

/// Error types shared by all telemetry providers
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Health metric data models
pub mod models;
