// ABOUTME: Error module root re-exporting provider error types
// ABOUTME: Keeps `use vitalsync_core::errors::*` paths stable for downstream crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Provider-level errors (connection state, ranges, configuration)
pub mod provider;

pub use provider::{ProviderError, ProviderResult};
