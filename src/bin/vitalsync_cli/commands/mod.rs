// ABOUTME: Re-exports command modules for vitalsync-cli
// ABOUTME: Provides access to telemetry and insight commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod insights;
pub mod telemetry;
