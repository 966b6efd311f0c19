// ABOUTME: Timer periods for the simulated live workout
// ABOUTME: Clock, form sampler, tempo cycler, rep accumulator, and permission delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session clock period: one elapsed second per tick
pub const CLOCK_INTERVAL_MS: u64 = 1_000;

/// Form-quality reclassification period
pub const FORM_INTERVAL_MS: u64 = 3_000;

/// Tempo phase rotation period
pub const TEMPO_INTERVAL_MS: u64 = 1_500;

/// Simulated rep detection period
pub const REP_INTERVAL_MS: u64 = 2_500;

/// Simulated camera authorization delay
pub const PERMISSION_DELAY_MS: u64 = 1_500;

/// How often the async runner polls wall-clock time
pub const RUNNER_RESOLUTION_MS: u64 = 100;
