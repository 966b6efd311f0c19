// ABOUTME: Timing, scoring, route, and environment-variable constants re-exported from formcoach-core
// ABOUTME: Single source for the simulation's fixed periods and summary calibration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use formcoach_core::constants::*;
