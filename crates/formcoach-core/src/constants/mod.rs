// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Timing intervals, form sampling weights, scoring, routes, and the default workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Timer periods and runner resolution
pub mod timing;

/// Form scoring weights and summary thresholds
pub mod scoring;

pub use timing::*;

/// Navigation routes handed to the navigation collaborator
pub mod routes {
    /// Post-workout summary screen
    pub const WORKOUT_SUMMARY: &str = "/workout/summary";
    /// Return to the previous screen
    pub const BACK: &str = "..";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the CLI / library service
    pub const FORMCOACH: &str = "formcoach";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Clock tick period override (milliseconds)
    pub const CLOCK_INTERVAL_MS: &str = "FORMCOACH_CLOCK_INTERVAL_MS";
    /// Form sampler period override (milliseconds)
    pub const FORM_INTERVAL_MS: &str = "FORMCOACH_FORM_INTERVAL_MS";
    /// Tempo cycler period override (milliseconds)
    pub const TEMPO_INTERVAL_MS: &str = "FORMCOACH_TEMPO_INTERVAL_MS";
    /// Rep accumulator period override (milliseconds)
    pub const REP_INTERVAL_MS: &str = "FORMCOACH_REP_INTERVAL_MS";
    /// Simulated camera authorization delay (milliseconds)
    pub const PERMISSION_DELAY_MS: &str = "FORMCOACH_PERMISSION_DELAY_MS";
    /// Seed for the form-quality sampler
    pub const SEED: &str = "FORMCOACH_SEED";
    /// Path to a JSON exercise plan
    pub const PLAN_PATH: &str = "FORMCOACH_PLAN_PATH";
}

/// Default workout: (name, target reps, tempo). Plank is held for seconds and has no tempo.
pub const DEFAULT_WORKOUT: &[(&str, u32, &str)] = &[
    ("Squats", 12, "3-1-2"),
    ("Push-ups", 15, "2-1-2"),
    ("Lunges", 10, "3-1-2"),
    ("Plank", 30, ""),
    ("Deadlifts", 10, "3-1-2"),
];

/// Cue shown with a warning-level form classification
pub const FORM_WARNING_CUE: &str = "Keep your back straight";
