// ABOUTME: Main library entry point for the formcoach live workout simulator
// ABOUTME: Session engine, configuration, and logging on top of the formcoach-core domain types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Formcoach
//!
//! Simulates the live workout screen of a fitness-coaching app: a camera
//! permission gate, then a session clock, rep counter, form-quality feedback,
//! and tempo guide advancing on fixed timers until the athlete finishes the
//! last exercise or ends early.
//!
//! ## Architecture
//!
//! - **Models**: exercises, plans, feedback enums, summary (from `formcoach-core`)
//! - **Session**: tick-driven controller, scheduler, and async runner
//! - **Config**: timer periods, sampler seed, and plan file from the environment
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::Duration;
//! use formcoach::models::{ExercisePlan, PermissionState};
//! use formcoach::session::WorkoutSession;
//!
//! let mut session = WorkoutSession::builder(ExercisePlan::default_workout())
//!     .seed(7)
//!     .build();
//! session.request_permission()?;
//! session.advance_time(Duration::from_millis(1_500))?;
//! assert_eq!(session.state().permission, PermissionState::Granted);
//!
//! session.advance_time(Duration::from_secs(5))?;
//! assert_eq!(session.state().reps, 2);
//! # Ok::<(), formcoach::errors::SessionError>(())
//! ```

/// Session configuration
pub mod config;

/// Timing, scoring, and environment constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Display formatting helpers
pub use formcoach_core::formatters;

/// Structured logging setup
pub mod logging;

/// Workout domain models
pub mod models;

/// Live session engine
pub mod session;
