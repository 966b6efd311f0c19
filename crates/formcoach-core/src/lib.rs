// ABOUTME: Core types and constants for the formcoach live workout simulator
// ABOUTME: Foundation crate with error handling, exercise models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Formcoach Core
//!
//! Foundation crate providing shared types and constants for the formcoach
//! live workout session simulator. Nothing in here knows about timers or
//! async runtimes; the session engine in the main crate builds on these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `SessionError`
//! - **constants**: Timing intervals, form sampling weights, routes, and the default plan
//! - **models**: Exercises, plans, form quality, tempo phases, camera permission, summaries
//! - **formatters**: Clock and percentage formatting for display surfaces

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Exercise, `ExercisePlan`, `FormQuality`, `TempoPhase`, etc.)
pub mod models;

/// Display formatting helpers
pub mod formatters;
