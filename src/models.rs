// ABOUTME: Workout domain models re-exported from formcoach-core
// ABOUTME: Exercise, ExercisePlan, form and tempo enums, permission state, and the session summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Exercise` / `Tempo`: one step of a workout and its timing pattern
//! - `ExercisePlan`: validated, non-empty exercise sequence
//! - `FormQuality` / `TempoPhase`: live feedback values
//! - `PermissionState`: camera gate
//! - `SessionSummary`: what the summary screen receives

pub use formcoach_core::models::*;
