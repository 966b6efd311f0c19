// ABOUTME: Core domain models for the live workout session
// ABOUTME: Exercises, plans, form quality, tempo phases, camera permission, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models

/// Exercise definition and tempo parsing
pub mod exercise;
/// Real-time feedback classifications (form quality, tempo phase)
pub mod feedback;
/// Camera permission states
pub mod permission;
/// Validated ordered exercise list
pub mod plan;
/// Post-workout summary records
pub mod summary;

pub use exercise::{Exercise, ExerciseDefinition, Tempo};
pub use feedback::{FormQuality, TempoPhase};
pub use permission::PermissionState;
pub use plan::ExercisePlan;
pub use summary::{ExerciseBreakdown, SessionSummary};
