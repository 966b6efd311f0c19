// ABOUTME: Read-only post-workout summary produced when a session ends
// ABOUTME: Duration, aggregate form score, calories estimate, and per-exercise breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result for one exercise the athlete reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseBreakdown {
    /// Exercise name
    pub name: String,
    /// Reps counted when the athlete moved on
    pub reps: u32,
    /// Target reps for the exercise
    pub target_reps: u32,
    /// Mean form score (0-100) over the exercise's samples
    pub form_score: u32,
    /// Number of form samples taken
    pub form_samples: u32,
    /// Whether a warning-level sample occurred
    pub had_warning: bool,
}

impl ExerciseBreakdown {
    /// Whether the target was reached
    #[must_use]
    pub const fn target_met(&self) -> bool {
        self.reps >= self.target_reps
    }
}

/// Summary handed to the summary screen once the session state is discarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: Uuid,
    /// When the session controller was created
    pub started_at: DateTime<Utc>,
    /// When the session ended
    pub ended_at: DateTime<Utc>,
    /// Active seconds counted by the session clock
    pub duration_seconds: u64,
    /// Duration formatted as `m:ss`
    pub duration: String,
    /// True when the last exercise was finished, false on an early end
    pub completed: bool,
    /// Reps summed across the breakdown
    pub total_reps: u32,
    /// Overall form score (0-100)
    pub form_score: u32,
    /// Estimated calories burned
    pub calories: u32,
    /// Headline under the overall score
    pub headline: String,
    /// Things that went well
    pub improvements: Vec<String>,
    /// Things to fix next time
    pub corrections: Vec<String>,
    /// One entry per exercise reached, in order
    pub exercise_breakdown: Vec<ExerciseBreakdown>,
}

impl SessionSummary {
    /// Number of exercises in the breakdown
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercise_breakdown.len()
    }
}
