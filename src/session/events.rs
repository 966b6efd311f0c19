// ABOUTME: Observable state changes emitted by a workout session
// ABOUTME: Serialized with an `event` tag for the CLI's JSON line output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::models::{FormQuality, PermissionState, TempoPhase};

/// One observable change, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Camera permission moved between states
    PermissionChanged {
        /// Previous state
        from: PermissionState,
        /// New state
        to: PermissionState,
    },
    /// The session clock advanced one second
    ClockTicked {
        /// Seconds elapsed so far
        elapsed_seconds: u64,
    },
    /// A rep was counted for the current exercise
    RepCounted {
        /// Reps so far
        reps: u32,
        /// Target for the exercise
        target_reps: u32,
    },
    /// The form classification changed
    FormChanged {
        /// Previous classification
        from: FormQuality,
        /// New classification
        to: FormQuality,
    },
    /// The tempo guide moved to another phase
    TempoChanged {
        /// New phase
        phase: TempoPhase,
    },
    /// The athlete moved on to another exercise
    ExerciseAdvanced {
        /// Zero-based index of the new exercise
        index: usize,
        /// Its name
        name: String,
    },
    /// Timers stopped by the athlete
    Paused,
    /// Timers restarted by the athlete
    Resumed,
    /// Audio cues toggled
    MuteToggled {
        /// New mute flag
        muted: bool,
    },
    /// The session produced its summary
    Ended {
        /// Whether the last exercise was finished
        completed: bool,
    },
    /// The session was abandoned without a summary
    Exited,
}

impl SessionEvent {
    /// Stable event name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PermissionChanged { .. } => "permission_changed",
            Self::ClockTicked { .. } => "clock_ticked",
            Self::RepCounted { .. } => "rep_counted",
            Self::FormChanged { .. } => "form_changed",
            Self::TempoChanged { .. } => "tempo_changed",
            Self::ExerciseAdvanced { .. } => "exercise_advanced",
            Self::Paused => "paused",
            Self::Resumed => "resumed",
            Self::MuteToggled { .. } => "mute_toggled",
            Self::Ended { .. } => "ended",
            Self::Exited => "exited",
        }
    }
}
