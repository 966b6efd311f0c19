// ABOUTME: Read-only rendering view of a live workout session
// ABOUTME: Carries display labels, progress, and the primary action for renderers and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::formatters::{format_clock, progress_fraction};
use crate::models::{Exercise, FormQuality, PermissionState, TempoPhase};

use super::controller::SessionState;

/// Label of the primary action on the last exercise
pub const ACTION_FINISH: &str = "Finish";
/// Label of the primary action on any other exercise
pub const ACTION_NEXT: &str = "Next";

/// Everything a live-workout screen needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Session identifier
    pub session_id: Uuid,
    /// Camera permission state
    pub permission: PermissionState,
    /// Setup-screen headline while not granted
    pub permission_headline: Option<&'static str>,
    /// One-based position of the current exercise
    pub exercise_number: usize,
    /// Exercises in the plan
    pub exercise_count: usize,
    /// Current exercise name
    pub exercise_name: String,
    /// Reps counted on the current exercise
    pub reps: u32,
    /// Target reps of the current exercise
    pub target_reps: u32,
    /// `reps / target_reps` in `0.0..=1.0`
    pub progress: f64,
    /// Elapsed time as `m:ss`
    pub clock: String,
    /// Elapsed seconds
    pub elapsed_seconds: u64,
    /// Current form classification
    pub form_quality: FormQuality,
    /// Form badge label
    pub form_label: &'static str,
    /// Corrective cue, if any
    pub form_cue: Option<&'static str>,
    /// Tempo pattern, only for exercises that declare one
    pub tempo: Option<String>,
    /// Current tempo phase, only for exercises that declare a tempo
    pub tempo_phase: Option<TempoPhase>,
    /// Seconds the current phase lasts in the tempo pattern
    pub tempo_phase_secs: Option<u32>,
    /// Whether timers are stopped
    pub paused: bool,
    /// Whether audio cues are muted
    pub muted: bool,
    /// `Next`, or `Finish` on the last exercise
    pub primary_action: &'static str,
    /// Whether the session has ended or exited
    pub ended: bool,
}

impl SessionSnapshot {
    /// Build a snapshot from the controller's state
    #[must_use]
    pub fn capture(
        session_id: Uuid,
        state: &SessionState,
        exercise: &Exercise,
        exercise_count: usize,
        ended: bool,
    ) -> Self {
        let tempo = exercise.tempo();
        Self {
            session_id,
            permission: state.permission,
            permission_headline: state.permission.headline(),
            exercise_number: state.exercise_index + 1,
            exercise_count,
            exercise_name: exercise.name().to_owned(),
            reps: state.reps,
            target_reps: exercise.target_reps(),
            progress: progress_fraction(state.reps, exercise.target_reps()),
            clock: format_clock(state.elapsed_seconds),
            elapsed_seconds: state.elapsed_seconds,
            form_quality: state.form_quality,
            form_label: state.form_quality.label(),
            form_cue: state.form_quality.cue(),
            tempo: tempo.map(ToString::to_string),
            tempo_phase: tempo.map(|_| state.tempo_phase),
            tempo_phase_secs: tempo.and_then(|t| t.phase_secs(state.tempo_phase)),
            paused: state.paused,
            muted: state.muted,
            primary_action: if state.exercise_index + 1 >= exercise_count {
                ACTION_FINISH
            } else {
                ACTION_NEXT
            },
            ended,
        }
    }

    /// "Exercise k of N"
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Exercise {} of {}", self.exercise_number, self.exercise_count)
    }
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(headline) = self.permission_headline {
            return write!(f, "[{}] {headline}", self.permission);
        }
        write!(
            f,
            "{} {} | {}: {}/{} | {}",
            self.clock,
            self.position_label(),
            self.exercise_name,
            self.reps,
            self.target_reps,
            self.form_label
        )?;
        if let Some(cue) = self.form_cue {
            write!(f, " ({cue})")?;
        }
        if let (Some(tempo), Some(phase)) = (&self.tempo, self.tempo_phase) {
            write!(f, " | tempo {tempo} {}", phase.label())?;
            if let Some(secs) = self.tempo_phase_secs {
                write!(f, " {secs}s")?;
            }
        }
        if self.paused {
            f.write_str(" | PAUSED")?;
        }
        if self.muted {
            f.write_str(" | muted")?;
        }
        write!(f, " | [{}]", self.primary_action)
    }
}
