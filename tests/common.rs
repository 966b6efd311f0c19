// ABOUTME: Shared test utilities for formcoach integration tests
// ABOUTME: Builds plans and sessions with deterministic samplers and recording collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `formcoach`

use std::time::Duration;

use formcoach::models::{Exercise, ExercisePlan, FormQuality, PermissionState};
use formcoach::session::{RecordingNavigator, ScriptedFormSampler, WorkoutSession};

/// Simulated camera authorization delay
pub const PERMISSION_DELAY: Duration = Duration::from_millis(1_500);

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub fn exercise(name: &str, target_reps: u32, tempo: &str) -> Exercise {
    Exercise::new(name, target_reps, tempo).expect("valid exercise")
}

/// Squats 12 `3-1-2`, Push-ups 15 `2-1-2`
pub fn scenario_plan() -> ExercisePlan {
    ExercisePlan::new(vec![
        exercise("Squats", 12, "3-1-2"),
        exercise("Push-ups", 15, "2-1-2"),
    ])
    .expect("valid plan")
}

/// Session that always samples `quality`, with a recording navigator
pub fn session_with(
    plan: ExercisePlan,
    quality: FormQuality,
) -> (WorkoutSession, RecordingNavigator) {
    let navigator = RecordingNavigator::new();
    let session = WorkoutSession::builder(plan)
        .sampler(ScriptedFormSampler::constant(quality))
        .navigator(navigator.clone())
        .build();
    (session, navigator)
}

/// Request camera access and let the authorization delay elapse
pub fn grant(session: &mut WorkoutSession) {
    session.request_permission().expect("request permission");
    session
        .advance_time(PERMISSION_DELAY)
        .expect("advance through permission delay");
    assert_eq!(session.state().permission, PermissionState::Granted);
}

/// Granted session over `plan` sampling `good`
pub fn granted_session(plan: ExercisePlan) -> (WorkoutSession, RecordingNavigator) {
    let (mut session, navigator) = session_with(plan, FormQuality::Good);
    grant(&mut session);
    (session, navigator)
}
