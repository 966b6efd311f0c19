// ABOUTME: Integration tests for the workout session controller
// ABOUTME: Covers progression, rep clamping, tempo and pause behavior, and the end-of-session summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{exercise, grant, granted_session, ms, scenario_plan, session_with};
use formcoach::errors::SessionError;
use formcoach::models::{ExercisePlan, FormQuality, PermissionState, TempoPhase};
use formcoach::session::{
    Route, SessionEvent, SessionLifecycle, TimerKind, WorkoutSession,
};

#[test]
fn test_new_session_starts_at_first_exercise() {
    let session = WorkoutSession::builder(ExercisePlan::default_workout())
        .seed(11)
        .build();
    let state = session.state();

    assert_eq!(state.exercise_index, 0);
    assert_eq!(state.reps, 0);
    assert_eq!(state.elapsed_seconds, 0);
    assert_eq!(state.form_quality, FormQuality::Good);
    assert_eq!(state.tempo_phase, TempoPhase::Down);
    assert_eq!(state.permission, PermissionState::Prompt);
    assert!(!state.paused);
    assert!(!state.muted);
    assert!(session.armed_timers().is_empty());
    assert_eq!(session.current_exercise().name(), "Squats");
}

#[test]
fn test_two_exercise_scenario_ends_with_summary() {
    let (mut session, navigator) = session_with(scenario_plan(), FormQuality::Good);

    assert_eq!(
        session.request_permission().unwrap(),
        PermissionState::Loading
    );
    assert_eq!(
        session.drain_events(),
        vec![SessionEvent::PermissionChanged {
            from: PermissionState::Prompt,
            to: PermissionState::Loading,
        }]
    );
    assert!(session.advance_time(ms(1_499)).unwrap().is_empty());
    assert_eq!(session.state().permission, PermissionState::Loading);

    let events = session.advance_time(ms(1)).unwrap();
    assert!(events.contains(&SessionEvent::PermissionChanged {
        from: PermissionState::Loading,
        to: PermissionState::Granted,
    }));

    // Rep ticks land at 4.0 s and 6.5 s
    let events = session.advance_time(ms(5_000)).unwrap();
    let reps_counted = events
        .iter()
        .filter(|event| matches!(event, SessionEvent::RepCounted { .. }))
        .count();
    assert_eq!(reps_counted, 2);
    assert_eq!(session.state().reps, 2);
    assert_eq!(session.state().elapsed_seconds, 5);

    let state = *session.advance().unwrap();
    assert_eq!(state.exercise_index, 1);
    assert_eq!(state.reps, 0);
    assert_eq!(state.form_quality, FormQuality::Good);
    assert!(navigator.routes().is_empty());

    session.advance().unwrap();
    assert!(!session.is_running());
    assert_eq!(navigator.routes(), vec![Route::WorkoutSummary]);

    let summary = session.summary().expect("summary after finishing");
    assert!(summary.completed);
    assert_eq!(summary.exercise_count(), 2);
    assert_eq!(summary.exercise_breakdown[0].name, "Squats");
    assert_eq!(summary.exercise_breakdown[0].reps, 2);
    assert_eq!(summary.exercise_breakdown[1].reps, 0);
    assert_eq!(summary.total_reps, 2);
    assert_eq!(summary.duration_seconds, 5);
    assert_eq!(summary.duration, "0:05");
    assert_eq!(summary.form_score, 85);
}

#[test]
fn test_advance_k_times_leaves_index_k() {
    let plan = ExercisePlan::default_workout();
    let count = plan.len();

    for k in 0..count {
        let (mut session, _) = granted_session(plan.clone());
        session.advance_time(ms(3_000)).unwrap();
        for _ in 0..k {
            session.advance().unwrap();
        }
        assert!(session.is_running());
        assert_eq!(session.state().exercise_index, k);
        if k > 0 {
            assert_eq!(session.state().reps, 0);
        }
    }

    let (mut session, navigator) = granted_session(plan);
    for _ in 0..count {
        session.advance().unwrap();
    }
    assert!(matches!(session.lifecycle(), SessionLifecycle::Ended(_)));
    assert_eq!(session.summary().unwrap().exercise_count(), count);
    assert_eq!(navigator.last(), Some(Route::WorkoutSummary));
}

#[test]
fn test_skip_behaves_like_advance() {
    let (mut skipped, _) = granted_session(scenario_plan());
    let (mut advanced, _) = granted_session(scenario_plan());
    skipped.advance_time(ms(4_000)).unwrap();
    advanced.advance_time(ms(4_000)).unwrap();

    let after_skip = *skipped.skip().unwrap();
    let after_advance = *advanced.advance().unwrap();
    assert_eq!(after_skip.exercise_index, after_advance.exercise_index);
    assert_eq!(after_skip.reps, after_advance.reps);

    skipped.skip().unwrap();
    assert!(skipped.summary().unwrap().completed);
}

#[test]
fn test_reps_never_exceed_target() {
    let plan = ExercisePlan::new(vec![exercise("Lunges", 3, "3-1-2")]).unwrap();
    let (mut session, _) = granted_session(plan);

    for _ in 0..60 {
        session.advance_time(ms(700)).unwrap();
        assert!(session.state().reps <= 3);
    }
    assert_eq!(session.state().reps, 3);
    assert_eq!(session.state().exercise_index, 0);
    assert!(session.is_running());
    assert!(!session.armed_timers().contains(&TimerKind::Rep));
}

fn tempo_changed(events: &[SessionEvent]) -> bool {
    events
        .iter()
        .any(|event| matches!(event, SessionEvent::TempoChanged { .. }))
}

#[test]
fn test_tempo_only_changes_while_active() {
    let plan = ExercisePlan::new(vec![
        exercise("Squats", 12, "3-1-2"),
        exercise("Plank", 30, ""),
    ])
    .unwrap();
    let (mut session, _) = session_with(plan, FormQuality::Good);

    // Not granted yet
    let events = session.advance_time(ms(10_000)).unwrap();
    assert!(!tempo_changed(&events));
    grant(&mut session);

    // Paused
    session.pause().unwrap();
    let events = session.advance_time(ms(10_000)).unwrap();
    assert!(!tempo_changed(&events));
    assert_eq!(session.state().tempo_phase, TempoPhase::Down);

    // Active with a tempo
    session.resume().unwrap();
    let events = session.advance_time(ms(1_500)).unwrap();
    assert!(tempo_changed(&events));
    assert_eq!(session.state().tempo_phase, TempoPhase::Hold);
    session.advance_time(ms(3_000)).unwrap();
    assert_eq!(session.state().tempo_phase, TempoPhase::Down);

    // Active without a tempo
    session.advance().unwrap();
    assert!(!session.armed_timers().contains(&TimerKind::Tempo));
    let events = session.advance_time(ms(10_000)).unwrap();
    assert!(!tempo_changed(&events));
    assert_eq!(session.snapshot().tempo_phase, None);
    assert_eq!(session.snapshot().tempo, None);
}

#[test]
fn test_tempo_cycles_down_hold_up() {
    let (mut session, _) = granted_session(scenario_plan());
    let mut phases = Vec::new();
    for _ in 0..4 {
        session.advance_time(ms(1_500)).unwrap();
        phases.push(session.state().tempo_phase);
    }
    assert_eq!(
        phases,
        vec![
            TempoPhase::Hold,
            TempoPhase::Up,
            TempoPhase::Down,
            TempoPhase::Hold
        ]
    );
}

#[test]
fn test_pause_resume_preserves_progress() {
    let (mut session, _) = granted_session(scenario_plan());
    session.advance_time(ms(3_200)).unwrap();
    let elapsed = session.state().elapsed_seconds;
    assert_eq!(elapsed, 3);

    assert!(session.toggle_pause().unwrap());
    assert!(session.armed_timers().is_empty());
    session.advance_time(ms(10_000)).unwrap();
    assert_eq!(session.state().elapsed_seconds, elapsed);

    assert!(!session.toggle_pause().unwrap());
    assert_eq!(session.state().elapsed_seconds, elapsed);
    assert_eq!(session.state().exercise_index, 0);

    // The clock restarts a full period after resuming
    session.advance_time(ms(999)).unwrap();
    assert_eq!(session.state().elapsed_seconds, elapsed);
    session.advance_time(ms(1)).unwrap();
    assert_eq!(session.state().elapsed_seconds, elapsed + 1);
}

#[test]
fn test_pause_and_mute_events() {
    let (mut session, _) = granted_session(scenario_plan());
    session.pause().unwrap();
    session.pause().unwrap();
    session.toggle_mute().unwrap();
    session.resume().unwrap();

    assert_eq!(
        session.drain_events(),
        vec![
            SessionEvent::Paused,
            SessionEvent::MuteToggled { muted: true },
            SessionEvent::Resumed
        ]
    );
    assert!(session.state().muted);
    assert!(session.snapshot().muted);
}

#[test]
fn test_form_feedback_and_reset_on_advance() {
    let (mut session, _) = session_with(scenario_plan(), FormQuality::Warning);
    grant(&mut session);

    // First form sample lands 3 s after activation
    session.advance_time(ms(3_000)).unwrap();
    assert_eq!(session.state().form_quality, FormQuality::Warning);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.form_label, "Adjust Form");
    assert_eq!(snapshot.form_cue, Some("Keep your back straight"));

    session.advance().unwrap();
    assert_eq!(session.state().form_quality, FormQuality::Good);

    let summary = session.end().unwrap().clone();
    assert!(!summary.completed);
    assert_eq!(summary.exercise_breakdown[0].form_score, 60);
    assert_eq!(summary.exercise_breakdown[1].form_score, 85);
    assert_eq!(summary.form_score, 73);
    assert!(summary
        .corrections
        .contains(&"Squats: Keep your back straight".to_owned()));
    assert_eq!(
        summary.headline,
        "Good effort! Focus on the areas below to improve."
    );
}

#[test]
fn test_operations_require_granted_permission() {
    let (mut session, _) = session_with(scenario_plan(), FormQuality::Good);
    let expected = SessionError::PermissionRequired {
        state: PermissionState::Prompt,
    };

    assert_eq!(session.advance().unwrap_err(), expected);
    assert_eq!(session.skip().unwrap_err(), expected);
    assert_eq!(session.toggle_pause().unwrap_err(), expected);
    assert_eq!(session.toggle_mute(), Ok(true));
    assert_eq!(session.state().exercise_index, 0);
}

#[test]
fn test_end_early_and_reject_later_operations() {
    let (mut session, navigator) = granted_session(scenario_plan());
    session.advance_time(ms(2_600)).unwrap();

    let summary = session.end().unwrap();
    assert!(!summary.completed);
    assert_eq!(summary.exercise_count(), 1);
    assert_eq!(summary.exercise_breakdown[0].reps, 1);
    assert_eq!(navigator.routes(), vec![Route::WorkoutSummary]);

    assert_eq!(session.advance().unwrap_err(), SessionError::SessionEnded);
    assert_eq!(session.end().unwrap_err(), SessionError::SessionEnded);
    assert_eq!(
        session.request_permission().unwrap_err(),
        SessionError::SessionEnded
    );
    assert_eq!(
        session.handle_tick(TimerKind::Clock).unwrap_err(),
        SessionError::SessionEnded
    );
    assert_eq!(
        session.drain_events(),
        vec![SessionEvent::Ended { completed: false }]
    );
}

#[test]
fn test_manual_ticks() {
    let (mut session, _) = granted_session(scenario_plan());

    let events = session.handle_tick(TimerKind::Rep).unwrap();
    assert_eq!(
        events,
        vec![SessionEvent::RepCounted {
            reps: 1,
            target_reps: 12
        }]
    );
    session.handle_tick(TimerKind::Clock).unwrap();
    assert_eq!(session.state().elapsed_seconds, 1);
    assert!(session
        .handle_tick(TimerKind::PermissionDelay)
        .unwrap()
        .is_empty());

    session.pause().unwrap();
    assert!(session.handle_tick(TimerKind::Rep).unwrap().is_empty());
    assert_eq!(session.state().reps, 1);
}

#[test]
fn test_snapshot_labels() {
    let (mut session, _) = granted_session(scenario_plan());
    session.advance_time(ms(5_000)).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.position_label(), "Exercise 1 of 2");
    assert_eq!(snapshot.primary_action, "Next");
    assert_eq!(snapshot.clock, "0:05");
    assert_eq!(snapshot.tempo.as_deref(), Some("3-1-2"));
    // Tempo ticks at 3.0, 4.5 and 6.0 s bring the cycle back to down
    assert_eq!(snapshot.tempo_phase, Some(TempoPhase::Down));
    assert_eq!(snapshot.tempo_phase_secs, Some(3));
    assert!((snapshot.progress - 2.0 / 12.0).abs() < 1e-9);
    assert_eq!(snapshot.permission_headline, None);

    session.advance().unwrap();
    assert_eq!(session.snapshot().primary_action, "Finish");

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["exercise_name"], "Push-ups");
    assert_eq!(json["permission"], "granted");
}
