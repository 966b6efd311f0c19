// ABOUTME: Integration tests for the camera permission gate
// ABOUTME: Covers the authorization delay, denial and settings retry, and leaving from setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{ms, scenario_plan, session_with, PERMISSION_DELAY};
use formcoach::errors::{AppError, ErrorCode, SessionError};
use formcoach::models::{FormQuality, PermissionState, TempoPhase};
use formcoach::session::{
    RecordingNavigator, Route, SessionEvent, SessionLifecycle, SimulatedCamera, TimerKind,
    WorkoutSession,
};

fn denied_camera_session() -> WorkoutSession {
    WorkoutSession::builder(scenario_plan())
        .seed(5)
        .camera(SimulatedCamera::denying())
        .build()
}

#[test]
fn test_permission_granted_after_delay() {
    let (mut session, _) = session_with(scenario_plan(), FormQuality::Good);
    assert_eq!(
        session.snapshot().permission_headline,
        Some("Camera Access Required")
    );

    session.request_permission().unwrap();
    assert_eq!(session.armed_timers(), vec![TimerKind::PermissionDelay]);

    session.advance_time(PERMISSION_DELAY).unwrap();
    assert_eq!(session.state().permission, PermissionState::Granted);
    assert!(session.is_active());
    assert!(!session.armed_timers().contains(&TimerKind::PermissionDelay));
    assert_eq!(session.snapshot().permission_headline, None);
}

#[test]
fn test_repeated_request_does_not_restart_delay() {
    let (mut session, _) = session_with(scenario_plan(), FormQuality::Good);
    session.request_permission().unwrap();
    session.advance_time(ms(1_000)).unwrap();

    assert_eq!(
        session.request_permission().unwrap(),
        PermissionState::Loading
    );
    session.advance_time(ms(500)).unwrap();
    assert_eq!(session.state().permission, PermissionState::Granted);

    assert_eq!(
        session.request_permission().unwrap(),
        PermissionState::Granted
    );
}

#[test]
fn test_denied_camera_then_settings_retry() {
    let mut session = denied_camera_session();
    session.request_permission().unwrap();
    let events = session.advance_time(PERMISSION_DELAY).unwrap();
    assert!(events.contains(&SessionEvent::PermissionChanged {
        from: PermissionState::Loading,
        to: PermissionState::Denied,
    }));
    assert_eq!(
        session.snapshot().permission_headline,
        Some("Camera Access Denied")
    );
    assert!(session.armed_timers().is_empty());

    let err = session.advance().unwrap_err();
    assert_eq!(
        err,
        SessionError::PermissionRequired {
            state: PermissionState::Denied
        }
    );
    assert_eq!(AppError::from(err).code, ErrorCode::PermissionDenied);

    // Requesting again from denied changes nothing
    assert_eq!(
        session.request_permission().unwrap(),
        PermissionState::Denied
    );

    assert_eq!(session.open_settings().unwrap(), PermissionState::Prompt);
    session.request_permission().unwrap();
    session.advance_time(PERMISSION_DELAY).unwrap();
    assert_eq!(session.state().permission, PermissionState::Granted);
    assert!(session.advance().is_ok());
}

#[test]
fn test_open_settings_outside_denied_is_noop() {
    let (mut session, _) = session_with(scenario_plan(), FormQuality::Good);
    assert_eq!(session.open_settings().unwrap(), PermissionState::Prompt);
    session.request_permission().unwrap();
    assert_eq!(session.open_settings().unwrap(), PermissionState::Loading);
}

#[test]
fn test_caller_denial_cancels_pending_request() {
    let (mut session, _) = session_with(scenario_plan(), FormQuality::Good);
    session.request_permission().unwrap();
    assert_eq!(session.deny_permission().unwrap(), PermissionState::Denied);

    session.advance_time(ms(5_000)).unwrap();
    assert_eq!(session.state().permission, PermissionState::Denied);
    assert_eq!(session.state().elapsed_seconds, 0);
}

#[test]
fn test_no_progress_before_grant() {
    let (mut session, _) = session_with(scenario_plan(), FormQuality::Excellent);
    session.advance_time(ms(60_000)).unwrap();
    session.request_permission().unwrap();
    session.advance_time(ms(1_000)).unwrap();

    let state = session.state();
    assert_eq!(state.elapsed_seconds, 0);
    assert_eq!(state.reps, 0);
    assert_eq!(state.form_quality, FormQuality::Good);
    assert_eq!(state.tempo_phase, TempoPhase::Down);
}

#[test]
fn test_exit_setup_navigates_back_without_summary() {
    let navigator = RecordingNavigator::new();
    let mut session = WorkoutSession::builder(scenario_plan())
        .seed(9)
        .navigator(navigator.clone())
        .build();

    session.exit_setup().unwrap();
    assert_eq!(session.lifecycle(), &SessionLifecycle::Exited);
    assert!(session.summary().is_none());
    assert_eq!(navigator.routes(), vec![Route::Back]);
    assert!(session.snapshot().ended);
    assert_eq!(
        session.request_permission().unwrap_err(),
        SessionError::SessionEnded
    );
    assert_eq!(session.exit_setup().unwrap_err(), SessionError::SessionEnded);
}
