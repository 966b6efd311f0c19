// ABOUTME: Tick-driven workout session controller gating on camera permission
// ABOUTME: Owns exercise progression, rep/form/tempo simulation, pause and mute, and the end-of-session summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Session Controller
//!
//! A single-threaded state machine for one live workout. Time only moves when
//! the caller says so: [`WorkoutSession::advance_time`] fires every tick that
//! falls due, [`WorkoutSession::handle_tick`] applies one tick directly.
//!
//! Four periodic timers drive the simulation while permission is granted and
//! the session is not paused:
//!
//! | Timer | Period  | Re-armed when                       |
//! |-------|---------|-------------------------------------|
//! | Clock | 1000 ms | permission or pause changes         |
//! | Form  | 3000 ms | permission or pause changes         |
//! | Tempo | 1500 ms | ... or the current tempo changes    |
//! | Rep   | 2500 ms | ... or reps or target changes       |
//!
//! Re-arming restarts a timer's period from the current instant. The rep
//! timer is not armed once the target is reached. The tempo timer is not
//! armed for exercises without a tempo.

use std::collections::BTreeMap;
use std::mem;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::TimingConfig;
use crate::errors::SessionError;
use crate::logging::SessionLogger;
use crate::models::{
    Exercise, ExercisePlan, FormQuality, PermissionState, SessionSummary, Tempo, TempoPhase,
};

use super::collaborators::{
    CameraAccess, CameraDecision, LoggingNavigator, Navigator, Route, SimulatedCamera,
};
use super::events::SessionEvent;
use super::sampler::{FormQualitySampler, RandomFormSampler};
use super::scheduler::{duration_to_ms, TickScheduler, TimerKind};
use super::snapshot::SessionSnapshot;
use super::summary::{build_summary, SessionLedger, SummaryContext};

/// Mutable state of a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Zero-based index into the plan
    pub exercise_index: usize,
    /// Seconds counted by the session clock
    pub elapsed_seconds: u64,
    /// Reps on the current exercise, never above its target
    pub reps: u32,
    /// Timers stopped by the athlete
    pub paused: bool,
    /// Audio cues muted
    pub muted: bool,
    /// Latest form classification
    pub form_quality: FormQuality,
    /// Current tempo phase
    pub tempo_phase: TempoPhase,
    /// Camera permission
    pub permission: PermissionState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            exercise_index: 0,
            elapsed_seconds: 0,
            reps: 0,
            paused: false,
            muted: false,
            form_quality: FormQuality::Good,
            tempo_phase: TempoPhase::Down,
            permission: PermissionState::Prompt,
        }
    }
}

impl SessionState {
    /// Whether the simulation timers should run
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.permission.is_granted() && !self.paused
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLifecycle {
    /// Accepting operations
    Running,
    /// Ended with a summary
    Ended(Box<SessionSummary>),
    /// Abandoned from the setup screen
    Exited,
}

/// What a periodic timer was armed for. A change re-arms the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKey {
    Active,
    Tempo(Tempo),
    Rep { reps: u32, target_reps: u32 },
}

const PERIODIC_TIMERS: [TimerKind; 4] = [
    TimerKind::Clock,
    TimerKind::Form,
    TimerKind::Tempo,
    TimerKind::Rep,
];

/// Builder for [`WorkoutSession`]
pub struct WorkoutSessionBuilder {
    plan: ExercisePlan,
    timing: TimingConfig,
    sampler: Option<Box<dyn FormQualitySampler>>,
    camera: Box<dyn CameraAccess>,
    navigator: Box<dyn Navigator>,
}

impl WorkoutSessionBuilder {
    /// Timer periods
    #[must_use]
    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Form-quality source
    #[must_use]
    pub fn sampler(mut self, sampler: impl FormQualitySampler + 'static) -> Self {
        self.sampler = Some(Box::new(sampler));
        self
    }

    /// Seeded random form sampler
    #[must_use]
    pub fn seed(self, seed: u64) -> Self {
        self.sampler(RandomFormSampler::seeded(seed))
    }

    /// Camera authorization backend
    #[must_use]
    pub fn camera(mut self, camera: impl CameraAccess + 'static) -> Self {
        self.camera = Box::new(camera);
        self
    }

    /// Navigation target
    #[must_use]
    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    /// Create the session in the `prompt` permission state
    #[must_use]
    pub fn build(self) -> WorkoutSession {
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            plan: self.plan,
            timing: self.timing,
            state: SessionState::default(),
            scheduler: TickScheduler::new(),
            timer_keys: BTreeMap::new(),
            sampler: self
                .sampler
                .unwrap_or_else(|| Box::new(RandomFormSampler::from_entropy())),
            camera: self.camera,
            navigator: self.navigator,
            ledger: SessionLedger::new(),
            lifecycle: SessionLifecycle::Running,
            events: Vec::new(),
        };
        SessionLogger::log_session_started(session.id, session.plan.len());
        session
    }
}

/// One live workout
pub struct WorkoutSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    plan: ExercisePlan,
    timing: TimingConfig,
    state: SessionState,
    scheduler: TickScheduler,
    timer_keys: BTreeMap<TimerKind, TimerKey>,
    sampler: Box<dyn FormQualitySampler>,
    camera: Box<dyn CameraAccess>,
    navigator: Box<dyn Navigator>,
    ledger: SessionLedger,
    lifecycle: SessionLifecycle,
    events: Vec<SessionEvent>,
}

impl WorkoutSession {
    /// Start configuring a session over `plan`
    #[must_use]
    pub fn builder(plan: ExercisePlan) -> WorkoutSessionBuilder {
        WorkoutSessionBuilder {
            plan,
            timing: TimingConfig::default(),
            sampler: None,
            camera: Box::new(SimulatedCamera::granting()),
            navigator: Box::new(LoggingNavigator),
        }
    }

    /// Session with default timing, an entropy-seeded sampler, a granting camera,
    /// and a logging navigator
    #[must_use]
    pub fn new(plan: ExercisePlan) -> Self {
        Self::builder(plan).build()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The plan being worked through
    #[must_use]
    pub const fn plan(&self) -> &ExercisePlan {
        &self.plan
    }

    /// Timer periods in use
    #[must_use]
    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Exercise at the current index
    #[must_use]
    pub fn current_exercise(&self) -> &Exercise {
        self.plan
            .get(self.state.exercise_index)
            .unwrap_or_else(|| self.plan.first())
    }

    /// Lifecycle stage
    #[must_use]
    pub const fn lifecycle(&self) -> &SessionLifecycle {
        &self.lifecycle
    }

    /// Whether the session still accepts operations
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.lifecycle, SessionLifecycle::Running)
    }

    /// Whether simulation timers are running
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_running() && self.state.is_active()
    }

    /// Summary, once the session has ended
    #[must_use]
    pub fn summary(&self) -> Option<&SessionSummary> {
        match &self.lifecycle {
            SessionLifecycle::Ended(summary) => Some(&**summary),
            SessionLifecycle::Running | SessionLifecycle::Exited => None,
        }
    }

    /// Virtual time in milliseconds since the session was created
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Timers currently armed
    #[must_use]
    pub fn armed_timers(&self) -> Vec<TimerKind> {
        self.scheduler.armed()
    }

    /// Rendering view of the current state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(
            self.id,
            &self.state,
            self.current_exercise(),
            self.plan.len(),
            !self.is_running(),
        )
    }

    /// Take the events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Permission gate
    // ------------------------------------------------------------------

    /// Ask for camera access. From `prompt` this moves to `loading` and starts
    /// the authorization delay; in any other state it changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn request_permission(&mut self) -> Result<PermissionState, SessionError> {
        self.ensure_running()?;
        if self.state.permission == PermissionState::Prompt {
            self.set_permission(PermissionState::Loading);
            self.scheduler
                .arm_once(TimerKind::PermissionDelay, self.timing.permission_delay);
        } else {
            debug!(permission = %self.state.permission, "Permission request ignored");
        }
        Ok(self.state.permission)
    }

    /// Deny camera access while the request is pending or before it was made
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn deny_permission(&mut self) -> Result<PermissionState, SessionError> {
        self.ensure_running()?;
        if matches!(
            self.state.permission,
            PermissionState::Prompt | PermissionState::Loading
        ) {
            self.scheduler.disarm(TimerKind::PermissionDelay);
            self.set_permission(PermissionState::Denied);
        }
        Ok(self.state.permission)
    }

    /// Open the camera settings after a denial; returns to `prompt` when the
    /// camera reports access may be retried
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn open_settings(&mut self) -> Result<PermissionState, SessionError> {
        self.ensure_running()?;
        if self.state.permission == PermissionState::Denied && self.camera.open_settings() {
            self.set_permission(PermissionState::Prompt);
        }
        Ok(self.state.permission)
    }

    /// Leave the setup screen: navigate back and discard the session without a summary
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn exit_setup(&mut self) -> Result<(), SessionError> {
        self.ensure_running()?;
        self.scheduler.clear();
        self.timer_keys.clear();
        self.lifecycle = SessionLifecycle::Exited;
        self.emit(SessionEvent::Exited);
        SessionLogger::log_session_exited(self.id, self.state.elapsed_seconds);
        self.navigator.navigate(Route::Back);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------

    /// Flip `paused`; returns the new value
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PermissionRequired` before access is granted,
    /// `SessionError::SessionEnded` after the session has ended
    pub fn toggle_pause(&mut self) -> Result<bool, SessionError> {
        self.ensure_granted()?;
        self.state.paused = !self.state.paused;
        self.emit(if self.state.paused {
            SessionEvent::Paused
        } else {
            SessionEvent::Resumed
        });
        self.reconcile();
        Ok(self.state.paused)
    }

    /// Pause if running
    ///
    /// # Errors
    ///
    /// Same as [`Self::toggle_pause`]
    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.ensure_granted()?;
        if !self.state.paused {
            self.toggle_pause()?;
        }
        Ok(())
    }

    /// Resume if paused
    ///
    /// # Errors
    ///
    /// Same as [`Self::toggle_pause`]
    pub fn resume(&mut self) -> Result<(), SessionError> {
        self.ensure_granted()?;
        if self.state.paused {
            self.toggle_pause()?;
        }
        Ok(())
    }

    /// Flip `muted`; returns the new value. Only affects audio cues.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn toggle_mute(&mut self) -> Result<bool, SessionError> {
        self.ensure_running()?;
        self.state.muted = !self.state.muted;
        self.emit(SessionEvent::MuteToggled {
            muted: self.state.muted,
        });
        Ok(self.state.muted)
    }

    /// Move to the next exercise, or end the session on the last one.
    ///
    /// Moving on resets reps to 0 and form to `good`. Ending produces the
    /// summary and navigates to the summary screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PermissionRequired` before access is granted,
    /// `SessionError::SessionEnded` after the session has ended
    pub fn advance(&mut self) -> Result<&SessionState, SessionError> {
        self.ensure_granted()?;
        if self.plan.is_last(self.state.exercise_index) {
            self.finish(true);
            return Ok(&self.state);
        }

        self.ledger
            .record_reps(self.state.exercise_index, self.state.reps);
        self.state.exercise_index += 1;
        self.state.reps = 0;
        self.set_form(FormQuality::Good);
        self.ledger.reach(self.state.exercise_index);
        self.emit(SessionEvent::ExerciseAdvanced {
            index: self.state.exercise_index,
            name: self.current_exercise().name().to_owned(),
        });
        self.reconcile();
        Ok(&self.state)
    }

    /// Skip the current exercise. Behaves exactly like [`Self::advance`];
    /// a skipped exercise is not marked differently.
    ///
    /// # Errors
    ///
    /// Same as [`Self::advance`]
    pub fn skip(&mut self) -> Result<&SessionState, SessionError> {
        self.advance()
    }

    /// End the workout early and produce the summary
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn end(&mut self) -> Result<&SessionSummary, SessionError> {
        self.ensure_running()?;
        self.finish(false);
        self.summary().ok_or(SessionError::SessionEnded)
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance virtual time by `elapsed`, firing every tick that falls due in
    /// chronological order. Returns the events emitted along the way.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn advance_time(&mut self, elapsed: Duration) -> Result<Vec<SessionEvent>, SessionError> {
        self.ensure_running()?;
        let until_ms = self
            .scheduler
            .now_ms()
            .saturating_add(duration_to_ms(elapsed));
        while let Some(kind) = self.scheduler.pop_due(until_ms) {
            self.apply_tick(kind);
        }
        self.scheduler.advance_to(until_ms);
        Ok(self.drain_events())
    }

    /// Apply one tick of `kind` now, as if its timer had fired. Ticks for
    /// timers that are not armed are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionEnded` after the session has ended
    pub fn handle_tick(&mut self, kind: TimerKind) -> Result<Vec<SessionEvent>, SessionError> {
        self.ensure_running()?;
        if !self.scheduler.is_armed(kind) {
            debug!(timer = %kind, "Ignoring tick for disarmed timer");
            return Ok(Vec::new());
        }
        if kind == TimerKind::PermissionDelay {
            self.scheduler.disarm(kind);
        }
        self.apply_tick(kind);
        Ok(self.drain_events())
    }

    fn apply_tick(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::PermissionDelay => self.on_permission_delay(),
            TimerKind::Clock => {
                self.state.elapsed_seconds += 1;
                self.emit(SessionEvent::ClockTicked {
                    elapsed_seconds: self.state.elapsed_seconds,
                });
            }
            TimerKind::Form => {
                let quality = self.sampler.sample();
                self.ledger.record_form(self.state.exercise_index, quality);
                self.set_form(quality);
            }
            TimerKind::Tempo => {
                self.state.tempo_phase = self.state.tempo_phase.next_in_cycle();
                self.emit(SessionEvent::TempoChanged {
                    phase: self.state.tempo_phase,
                });
            }
            TimerKind::Rep => {
                let target_reps = self.current_exercise().target_reps();
                if self.state.reps < target_reps {
                    self.state.reps += 1;
                    self.ledger
                        .record_reps(self.state.exercise_index, self.state.reps);
                    self.emit(SessionEvent::RepCounted {
                        reps: self.state.reps,
                        target_reps,
                    });
                }
            }
        }
        self.reconcile();
    }

    fn on_permission_delay(&mut self) {
        if self.state.permission != PermissionState::Loading {
            return;
        }
        match self.camera.resolve_request() {
            CameraDecision::Granted => self.set_permission(PermissionState::Granted),
            CameraDecision::Denied => {
                warn!(session.id = %self.id, "Camera access denied");
                self.set_permission(PermissionState::Denied);
            }
        }
    }

    // ------------------------------------------------------------------
    // Timer reconciliation
    // ------------------------------------------------------------------

    fn desired_key(&self, kind: TimerKind) -> Option<TimerKey> {
        if !self.is_active() {
            return None;
        }
        let exercise = self.current_exercise();
        match kind {
            TimerKind::Clock | TimerKind::Form => Some(TimerKey::Active),
            TimerKind::Tempo => exercise.tempo().copied().map(TimerKey::Tempo),
            TimerKind::Rep => (self.state.reps < exercise.target_reps()).then_some(TimerKey::Rep {
                reps: self.state.reps,
                target_reps: exercise.target_reps(),
            }),
            TimerKind::PermissionDelay => None,
        }
    }

    const fn period(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::Clock => self.timing.clock,
            TimerKind::Form => self.timing.form,
            TimerKind::Tempo => self.timing.tempo,
            TimerKind::Rep => self.timing.rep,
            TimerKind::PermissionDelay => self.timing.permission_delay,
        }
    }

    /// Bring the armed periodic timers in line with the current state
    fn reconcile(&mut self) {
        for kind in PERIODIC_TIMERS {
            let desired = self.desired_key(kind);
            if desired == self.timer_keys.get(&kind).copied() {
                continue;
            }
            if let Some(key) = desired {
                self.scheduler.arm_periodic(kind, self.period(kind));
                self.timer_keys.insert(kind, key);
                if kind == TimerKind::Tempo {
                    self.restart_tempo_cycle();
                }
            } else {
                self.scheduler.disarm(kind);
                self.timer_keys.remove(&kind);
            }
            debug!(timer = %kind, armed = desired.is_some(), "Timer reconciled");
        }
    }

    fn restart_tempo_cycle(&mut self) {
        if self.state.tempo_phase != TempoPhase::Down {
            self.state.tempo_phase = TempoPhase::Down;
            self.emit(SessionEvent::TempoChanged {
                phase: TempoPhase::Down,
            });
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn finish(&mut self, completed: bool) {
        self.ledger
            .record_reps(self.state.exercise_index, self.state.reps);
        self.scheduler.clear();
        self.timer_keys.clear();

        let summary = build_summary(
            SummaryContext {
                session_id: self.id,
                started_at: self.started_at,
                elapsed_seconds: self.state.elapsed_seconds,
                completed,
            },
            &self.plan,
            &self.ledger,
        );
        SessionLogger::log_session_summary(&summary);
        self.lifecycle = SessionLifecycle::Ended(Box::new(summary));
        self.emit(SessionEvent::Ended { completed });
        self.navigator.navigate(Route::WorkoutSummary);
    }

    fn set_permission(&mut self, to: PermissionState) {
        let from = self.state.permission;
        if from == to {
            return;
        }
        self.state.permission = to;
        info!(session.id = %self.id, from = %from, to = %to, "Camera permission changed");
        self.emit(SessionEvent::PermissionChanged { from, to });
        self.reconcile();
    }

    fn set_form(&mut self, to: FormQuality) {
        let from = self.state.form_quality;
        if from != to {
            self.state.form_quality = to;
            self.emit(SessionEvent::FormChanged { from, to });
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        debug!(session.id = %self.id, event.kind = event.name(), event.detail = ?event, "Session event");
        self.events.push(event);
    }

    fn ensure_running(&self) -> Result<(), SessionError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(SessionError::SessionEnded)
        }
    }

    fn ensure_granted(&self) -> Result<(), SessionError> {
        self.ensure_running()?;
        if self.state.permission.is_granted() {
            Ok(())
        } else {
            Err(SessionError::PermissionRequired {
                state: self.state.permission,
            })
        }
    }
}
