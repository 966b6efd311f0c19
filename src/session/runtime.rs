// ABOUTME: Async driver that feeds real elapsed time and operator commands into a workout session
// ABOUTME: Multiplexes a tokio interval and an mpsc command channel until the session ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::constants::RUNNER_RESOLUTION_MS;
use crate::errors::SessionError;
use crate::models::SessionSummary;

use super::controller::{SessionLifecycle, WorkoutSession};
use super::events::SessionEvent;
use super::scheduler::duration_to_ms;
use super::snapshot::SessionSnapshot;

/// Operator input delivered to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCommand {
    /// Ask for camera access
    RequestPermission,
    /// Pause or resume
    TogglePause,
    /// Mute or unmute audio cues
    ToggleMute,
    /// Next exercise, or finish on the last one
    Advance,
    /// Same as `Advance`
    Skip,
    /// End the workout early
    End,
    /// Open camera settings after a denial
    OpenSettings,
    /// Leave without a summary
    ExitSetup,
}

impl SessionCommand {
    /// Parse a one-letter terminal command
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "r" => Some(Self::RequestPermission),
            "p" => Some(Self::TogglePause),
            "m" => Some(Self::ToggleMute),
            "n" => Some(Self::Advance),
            "s" => Some(Self::Skip),
            "q" => Some(Self::End),
            "o" => Some(Self::OpenSettings),
            "x" => Some(Self::ExitSetup),
            _ => None,
        }
    }
}

/// How a session finished
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Ended with a summary
    Finished(Box<SessionSummary>),
    /// Left from setup without a summary
    Exited,
}

impl SessionOutcome {
    /// Summary, if the session ended normally
    #[must_use]
    pub fn summary(&self) -> Option<&SessionSummary> {
        match self {
            Self::Finished(summary) => Some(&**summary),
            Self::Exited => None,
        }
    }
}

/// Drives a [`WorkoutSession`] in real time
pub struct SessionRunner {
    session: WorkoutSession,
    resolution: Duration,
    started: Option<Instant>,
}

impl SessionRunner {
    /// Runner with the default 100 ms resolution
    #[must_use]
    pub fn new(session: WorkoutSession) -> Self {
        Self {
            session,
            resolution: Duration::from_millis(RUNNER_RESOLUTION_MS),
            started: None,
        }
    }

    /// Run until the session ends or exits. `observer` sees a snapshot after
    /// every batch of events, and once at start. Closing the command channel
    /// ends the workout early.
    pub async fn run<F>(
        mut self,
        mut commands: mpsc::Receiver<SessionCommand>,
        mut observer: F,
    ) -> SessionOutcome
    where
        F: FnMut(&SessionSnapshot, &[SessionEvent]),
    {
        let mut interval = time::interval(self.resolution);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.started = Some(Instant::now());
        info!(session.id = %self.session.id(), "Session runner started");
        observer(&self.session.snapshot(), &[]);

        loop {
            tokio::select! {
                biased;
                command = commands.recv() => {
                    let mut events = self.catch_up();
                    match command {
                        Some(command) => events.extend(self.apply(command)),
                        None => {
                            debug!("Command channel closed, ending session");
                            if let Err(e) = self.session.end() {
                                warn!(error = %e, "Failed to end session");
                            }
                            events.extend(self.session.drain_events());
                        }
                    }
                    observer(&self.session.snapshot(), &events);
                }
                _ = interval.tick() => {
                    let events = self.catch_up();
                    if !events.is_empty() {
                        observer(&self.session.snapshot(), &events);
                    }
                }
            }

            if let Some(outcome) = self.outcome() {
                info!(session.id = %self.session.id(), "Session runner finished");
                return outcome;
            }
        }
    }

    /// Feed the time elapsed since start that the session has not seen yet
    fn catch_up(&mut self) -> Vec<SessionEvent> {
        if !self.session.is_running() {
            return Vec::new();
        }
        let elapsed_ms = self
            .started
            .map_or(0, |started| duration_to_ms(started.elapsed()));
        let delta = elapsed_ms.saturating_sub(self.session.now_ms());
        self.session
            .advance_time(Duration::from_millis(delta))
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to advance session time");
                Vec::new()
            })
    }

    fn apply(&mut self, command: SessionCommand) -> Vec<SessionEvent> {
        debug!(?command, "Applying session command");
        let result: Result<(), SessionError> = match command {
            SessionCommand::RequestPermission => self.session.request_permission().map(|_| ()),
            SessionCommand::TogglePause => self.session.toggle_pause().map(|_| ()),
            SessionCommand::ToggleMute => self.session.toggle_mute().map(|_| ()),
            SessionCommand::Advance => self.session.advance().map(|_| ()),
            SessionCommand::Skip => self.session.skip().map(|_| ()),
            SessionCommand::End => self.session.end().map(|_| ()),
            SessionCommand::OpenSettings => self.session.open_settings().map(|_| ()),
            SessionCommand::ExitSetup => self.session.exit_setup(),
        };
        if let Err(e) = result {
            warn!(?command, error = %e, "Session command rejected");
        }
        self.session.drain_events()
    }

    fn outcome(&self) -> Option<SessionOutcome> {
        match self.session.lifecycle() {
            SessionLifecycle::Running => None,
            SessionLifecycle::Ended(summary) => Some(SessionOutcome::Finished(summary.clone())),
            SessionLifecycle::Exited => Some(SessionOutcome::Exited),
        }
    }
}
