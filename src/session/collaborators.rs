// ABOUTME: Injected collaborators for a workout session: navigation target and camera access
// ABOUTME: Provides logging, recording, and simulated implementations used by the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::info;

use crate::constants::routes;

/// Screens a session can hand control to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Post-workout summary screen
    WorkoutSummary,
    /// Whatever screen opened the session
    Back,
}

impl Route {
    /// Route path understood by the host application
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::WorkoutSummary => routes::WORKOUT_SUMMARY,
            Self::Back => routes::BACK,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Receives navigation requests when a session ends or is abandoned
pub trait Navigator: Send {
    /// Move to `route`
    fn navigate(&mut self, route: Route);
}

/// Navigator that only records the request in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&mut self, route: Route) {
        info!(route = %route, "Navigation requested");
    }
}

/// Navigator that keeps every request; clones share the same history
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    /// Empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes requested so far, oldest first
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent request
    #[must_use]
    pub fn last(&self) -> Option<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

/// Outcome of a pending camera authorization request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraDecision {
    /// Access allowed
    Granted,
    /// Access refused
    Denied,
}

/// Camera authorization backend
pub trait CameraAccess: Send {
    /// Answer a request once the authorization delay has elapsed
    fn resolve_request(&mut self) -> CameraDecision;

    /// Open the platform's privacy settings. Returns true when the user may retry.
    fn open_settings(&mut self) -> bool;
}

/// Simulated camera that grants or denies, and grants after settings are opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedCamera {
    allow: bool,
}

impl SimulatedCamera {
    /// Camera that always grants access
    #[must_use]
    pub const fn granting() -> Self {
        Self { allow: true }
    }

    /// Camera that denies until settings are opened
    #[must_use]
    pub const fn denying() -> Self {
        Self { allow: false }
    }
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::granting()
    }
}

impl CameraAccess for SimulatedCamera {
    fn resolve_request(&mut self) -> CameraDecision {
        if self.allow {
            CameraDecision::Granted
        } else {
            CameraDecision::Denied
        }
    }

    fn open_settings(&mut self) -> bool {
        info!("Opening camera privacy settings");
        self.allow = true;
        true
    }
}
