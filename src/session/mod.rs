// ABOUTME: Live workout session engine: controller, scheduler, samplers, and async runner
// ABOUTME: Re-exports the types needed to build, drive, and observe a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Session Engine
//!
//! [`WorkoutSession`] is a synchronous state machine; [`SessionRunner`]
//! drives one in real time from a tokio task.

/// Navigation and camera collaborators
pub mod collaborators;
/// Tick-driven session controller
pub mod controller;
/// Observable session events
pub mod events;
/// Async real-time driver
pub mod runtime;
/// Form-quality samplers
pub mod sampler;
/// Virtual-time timer scheduler
pub mod scheduler;
/// Rendering snapshot
pub mod snapshot;
/// Form ledger and summary builder
pub mod summary;

pub use collaborators::{
    CameraAccess, CameraDecision, LoggingNavigator, Navigator, RecordingNavigator, Route,
    SimulatedCamera,
};
pub use controller::{SessionLifecycle, SessionState, WorkoutSession, WorkoutSessionBuilder};
pub use events::SessionEvent;
pub use runtime::{SessionCommand, SessionOutcome, SessionRunner};
pub use sampler::{FormQualitySampler, RandomFormSampler, ScriptedFormSampler};
pub use scheduler::{TickScheduler, TimerKind};
pub use snapshot::SessionSnapshot;
pub use summary::{build_summary, SessionLedger, SummaryContext};
