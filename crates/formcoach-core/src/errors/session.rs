// ABOUTME: Session-specific error types for plan validation and controller operations
// ABOUTME: Provides structured errors that convert into the unified AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::models::PermissionState;

/// Errors raised while building a plan or driving a workout session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A plan must contain at least one exercise
    #[error("workout plan must contain at least one exercise")]
    EmptyPlan,

    /// An exercise definition failed validation
    #[error("invalid exercise '{name}': {reason}")]
    InvalidExercise {
        /// Name of the offending exercise (may be empty)
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A tempo string could not be parsed
    #[error("invalid tempo '{tempo}': expected three dash-separated second counts like 3-1-2")]
    InvalidTempo {
        /// The raw tempo string
        tempo: String,
    },

    /// The operation needs camera access first
    #[error("camera permission is {state}, operation requires granted")]
    PermissionRequired {
        /// Permission state at the time of the call
        state: PermissionState,
    },

    /// The session already ended and its state was discarded
    #[error("workout session has already ended")]
    SessionEnded,
}

impl SessionError {
    /// Create an "invalid exercise" error
    #[must_use]
    pub fn invalid_exercise(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExercise {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an "invalid tempo" error
    #[must_use]
    pub fn invalid_tempo(tempo: impl Into<String>) -> Self {
        Self::InvalidTempo {
            tempo: tempo.into(),
        }
    }

    /// Map to the unified error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyPlan | Self::InvalidExercise { .. } => ErrorCode::InvalidInput,
            Self::InvalidTempo { .. } => ErrorCode::InvalidFormat,
            Self::PermissionRequired {
                state: PermissionState::Denied,
            } => ErrorCode::PermissionDenied,
            Self::PermissionRequired { .. } => ErrorCode::PermissionRequired,
            Self::SessionEnded => ErrorCode::SessionEnded,
        }
    }
}

impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}
