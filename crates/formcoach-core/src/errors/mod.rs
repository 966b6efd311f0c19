// ABOUTME: Unified error types for the formcoach workspace
// ABOUTME: Defines ErrorCode, AppError with source chaining, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Standard error codes and a single application error type shared by the
//! session engine, configuration loading, and the CLI. Domain-specific errors
//! such as [`SessionError`] convert into [`AppError`].

/// Session and plan validation errors
pub mod session;

pub use session::SessionError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Permission (1000-1999)
    /// Camera access has not been granted
    #[serde(rename = "PERMISSION_REQUIRED")]
    PermissionRequired = 1000,
    /// Camera access was denied
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied = 1001,

    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Session state (4000-4999)
    /// The session has already ended
    #[serde(rename = "SESSION_ENDED")]
    SessionEnded = 4000,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PermissionRequired => "Camera access is required before the workout can start",
            Self::PermissionDenied => "Camera access was denied",
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::SessionEnded => "The workout session has already ended",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the caller can fix this error by changing its input
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::InvalidFormat
                | Self::PermissionRequired
                | Self::PermissionDenied
                | Self::SessionEnded
        )
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Configuration is invalid
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_code_serializes_to_stable_name() {
        let json = serde_json::to_string(&ErrorCode::SessionEnded).unwrap();
        assert_eq!(json, "\"SESSION_ENDED\"");
    }

    #[test]
    fn test_app_error_display_includes_description() {
        let error = AppError::new(ErrorCode::InvalidInput, "tempo '3-x-2' is malformed");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: tempo '3-x-2' is malformed"
        );
        assert!(error.code.is_client_error());
    }

    #[test]
    fn test_serde_error_chains_source() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let error = AppError::from(parse_err);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source().is_some());
        assert!(!error.code.is_client_error());
    }
}
