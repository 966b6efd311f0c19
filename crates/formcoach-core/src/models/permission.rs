// ABOUTME: Camera permission state for the pre-workout gate
// ABOUTME: prompt -> loading -> granted | denied, with denied retried through settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera authorization state shown on the setup screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Not yet requested
    #[default]
    Prompt,
    /// Request in flight
    Loading,
    /// Camera access granted; the session may run
    Granted,
    /// Access denied; only an external settings action can recover
    Denied,
}

impl PermissionState {
    /// True only for `Granted`
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Loading => "loading",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    /// Title shown on the setup screen, `None` once granted
    #[must_use]
    pub const fn headline(self) -> Option<&'static str> {
        match self {
            Self::Prompt | Self::Loading => Some("Camera Access Required"),
            Self::Denied => Some("Camera Access Denied"),
            Self::Granted => None,
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
