// ABOUTME: Live feedback classifications rendered during a workout
// ABOUTME: Form quality levels with labels and scores, tempo phases with their cycle order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::scoring::{EXCELLENT_SCORE, GOOD_SCORE, POOR_SCORE, WARNING_SCORE};
use crate::constants::FORM_WARNING_CUE;

/// Coarse classification of exercise technique
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormQuality {
    /// Textbook form
    Excellent,
    /// Acceptable form, the default at the start of every exercise
    #[default]
    Good,
    /// Needs adjustment
    Warning,
    /// Must be fixed. Never produced by the simulated sampler.
    Poor,
}

impl FormQuality {
    /// Weighted set the simulated sampler draws from uniformly. `Good` appears
    /// twice; `Poor` is absent.
    pub const SAMPLE_SET: [Self; 4] = [Self::Excellent, Self::Good, Self::Good, Self::Warning];

    /// Indicator label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Form",
            Self::Good => "Good Form",
            Self::Warning => "Adjust Form",
            Self::Poor => "Fix Form",
        }
    }

    /// Coaching cue shown under the label, if any
    #[must_use]
    pub const fn cue(self) -> Option<&'static str> {
        match self {
            Self::Warning => Some(FORM_WARNING_CUE),
            _ => None,
        }
    }

    /// Score contribution (0-100) used by the summary
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Excellent => EXCELLENT_SCORE,
            Self::Good => GOOD_SCORE,
            Self::Warning => WARNING_SCORE,
            Self::Poor => POOR_SCORE,
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for FormQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stage of a repetition's timing pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempoPhase {
    /// Eccentric / lowering
    #[default]
    Down,
    /// Pause at the bottom
    Hold,
    /// Concentric / lifting
    Up,
    /// Declared for display but never entered by the cycler
    Rest,
}

impl TempoPhase {
    /// Phase following this one in the cycle. `Rest` re-enters at `Down`.
    #[must_use]
    pub const fn next_in_cycle(self) -> Self {
        match self {
            Self::Down => Self::Hold,
            Self::Hold => Self::Up,
            Self::Up | Self::Rest => Self::Down,
        }
    }

    /// Label shown under the phase marker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Down => "Down",
            Self::Hold => "Hold",
            Self::Up => "Up",
            Self::Rest => "Rest",
        }
    }
}

impl fmt::Display for TempoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
