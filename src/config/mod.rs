// ABOUTME: Configuration module for session timing, randomness, and plan sources
// ABOUTME: Defines TimingConfig and re-exports the environment-driven SessionConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for formcoach
//!
//! - **Timing**: periods for the clock, form sampler, tempo cycler, rep
//!   accumulator, and the simulated camera authorization delay
//! - **Environment**: `SessionConfig` loaded from environment variables

/// Environment-driven session configuration
pub mod environment;

pub use environment::SessionConfig;

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CLOCK_INTERVAL_MS, FORM_INTERVAL_MS, PERMISSION_DELAY_MS, REP_INTERVAL_MS, TEMPO_INTERVAL_MS,
};
use crate::errors::AppError;

/// Periods driving the simulated live workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Session clock period (one elapsed second per tick)
    pub clock: Duration,
    /// Form-quality reclassification period
    pub form: Duration,
    /// Tempo phase rotation period
    pub tempo: Duration,
    /// Rep accumulator period
    pub rep: Duration,
    /// Delay between requesting camera access and the simulated answer
    pub permission_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clock: Duration::from_millis(CLOCK_INTERVAL_MS),
            form: Duration::from_millis(FORM_INTERVAL_MS),
            tempo: Duration::from_millis(TEMPO_INTERVAL_MS),
            rep: Duration::from_millis(REP_INTERVAL_MS),
            permission_delay: Duration::from_millis(PERMISSION_DELAY_MS),
        }
    }
}

impl TimingConfig {
    /// Every period scaled down by `factor`, for fast demos. A factor of 0 is treated as 1.
    #[must_use]
    pub fn accelerated(factor: u32) -> Self {
        let factor = factor.max(1);
        let base = Self::default();
        Self {
            clock: base.clock / factor,
            form: base.form / factor,
            tempo: base.tempo / factor,
            rep: base.rep / factor,
            permission_delay: base.permission_delay / factor,
        }
    }

    /// Reject zero periods, which would make a timer fire forever
    ///
    /// # Errors
    ///
    /// Returns an error naming the first zero period
    pub fn validate(&self) -> Result<()> {
        for (name, period) in [
            ("clock", self.clock),
            ("form", self.form),
            ("tempo", self.tempo),
            ("rep", self.rep),
        ] {
            if period.is_zero() {
                return Err(
                    AppError::config(format!("{name} interval must be greater than zero")).into(),
                );
            }
        }
        Ok(())
    }
}
