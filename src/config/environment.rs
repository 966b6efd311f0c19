// ABOUTME: Environment configuration for live workout sessions
// ABOUTME: Reads timer overrides, sampler seed, and plan path from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based session configuration

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use super::TimingConfig;
use crate::constants::env_config;
use crate::models::ExercisePlan;

/// Everything needed to construct a workout session outside of tests
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Timer periods
    pub timing: TimingConfig,
    /// Seed for the form-quality sampler; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// JSON plan file; `None` uses the built-in workout
    pub plan_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set but malformed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        debug!("Loading session configuration from environment variables");
        let defaults = TimingConfig::default();

        let config = Self {
            timing: TimingConfig {
                clock: env_duration_ms(env_config::CLOCK_INTERVAL_MS, defaults.clock)?,
                form: env_duration_ms(env_config::FORM_INTERVAL_MS, defaults.form)?,
                tempo: env_duration_ms(env_config::TEMPO_INTERVAL_MS, defaults.tempo)?,
                rep: env_duration_ms(env_config::REP_INTERVAL_MS, defaults.rep)?,
                permission_delay: env_duration_ms(
                    env_config::PERMISSION_DELAY_MS,
                    defaults.permission_delay,
                )?,
            },
            seed: env::var(env_config::SEED)
                .ok()
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .with_context(|| format!("Invalid {} value: {raw}", env_config::SEED))
                })
                .transpose()?,
            plan_path: env::var(env_config::PLAN_PATH).ok().map(PathBuf::from),
        };

        config.validate()?;
        info!("Session configuration loaded");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a timer period is zero
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()
    }

    /// Resolve the exercise plan: the configured file, or the default workout
    ///
    /// # Errors
    ///
    /// Returns an error if the plan file cannot be read or parsed
    pub fn load_plan(&self) -> Result<ExercisePlan> {
        self.plan_path
            .as_deref()
            .map_or_else(|| Ok(ExercisePlan::default_workout()), load_plan_file)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Formcoach Session Configuration:\n\
             - Clock Interval: {}ms\n\
             - Form Interval: {}ms\n\
             - Tempo Interval: {}ms\n\
             - Rep Interval: {}ms\n\
             - Permission Delay: {}ms\n\
             - Sampler Seed: {}\n\
             - Plan: {}",
            self.timing.clock.as_millis(),
            self.timing.form.as_millis(),
            self.timing.tempo.as_millis(),
            self.timing.rep.as_millis(),
            self.timing.permission_delay.as_millis(),
            self.seed
                .map_or_else(|| "entropy".to_owned(), |seed| seed.to_string()),
            self.plan_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
        )
    }
}

/// Read and validate a JSON plan file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a valid plan
pub fn load_plan_file(path: &Path) -> Result<ExercisePlan> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let plan = ExercisePlan::from_json(&json)
        .with_context(|| format!("Invalid plan file {}", path.display()))?;
    info!(plan.path = %path.display(), plan.exercises = plan.len(), "Loaded exercise plan");
    Ok(plan)
}

/// Read a millisecond duration from the environment, falling back to `default`
fn env_duration_ms(key: &str, default: Duration) -> Result<Duration> {
    env::var(key).map_or(Ok(default), |raw| {
        let millis = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {key} value: {raw}"))?;
        Ok(Duration::from_millis(millis))
    })
}
