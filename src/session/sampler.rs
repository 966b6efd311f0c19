// ABOUTME: Form-quality samplers standing in for pose estimation
// ABOUTME: Seedable random sampler for live runs and a scripted sampler for deterministic tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::FormQuality;

/// Source of form-quality classifications, one per form tick
pub trait FormQualitySampler: Send {
    /// Produce the next classification
    fn sample(&mut self) -> FormQuality;
}

/// Uniform draw from `FormQuality::SAMPLE_SET`, so `Good` comes up half the time
#[derive(Debug, Clone)]
pub struct RandomFormSampler<R = ChaCha8Rng> {
    rng: R,
}

impl RandomFormSampler<ChaCha8Rng> {
    /// Reproducible sampler
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomFormSampler<R> {
    /// Wrap an existing generator
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> FormQualitySampler for RandomFormSampler<R> {
    fn sample(&mut self) -> FormQuality {
        FormQuality::SAMPLE_SET
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
    }
}

/// Replays a fixed sequence, wrapping around at the end. An empty script yields `Good`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFormSampler {
    script: VecDeque<FormQuality>,
}

impl ScriptedFormSampler {
    /// Sampler that cycles through `script`
    pub fn new(script: impl IntoIterator<Item = FormQuality>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Sampler that always yields `quality`
    #[must_use]
    pub fn constant(quality: FormQuality) -> Self {
        Self::new([quality])
    }
}

impl FormQualitySampler for ScriptedFormSampler {
    fn sample(&mut self) -> FormQuality {
        let Some(next) = self.script.pop_front() else {
            return FormQuality::default();
        };
        self.script.push_back(next);
        next
    }
}
