// ABOUTME: Validated, ordered, non-empty list of exercises for one workout session
// ABOUTME: Loads from JSON plan files and provides the built-in default workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::slice::Iter;

use super::exercise::Exercise;
use crate::constants::DEFAULT_WORKOUT;
use crate::errors::{AppError, AppResult, SessionError};

/// Ordered exercise sequence passed to a session at construction.
///
/// Always holds at least one exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Exercise>", into = "Vec<Exercise>")]
pub struct ExercisePlan {
    exercises: Vec<Exercise>,
}

impl ExercisePlan {
    /// Build a plan from exercises
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyPlan` when `exercises` is empty
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, SessionError> {
        if exercises.is_empty() {
            return Err(SessionError::EmptyPlan);
        }
        Ok(Self { exercises })
    }

    /// The five-exercise workout used by the demo screen
    #[must_use]
    pub fn default_workout() -> Self {
        let exercises = DEFAULT_WORKOUT
            .iter()
            .filter_map(|(name, reps, tempo)| Exercise::new(*name, *reps, tempo).ok())
            .collect();
        Self { exercises }
    }

    /// Parse a plan from a JSON array of exercise definitions
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any exercise fails validation
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(AppError::from)
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercise at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    /// First exercise of the plan
    #[must_use]
    pub fn first(&self) -> &Exercise {
        // Non-empty by construction
        &self.exercises[0]
    }

    /// Whether `index` points at the final exercise
    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.exercises.len()
    }

    /// Iterate exercises in order
    pub fn iter(&self) -> Iter<'_, Exercise> {
        self.exercises.iter()
    }
}

impl TryFrom<Vec<Exercise>> for ExercisePlan {
    type Error = SessionError;

    fn try_from(exercises: Vec<Exercise>) -> Result<Self, Self::Error> {
        Self::new(exercises)
    }
}

impl From<ExercisePlan> for Vec<Exercise> {
    fn from(plan: ExercisePlan) -> Self {
        plan.exercises
    }
}

impl<'a> IntoIterator for &'a ExercisePlan {
    type Item = &'a Exercise;
    type IntoIter = Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.exercises.iter()
    }
}
