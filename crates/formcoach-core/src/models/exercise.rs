// ABOUTME: Exercise definition with validated target reps and optional tempo pattern
// ABOUTME: Parses tempo strings such as "3-1-2" into down/hold/up second counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::feedback::TempoPhase;
use crate::errors::SessionError;

/// Repetition timing pattern, written `down-hold-up` in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tempo {
    /// Seconds spent lowering
    pub down_secs: u32,
    /// Seconds held at the bottom
    pub hold_secs: u32,
    /// Seconds spent lifting
    pub up_secs: u32,
}

impl Tempo {
    /// Parse an optional tempo. Blank input means the exercise has no tempo.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTempo` if the input is non-blank and not `D-H-U`
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, SessionError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }

    /// Seconds assigned to a phase; `Rest` has no slot in the pattern
    #[must_use]
    pub const fn phase_secs(&self, phase: TempoPhase) -> Option<u32> {
        match phase {
            TempoPhase::Down => Some(self.down_secs),
            TempoPhase::Hold => Some(self.hold_secs),
            TempoPhase::Up => Some(self.up_secs),
            TempoPhase::Rest => None,
        }
    }
}

impl FromStr for Tempo {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').map(str::trim).collect();
        let [down, hold, up] = parts.as_slice() else {
            return Err(SessionError::invalid_tempo(s));
        };
        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| SessionError::invalid_tempo(s))
        };
        Ok(Self {
            down_secs: parse(*down)?,
            hold_secs: parse(*hold)?,
            up_secs: parse(*up)?,
        })
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.down_secs, self.hold_secs, self.up_secs)
    }
}

/// Serialized shape of an exercise, as written in plan files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Display name
    pub name: String,
    /// Target repetitions (seconds for timed holds)
    #[serde(alias = "targetReps")]
    pub target_reps: u32,
    /// Tempo string, empty when the exercise has none
    #[serde(default)]
    pub tempo: String,
}

/// One exercise in a session. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseDefinition", into = "ExerciseDefinition")]
pub struct Exercise {
    name: String,
    target_reps: u32,
    tempo: Option<Tempo>,
}

impl Exercise {
    /// Build a validated exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, `target_reps` is zero, or the
    /// tempo is malformed
    pub fn new(
        name: impl Into<String>,
        target_reps: u32,
        tempo: &str,
    ) -> Result<Self, SessionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SessionError::invalid_exercise(name, "name must not be empty"));
        }
        if target_reps == 0 {
            return Err(SessionError::invalid_exercise(
                name,
                "target reps must be positive",
            ));
        }
        let tempo = Tempo::parse_optional(tempo)?;
        Ok(Self {
            name,
            target_reps,
            tempo,
        })
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target repetitions
    #[must_use]
    pub const fn target_reps(&self) -> u32 {
        self.target_reps
    }

    /// Tempo pattern, if the exercise is paced
    #[must_use]
    pub const fn tempo(&self) -> Option<&Tempo> {
        self.tempo.as_ref()
    }

    /// Whether the tempo cycler runs for this exercise
    #[must_use]
    pub const fn has_tempo(&self) -> bool {
        self.tempo.is_some()
    }
}

impl TryFrom<ExerciseDefinition> for Exercise {
    type Error = SessionError;

    fn try_from(def: ExerciseDefinition) -> Result<Self, Self::Error> {
        Self::new(def.name, def.target_reps, &def.tempo)
    }
}

impl From<Exercise> for ExerciseDefinition {
    fn from(exercise: Exercise) -> Self {
        Self {
            tempo: exercise.tempo.map(|t| t.to_string()).unwrap_or_default(),
            name: exercise.name,
            target_reps: exercise.target_reps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tempo() {
        let tempo: Tempo = "3-1-2".parse().unwrap();
        assert_eq!(tempo.down_secs, 3);
        assert_eq!(tempo.hold_secs, 1);
        assert_eq!(tempo.up_secs, 2);
        assert_eq!(tempo.phase_secs(TempoPhase::Down), Some(3));
        assert_eq!(tempo.to_string(), "3-1-2");
        assert_eq!(tempo.phase_secs(TempoPhase::Rest), None);
    }

    #[test]
    fn test_parse_tempo_tolerates_spaces() {
        let tempo: Tempo = " 2 - 0 - 2 ".parse().unwrap();
        assert_eq!(tempo.to_string(), "2-0-2");
    }

    #[test]
    fn test_blank_tempo_is_absent() {
        assert_eq!(Tempo::parse_optional("").unwrap(), None);
        assert_eq!(Tempo::parse_optional("   ").unwrap(), None);
    }

    #[test]
    fn test_malformed_tempo_rejected() {
        for raw in ["3-1", "3-1-2-1", "a-1-2", "3--2", "-1-1-1"] {
            assert!(
                matches!(
                    Tempo::parse_optional(raw),
                    Err(SessionError::InvalidTempo { .. })
                ),
                "expected {raw} to be rejected"
            );
        }
    }

    #[test]
    fn test_exercise_validation() {
        assert!(Exercise::new("Squats", 12, "3-1-2").unwrap().has_tempo());
        assert!(!Exercise::new("Plank", 30, "").unwrap().has_tempo());
        assert!(matches!(
            Exercise::new("Squats", 0, "3-1-2"),
            Err(SessionError::InvalidExercise { .. })
        ));
        assert!(matches!(
            Exercise::new("  ", 5, ""),
            Err(SessionError::InvalidExercise { .. })
        ));
    }

    #[test]
    fn test_exercise_json_accepts_camel_case_and_missing_tempo() {
        let exercise: Exercise =
            serde_json::from_str(r#"{"name":"Plank","targetReps":30}"#).unwrap();
        assert_eq!(exercise.name(), "Plank");
        assert_eq!(exercise.target_reps(), 30);
        assert!(exercise.tempo().is_none());

        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["tempo"], "");
        assert_eq!(json["target_reps"], 30);
    }

    #[test]
    fn test_exercise_json_rejects_bad_tempo() {
        let result = serde_json::from_str::<Exercise>(
            r#"{"name":"Squats","target_reps":12,"tempo":"slow"}"#,
        );
        assert!(result.is_err());
    }
}
