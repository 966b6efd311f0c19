// ABOUTME: Per-exercise form ledger and the summary built when a session ends
// ABOUTME: Scores form samples, estimates calories, and writes coaching notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::scoring::{
    CALORIES_PER_MINUTE, EXCELLENT_HEADLINE_THRESHOLD, GOOD_SCORE, HEADLINE_EXCELLENT,
    HEADLINE_KEEP_GOING, IMPROVEMENT_NOTE_THRESHOLD,
};
use crate::constants::FORM_WARNING_CUE;
use crate::formatters::format_clock;
use crate::models::{ExerciseBreakdown, ExercisePlan, FormQuality, SessionSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ExerciseTally {
    score_sum: u64,
    samples: u32,
    warnings: u32,
    reps: u32,
}

impl ExerciseTally {
    /// Rounded mean sample score; `good` when nothing was sampled
    fn form_score(&self) -> u32 {
        if self.samples == 0 {
            return GOOD_SCORE;
        }
        let samples = u64::from(self.samples);
        ((self.score_sum + samples / 2) / samples) as u32
    }
}

/// Running record of what happened on each exercise reached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLedger {
    tallies: Vec<ExerciseTally>,
}

impl SessionLedger {
    /// Ledger with the first exercise already reached
    #[must_use]
    pub fn new() -> Self {
        Self {
            tallies: vec![ExerciseTally::default()],
        }
    }

    fn tally_mut(&mut self, index: usize) -> &mut ExerciseTally {
        if self.tallies.len() <= index {
            self.tallies.resize(index + 1, ExerciseTally::default());
        }
        &mut self.tallies[index]
    }

    /// Record a form sample taken during exercise `index`
    pub fn record_form(&mut self, index: usize, quality: FormQuality) {
        let tally = self.tally_mut(index);
        tally.score_sum += u64::from(quality.score());
        tally.samples += 1;
        if quality == FormQuality::Warning {
            tally.warnings += 1;
        }
    }

    /// Record the current rep count for exercise `index`
    pub fn record_reps(&mut self, index: usize, reps: u32) {
        self.tally_mut(index).reps = reps;
    }

    /// Mark exercise `index` as reached
    pub fn reach(&mut self, index: usize) {
        self.tally_mut(index);
    }

    /// Per-exercise results for every exercise reached
    #[must_use]
    pub fn breakdown(&self, plan: &ExercisePlan) -> Vec<ExerciseBreakdown> {
        self.tallies
            .iter()
            .zip(plan.iter())
            .map(|(tally, exercise)| ExerciseBreakdown {
                name: exercise.name().to_owned(),
                reps: tally.reps,
                target_reps: exercise.target_reps(),
                form_score: tally.form_score(),
                form_samples: tally.samples,
                had_warning: tally.warnings > 0,
            })
            .collect()
    }
}

/// Inputs that are not tracked by the ledger
#[derive(Debug, Clone, Copy)]
pub struct SummaryContext {
    /// Session identifier
    pub session_id: Uuid,
    /// Controller creation time
    pub started_at: DateTime<Utc>,
    /// Active seconds on the session clock
    pub elapsed_seconds: u64,
    /// Whether the last exercise was finished
    pub completed: bool,
}

/// Build the read-only summary for a finished session
#[must_use]
pub fn build_summary(
    context: SummaryContext,
    plan: &ExercisePlan,
    ledger: &SessionLedger,
) -> SessionSummary {
    let breakdown = ledger.breakdown(plan);
    let form_score = overall_score(&breakdown);

    SessionSummary {
        session_id: context.session_id,
        started_at: context.started_at,
        ended_at: Utc::now(),
        duration_seconds: context.elapsed_seconds,
        duration: format_clock(context.elapsed_seconds),
        completed: context.completed,
        total_reps: breakdown.iter().map(|exercise| exercise.reps).sum(),
        form_score,
        calories: estimate_calories(context.elapsed_seconds),
        headline: headline(form_score).to_owned(),
        improvements: improvements(&breakdown),
        corrections: corrections(&breakdown),
        exercise_breakdown: breakdown,
    }
}

/// Rounded mean of per-exercise scores; `good` for an empty breakdown
#[must_use]
pub fn overall_score(breakdown: &[ExerciseBreakdown]) -> u32 {
    if breakdown.is_empty() {
        return GOOD_SCORE;
    }
    let total: u64 = breakdown.iter().map(|e| u64::from(e.form_score)).sum();
    let count = breakdown.len() as u64;
    ((total + count / 2) / count) as u32
}

/// Calories for `elapsed_seconds` of training at a flat burn rate
#[must_use]
pub fn estimate_calories(elapsed_seconds: u64) -> u32 {
    let minutes = elapsed_seconds as f64 / 60.0;
    (minutes * CALORIES_PER_MINUTE).round() as u32
}

/// Headline shown under the overall score
#[must_use]
pub const fn headline(form_score: u32) -> &'static str {
    if form_score >= EXCELLENT_HEADLINE_THRESHOLD {
        HEADLINE_EXCELLENT
    } else {
        HEADLINE_KEEP_GOING
    }
}

fn improvements(breakdown: &[ExerciseBreakdown]) -> Vec<String> {
    breakdown
        .iter()
        .filter(|exercise| exercise.form_samples > 0)
        .filter(|exercise| exercise.form_score >= IMPROVEMENT_NOTE_THRESHOLD)
        .map(|exercise| format!("{}: consistent form ({}/100)", exercise.name, exercise.form_score))
        .collect()
}

fn corrections(breakdown: &[ExerciseBreakdown]) -> Vec<String> {
    let mut notes = Vec::new();
    for exercise in breakdown {
        if exercise.had_warning {
            notes.push(format!("{}: {FORM_WARNING_CUE}", exercise.name));
        }
        if !exercise.target_met() {
            notes.push(format!(
                "{}: finished {} of {} reps",
                exercise.name, exercise.reps, exercise.target_reps
            ));
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;

    fn plan() -> ExercisePlan {
        ExercisePlan::new(vec![
            Exercise::new("Squats", 12, "3-1-2").unwrap(),
            Exercise::new("Push-ups", 15, "2-1-2").unwrap(),
            Exercise::new("Plank", 30, "").unwrap(),
        ])
        .unwrap()
    }

    fn context(elapsed_seconds: u64, completed: bool) -> SummaryContext {
        SummaryContext {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            elapsed_seconds,
            completed,
        }
    }

    #[test]
    fn test_calories_match_mock_summary() {
        assert_eq!(estimate_calories(1935), 284);
        assert_eq!(estimate_calories(0), 0);
        assert_eq!(estimate_calories(60), 9);
    }

    #[test]
    fn test_exercise_without_samples_scores_good() {
        let ledger = SessionLedger::new();
        let breakdown = ledger.breakdown(&plan());
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].form_score, 85);
        assert_eq!(overall_score(&breakdown), 85);
    }

    #[test]
    fn test_form_scores_are_rounded_means() {
        let mut ledger = SessionLedger::new();
        ledger.record_form(0, FormQuality::Excellent);
        ledger.record_form(0, FormQuality::Good);
        ledger.record_form(0, FormQuality::Warning);
        ledger.reach(1);
        ledger.record_form(1, FormQuality::Excellent);

        let breakdown = ledger.breakdown(&plan());
        // (100 + 85 + 60) / 3 = 81.67
        assert_eq!(breakdown[0].form_score, 82);
        assert!(breakdown[0].had_warning);
        assert_eq!(breakdown[1].form_score, 100);
        // (82 + 100) / 2
        assert_eq!(overall_score(&breakdown), 91);
    }

    #[test]
    fn test_summary_notes_and_headline() {
        let mut ledger = SessionLedger::new();
        ledger.record_form(0, FormQuality::Warning);
        ledger.record_reps(0, 12);
        ledger.reach(1);
        ledger.record_form(1, FormQuality::Excellent);
        ledger.record_reps(1, 4);

        let summary = build_summary(context(125, false), &plan(), &ledger);
        assert_eq!(summary.exercise_count(), 2);
        assert_eq!(summary.duration, "2:05");
        assert_eq!(summary.total_reps, 16);
        assert_eq!(summary.form_score, 80);
        assert_eq!(summary.headline, HEADLINE_KEEP_GOING);
        assert_eq!(summary.improvements, vec!["Push-ups: consistent form (100/100)"]);
        assert_eq!(
            summary.corrections,
            vec![
                "Squats: Keep your back straight".to_owned(),
                "Push-ups: finished 4 of 15 reps".to_owned()
            ]
        );
        assert!(!summary.completed);
    }

    #[test]
    fn test_headline_threshold() {
        assert_eq!(headline(85), HEADLINE_EXCELLENT);
        assert_eq!(headline(84), HEADLINE_KEEP_GOING);
    }
}
