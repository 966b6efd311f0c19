// ABOUTME: Form scoring constants for the post-workout summary
// ABOUTME: Per-quality scores, headline threshold, and calorie estimate rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Score for an excellent form sample
pub const EXCELLENT_SCORE: u32 = 100;

/// Score for a good form sample, also used for exercises with no samples
pub const GOOD_SCORE: u32 = 85;

/// Score for a warning form sample
pub const WARNING_SCORE: u32 = 60;

/// Score for a poor form sample
pub const POOR_SCORE: u32 = 30;

/// Overall score at or above which the summary headline is celebratory
pub const EXCELLENT_HEADLINE_THRESHOLD: u32 = 85;

/// Per-exercise score at or above which an improvement note is added
pub const IMPROVEMENT_NOTE_THRESHOLD: u32 = 90;

/// Calorie estimate rate (285 kcal over 32:15 in the reference workout)
pub const CALORIES_PER_MINUTE: f64 = 8.8;

/// Headline for a strong session
pub const HEADLINE_EXCELLENT: &str = "Excellent work! Your form was great today.";

/// Headline otherwise
pub const HEADLINE_KEEP_GOING: &str = "Good effort! Focus on the areas below to improve.";
