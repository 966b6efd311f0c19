// ABOUTME: Display formatting for the workout clock and progress bars
// ABOUTME: Renders elapsed seconds as m:ss and rep progress as a bounded fraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Format elapsed seconds as `m:ss`. Minutes are not padded and not capped.
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Fraction of the target completed, clamped to `0.0..=1.0`
#[must_use]
pub fn progress_fraction(current: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (f64::from(current) / f64::from(target)).clamp(0.0, 1.0)
}
