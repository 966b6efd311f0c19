// ABOUTME: Deterministic virtual-time scheduler for the session's periodic and one-shot timers
// ABOUTME: Orders due ticks by deadline, breaking ties by a fixed timer priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Timers owned by a workout session. Declaration order is the tie-break
/// order when several timers fall due at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// One-shot delay before the simulated camera answers
    PermissionDelay,
    /// Elapsed-seconds clock
    Clock,
    /// Form-quality sampler
    Form,
    /// Tempo phase cycler
    Tempo,
    /// Rep accumulator
    Rep,
}

impl TimerKind {
    /// Stable name used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PermissionDelay => "permission_delay",
            Self::Clock => "clock",
            Self::Form => "form",
            Self::Tempo => "tempo",
            Self::Rep => "rep",
        }
    }
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    period_ms: u64,
    next_due_ms: u64,
    repeating: bool,
}

/// Virtual clock plus the set of armed timers.
///
/// Arming a timer that is already armed restarts it from the current instant,
/// matching how a freshly registered interval starts counting from zero.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    now_ms: u64,
    timers: BTreeMap<TimerKind, Timer>,
}

impl TickScheduler {
    /// Empty scheduler at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arm `kind` to fire every `period`, first firing one period from now
    pub fn arm_periodic(&mut self, kind: TimerKind, period: Duration) {
        self.arm(kind, period, true);
    }

    /// Arm `kind` to fire once after `delay`
    pub fn arm_once(&mut self, kind: TimerKind, delay: Duration) {
        self.arm(kind, delay, false);
    }

    fn arm(&mut self, kind: TimerKind, period: Duration, repeating: bool) {
        let period_ms = duration_to_ms(period).max(1);
        self.timers.insert(
            kind,
            Timer {
                period_ms,
                next_due_ms: self.now_ms.saturating_add(period_ms),
                repeating,
            },
        );
    }

    /// Cancel `kind`; returns whether it was armed
    pub fn disarm(&mut self, kind: TimerKind) -> bool {
        self.timers.remove(&kind).is_some()
    }

    /// Cancel every timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Whether `kind` is currently armed
    #[must_use]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.timers.contains_key(&kind)
    }

    /// Armed timers in tie-break order
    #[must_use]
    pub fn armed(&self) -> Vec<TimerKind> {
        self.timers.keys().copied().collect()
    }

    /// Virtual time at which `kind` fires next
    #[must_use]
    pub fn next_due_ms(&self, kind: TimerKind) -> Option<u64> {
        self.timers.get(&kind).map(|timer| timer.next_due_ms)
    }

    /// Remove and return the earliest tick due at or before `until_ms`.
    ///
    /// The virtual clock moves to the tick's deadline. Repeating timers are
    /// rescheduled one period later; one-shot timers are dropped.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerKind> {
        let (kind, due_ms) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.next_due_ms <= until_ms)
            .min_by_key(|(kind, timer)| (timer.next_due_ms, **kind))
            .map(|(kind, timer)| (*kind, timer.next_due_ms))?;

        self.now_ms = self.now_ms.max(due_ms);
        match self.timers.get_mut(&kind) {
            Some(timer) if timer.repeating => {
                timer.next_due_ms = due_ms.saturating_add(timer.period_ms);
            }
            _ => {
                self.timers.remove(&kind);
            }
        }
        Some(kind)
    }

    /// Move the virtual clock forward to `until_ms` once every due tick has been popped
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
#[must_use]
pub fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
