// SPDX-License-Identifier: MPL-2.0
//! Pausable auto-dismiss countdown for one rendered toast.
//!
//! Pausing drops the deadline outright; resuming re-arms the *full*
//! duration rather than the time that was left. Hovering a toast therefore
//! always grants it a complete dwell period after the pointer leaves.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerController {
    duration: Option<Duration>,
    deadline: Option<Instant>,
    paused: bool,
}

impl TimerController {
    /// Creates a controller and arms it at `now`. A `None` duration is never
    /// armed.
    #[must_use]
    pub fn new(duration: Option<Duration>, now: Instant) -> Self {
        Self {
            duration,
            deadline: duration.map(|d| now + d),
            paused: false,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether an expiry is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before expiry, if armed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Cancels the pending expiry while the pointer is over the toast.
    pub fn pause(&mut self) {
        self.paused = true;
        self.deadline = None;
    }

    /// Re-arms a fresh countdown of the full duration.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.deadline = self.duration.map(|d| now + d);
    }

    /// Replaces the duration used by the next [`resume`](Self::resume).
    ///
    /// A pending expiry keeps its deadline.
    pub fn set_duration(&mut self, duration: Option<Duration>) {
        self.duration = duration;
    }

    /// Returns `true` exactly once, on the first call at or past the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending expiry for good.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.duration = None;
    }
}
