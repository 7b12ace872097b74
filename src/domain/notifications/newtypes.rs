// SPDX-License-Identifier: MPL-2.0
//! Toast timing newtypes.
//!
//! Both types are stored in milliseconds and clamped on construction, so the
//! notification layer never has to validate them again.

use std::time::Duration;

// =============================================================================
// Tick Bounds
// =============================================================================

/// Tick interval bounds (16ms to 1000ms).
pub mod tick_bounds {
    /// Minimum interval, roughly one frame at 60Hz.
    pub const MIN_MS: u64 = 16;
    /// Maximum interval.
    pub const MAX_MS: u64 = 1000;
    /// Default interval.
    pub const DEFAULT_MS: u64 = 100;
}

// =============================================================================
// TickInterval
// =============================================================================

/// Period at which toast timers and transitions are serviced.
///
/// Expiry precision is bounded by this value: a toast closes on the first
/// tick at or after its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(tick_bounds::MIN_MS, tick_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Transition Bounds
// =============================================================================

/// Transition duration bounds (0ms to 5000ms).
pub mod transition_bounds {
    /// Minimum duration (instant transition).
    pub const MIN_MS: u64 = 0;
    /// Maximum duration.
    pub const MAX_MS: u64 = 5000;
    /// Default enter duration.
    pub const DEFAULT_ENTER_MS: u64 = 150;
    /// Default exit duration.
    pub const DEFAULT_EXIT_MS: u64 = 300;
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Length of an enter or exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Instant transition.
    pub const ZERO: Self = Self(0);

    /// Creates a new transition duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the transition as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_interval_clamps_to_valid_range() {
        assert_eq!(TickInterval::new(1).millis(), tick_bounds::MIN_MS);
        assert_eq!(TickInterval::new(60_000).millis(), tick_bounds::MAX_MS);
        assert_eq!(TickInterval::new(50).millis(), 50);
    }

    #[test]
    fn tick_interval_default_is_100ms() {
        assert_eq!(
            TickInterval::default().as_duration(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn transition_duration_clamps_to_max() {
        assert_eq!(
            TransitionDuration::new(u64::MAX).millis(),
            transition_bounds::MAX_MS
        );
        assert_eq!(TransitionDuration::new(0), TransitionDuration::ZERO);
    }
}
