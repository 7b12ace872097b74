// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast configuration.
//!
//! The bounds live with their newtypes in [`crate::domain`]; this module
//! re-states them under configuration names so settings code has a single
//! place to look.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::notifications::{tick_bounds, transition_bounds};

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Zone used when `notify` is called without an explicit placement.
pub const DEFAULT_PLACEMENT: &str = "bottom-right";

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default timer service interval (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_bounds::DEFAULT_MS;

/// Default enter transition length (in milliseconds).
pub const DEFAULT_ENTER_MS: u64 = transition_bounds::DEFAULT_ENTER_MS;

/// Default exit transition length (in milliseconds).
pub const DEFAULT_EXIT_MS: u64 = transition_bounds::DEFAULT_EXIT_MS;

/// Longest accepted transition (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = transition_bounds::MAX_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of retained diagnostic events.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;
