// SPDX-License-Identifier: MPL-2.0
//! Toast timing domain types.
//!
//! - [`TickInterval`]: How often pending toast timers are serviced
//! - [`TransitionDuration`]: Length of an enter or exit transition

mod newtypes;

pub use newtypes::{tick_bounds, transition_bounds, TickInterval, TransitionDuration};
