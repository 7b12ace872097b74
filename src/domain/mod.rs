// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notifications`]: Toast timing types ([`TickInterval`](notifications::TickInterval),
//!   [`TransitionDuration`](notifications::TransitionDuration))

pub mod diagnostics;
pub mod notifications;
