// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - Toast manager, zones and overlay rendering
//! - [`design_tokens`] - Design system constants used by the default toast card

pub mod design_tokens;
pub mod notifications;
