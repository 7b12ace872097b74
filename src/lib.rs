// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification manager for the Iced GUI framework.
//!
//! Toasts live in six screen zones, dismiss themselves after an optional
//! duration, pause while hovered and fade through enter and exit
//! transitions. Settings are persisted as TOML and rejected calls are
//! recorded by an in-memory diagnostics collector.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

pub use error::{Error, Result};
pub use ui::notifications::{Manager, Message, Placement, ToastId, ToastOptions, ToastUpdate};
