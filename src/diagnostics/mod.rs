// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast manager.
//!
//! Rejected calls (invalid placement, duplicate id) and toast lifecycle
//! steps are recorded as [`DiagnosticEvent`]s. Producers send through a
//! [`DiagnosticsHandle`]; a [`DiagnosticsCollector`] keeps the most recent
//! events in a [`CircularBuffer`].

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, ToastEvent, ToastLifecycle,
    WarningEvent, WarningType,
};
