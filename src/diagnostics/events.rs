// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types emitted by the toast manager.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Categories of warnings raised while driving toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A view-layer callback referenced a toast that is not rendered.
    UnknownToast,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of caller errors rejected by the toast manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// `notify` was called with a placement outside the six zones.
    InvalidPlacement,
    /// `notify` was called with an id already held by a live toast.
    DuplicateId,
    /// Other error type not covered by specific categories.
    Other,
}

/// A non-fatal issue worth recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A rejected operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Stages of a toast's life that are worth tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLifecycle {
    /// Admitted into a zone by `notify`.
    Notified,
    /// Fields merged by `update`.
    Updated,
    /// Removed from its zone by `close` or `close_all`.
    Closed,
    /// Its countdown elapsed.
    Expired,
    /// Exit transition finished and the rendered instance was purged.
    Unmounted,
}

/// One lifecycle step of one toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastEvent {
    pub id: String,
    pub placement: String,
    pub lifecycle: ToastLifecycle,
}

impl ToastEvent {
    #[must_use]
    pub fn new(id: impl Into<String>, placement: impl Into<String>, lifecycle: ToastLifecycle) -> Self {
        Self {
            id: id.into(),
            placement: placement.into(),
            lifecycle,
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
    Toast { event: ToastEvent },
}
