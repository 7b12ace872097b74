// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for toast events.
//!
//! Producers hold a [`DiagnosticsHandle`]; the owner of the
//! [`DiagnosticsCollector`] drains the channel into a circular buffer.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::config::ToastConfig;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ToastEvent,
    WarningEvent,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event is
/// dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEvent::new(DiagnosticEventKind::Error { event }));
    }

    /// Logs a toast lifecycle step at the given (possibly virtual) instant.
    pub fn log_toast(&self, event: ToastEvent, at: Instant) {
        self.send(DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::Toast { event },
            at,
        ));
    }

    fn send(&self, event: DiagnosticEvent) {
        let _ = self.event_tx.try_send(event);
    }
}

/// Central store for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

/// Events buffered in the channel between two drains.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a collector sized by `diagnostics_buffer_capacity`.
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new(config.diagnostics_capacity())
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Call this once per update cycle.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the stored error events (oldest first).
    pub fn errors(&self) -> impl Iterator<Item = &ErrorEvent> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Error { event } => Some(event),
            _ => None,
        })
    }

    /// Returns the stored toast lifecycle events (oldest first).
    pub fn toast_events(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Toast { event } => Some(event),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}
