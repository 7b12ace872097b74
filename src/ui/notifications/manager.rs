// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the zone store exclusively and is the only way to
//! mutate it. Every effective mutation publishes a fresh snapshot to the
//! render bridge; timer expiries and view callbacks come back in as
//! [`Message`]s.

use super::bridge::{BridgeEvent, RenderBridge, Transition};
use super::clock::{Clock, SystemClock};
use super::notification::{Content, Toast, ToastId, ToastOptions, ToastUpdate};
use super::placement::Placement;
use super::zone_store::{ZoneSnapshot, ZoneStore};
use crate::config::ToastConfig;
use crate::diagnostics::{
    DiagnosticsHandle, ErrorEvent, ErrorType, ToastEvent, ToastLifecycle, WarningEvent,
    WarningType,
};
use crate::domain::notifications::TickInterval;
use crate::error::{Error, Result};
use iced::{time, Subscription};
use std::rc::Rc;
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Close a toast; handed to content as its `on_close`.
    Close { id: ToastId, placement: Placement },
    /// Pointer entered a toast.
    PointerEntered(ToastId),
    /// Pointer left a toast.
    PointerLeft(ToastId),
    /// The view layer finished a toast's exit animation.
    ExitComplete { id: ToastId, placement: Placement },
    /// Wake-up for timers and transitions. The manager's clock is
    /// authoritative; the instant is informational.
    Tick(Instant),
}

/// Zone-based toast manager.
pub struct Manager<D = ()> {
    store: ZoneStore<D>,
    bridge: RenderBridge<D>,
    next_id: u64,
    default_placement: Placement,
    tick_interval: TickInterval,
    clock: Box<dyn Clock>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<D> Default for Manager<D> {
    fn default() -> Self {
        Self::from_config(&ToastConfig::default())
    }
}

impl<D> Manager<D> {
    /// Creates a manager with default settings and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self {
            store: ZoneStore::new(),
            bridge: RenderBridge::new(config.transition()),
            next_id: 0,
            default_placement: config.default_placement,
            tick_interval: config.tick_interval(),
            clock: Box::new(SystemClock),
            diagnostics: None,
        }
    }

    /// Replaces the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the transition timings.
    ///
    /// Meant for construction: the render state is rebuilt, so toasts
    /// already shown restart their enter transition and countdown.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.bridge = RenderBridge::new(transition);
        self.bridge.sync(&self.store.snapshot(), self.clock.now());
        self
    }

    /// Sets the diagnostics handle for logging rejected calls and lifecycle steps.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Zone used when `notify` gets no placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.default_placement
    }

    /// Admits a toast and returns its id.
    ///
    /// Top zones receive it first, the others last. Nothing changes when the
    /// placement is unknown or the requested id is already live; both cases
    /// are reported to diagnostics and returned as errors.
    pub fn notify(
        &mut self,
        content: impl Into<Content<D>>,
        options: ToastOptions<D>,
    ) -> Result<ToastId> {
        let placement = match options.placement {
            Some(name) => match name.parse::<Placement>() {
                Ok(placement) => placement,
                Err(_) => {
                    let err = Error::InvalidPlacement(name);
                    self.report(&err, ErrorType::InvalidPlacement);
                    return Err(err);
                }
            },
            None => self.default_placement,
        };

        let id = match options.id {
            Some(id) => id,
            None => self.generate_id(),
        };

        let toast = Toast::new(
            id.clone(),
            content.into(),
            options.data,
            options.duration,
            placement,
        );
        if self.store.insert(toast).is_err() {
            let err = Error::DuplicateId(id);
            self.report(&err, ErrorType::DuplicateId);
            return Err(err);
        }

        self.trace(&id, placement, ToastLifecycle::Notified);
        self.publish();
        Ok(id)
    }

    /// Removes a toast from `placement`, or from whichever zone holds it.
    ///
    /// Unknown ids are ignored, so a user close racing a timer close is safe.
    pub fn close(&mut self, id: &ToastId, placement: Option<Placement>) {
        if let Some(removed) = self.store.remove(id, placement) {
            self.trace(removed.id(), removed.placement(), ToastLifecycle::Closed);
            self.publish();
        }
    }

    /// Empties the given zones, or every zone when `placements` is `None`.
    pub fn close_all(&mut self, placements: Option<&[Placement]>) {
        let targets = placements.unwrap_or(&Placement::ALL);
        let mut changed = false;
        for &placement in targets {
            for removed in self.store.clear(placement) {
                self.trace(removed.id(), placement, ToastLifecycle::Closed);
                changed = true;
            }
        }
        if changed {
            self.publish();
        }
    }

    #[must_use]
    pub fn find(&self, id: &ToastId) -> Option<&Toast<D>> {
        let (placement, index) = self.store.position(id)?;
        self.store.zone(placement).get(index).map(Rc::as_ref)
    }

    /// Position of the toast within its zone.
    #[must_use]
    pub fn find_index(&self, id: &ToastId) -> Option<usize> {
        self.store.position(id).map(|(_, index)| index)
    }

    /// Merges `update` into the toast with `id`.
    ///
    /// Returns `false` without changing anything when the toast is unknown
    /// or the update renames it to an id held by another toast.
    pub fn update(&mut self, id: &ToastId, update: ToastUpdate<D>) -> bool {
        let Some((placement, index)) = self.store.position(id) else {
            return false;
        };
        if let Some(new_id) = &update.id {
            if new_id != id && self.store.contains(new_id) {
                return false;
            }
        }

        let merged = self.store.zone(placement)[index].merged(update);
        let (new_id, new_placement) = (merged.id().clone(), merged.placement());
        self.store.replace(placement, index, merged);
        self.trace(&new_id, new_placement, ToastLifecycle::Updated);
        self.publish();
        true
    }

    /// Keeps only the `max` most recent toasts of a zone.
    ///
    /// Nothing calls this implicitly; zones are unbounded unless the caller
    /// trims them.
    pub fn truncate_zone(&mut self, placement: Placement, max: usize) {
        let removed = self.store.truncate(placement, max);
        if removed.is_empty() {
            return;
        }
        for toast in &removed {
            self.trace(toast.id(), placement, ToastLifecycle::Closed);
        }
        self.publish();
    }

    /// Live toasts of one zone in display order.
    #[must_use]
    pub fn zone(&self, placement: Placement) -> &[Rc<Toast<D>>] {
        self.store.zone(placement)
    }

    /// Copy of every zone at the current revision.
    #[must_use]
    pub fn zones(&self) -> ZoneSnapshot<D> {
        self.store.snapshot()
    }

    /// Rendered view of the zones, including toasts still exiting.
    #[must_use]
    pub fn bridge(&self) -> &RenderBridge<D> {
        &self.bridge
    }

    /// Whether anything is live or still exiting.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.store.is_empty() || !self.bridge.is_empty()
    }

    /// Current time according to the manager's clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Services timers and transitions.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for event in self.bridge.tick(now) {
            match event {
                BridgeEvent::Expired { id, placement } => {
                    self.trace(&id, placement, ToastLifecycle::Expired);
                    self.close(&id, Some(placement));
                }
                BridgeEvent::Unmounted { id, placement } => {
                    self.trace(&id, placement, ToastLifecycle::Unmounted);
                }
            }
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Close { id, placement } => self.close(&id, Some(placement)),
            Message::PointerEntered(id) => {
                self.bridge.pointer_entered(&id);
            }
            Message::PointerLeft(id) => {
                let now = self.clock.now();
                self.bridge.pointer_left(&id, now);
            }
            Message::ExitComplete { id, placement } => {
                match self.bridge.exit_complete(&id, Some(placement)) {
                    Some(BridgeEvent::Unmounted { id, placement }) => {
                        self.trace(&id, placement, ToastLifecycle::Unmounted);
                    }
                    // Late signal for an instance that was re-mounted
                    _ if self.bridge.find(&id).is_some() => {}
                    _ => {
                        if let Some(handle) = &self.diagnostics {
                            handle.log_warning(WarningEvent::new(
                                WarningType::UnknownToast,
                                format!("exit completed for toast \"{id}\" that is not dismissing"),
                            ));
                        }
                    }
                }
            }
            Message::Tick(_) => self.tick(),
        }
    }

    /// Periodic tick while timers or timed transitions are pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.bridge.is_idle() {
            Subscription::none()
        } else {
            time::every(self.tick_interval.as_duration()).map(Message::Tick)
        }
    }

    fn generate_id(&mut self) -> ToastId {
        loop {
            self.next_id += 1;
            let id = ToastId::from(self.next_id.to_string());
            if !self.store.contains(&id) {
                return id;
            }
        }
    }

    fn publish(&mut self) {
        let now = self.clock.now();
        self.bridge.sync(&self.store.snapshot(), now);
    }

    fn report(&self, err: &Error, error_type: ErrorType) {
        eprintln!("[ToastManager] Error: {err}");
        if let Some(handle) = &self.diagnostics {
            handle.log_error(ErrorEvent::new(error_type, err.to_string()));
        }
    }

    fn trace(&self, id: &ToastId, placement: Placement, lifecycle: ToastLifecycle) {
        if let Some(handle) = &self.diagnostics {
            handle.log_toast(
                ToastEvent::new(id.as_str(), placement.as_str(), lifecycle),
                self.clock.now(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::domain::diagnostics::BufferCapacity;
    use crate::domain::notifications::TransitionDuration;
    use crate::ui::notifications::{ManualClock, Phase};
    use std::time::Duration;

    fn manager() -> (Manager, ManualClock) {
        let clock = ManualClock::new();
        let manager = Manager::new()
            .with_clock(clock.clone())
            .with_transition(Transition::instant());
        (manager, clock)
    }

    fn ids(manager: &Manager, placement: Placement) -> Vec<String> {
        manager
            .zone(placement)
            .iter()
            .map(|t| t.id().to_string())
            .collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager: Manager = Manager::new();
        assert!(!manager.has_toasts());
        assert_eq!(manager.placement(), Placement::BottomRight);
    }

    #[test]
    fn generated_ids_increase_and_are_not_reused() {
        let (mut manager, _) = manager();
        let first = manager.notify("a", ToastOptions::new()).unwrap();
        manager.close(&first, None);
        let second = manager.notify("b", ToastOptions::new()).unwrap();

        assert_eq!(first.as_str(), "1");
        assert_eq!(second.as_str(), "2");
    }

    #[test]
    fn generated_ids_skip_caller_ids_in_use() {
        let (mut manager, _) = manager();
        manager.notify("x", ToastOptions::new().id("1")).unwrap();
        let generated = manager.notify("y", ToastOptions::new()).unwrap();
        assert_eq!(generated.as_str(), "2");
    }

    #[test]
    fn separate_managers_have_separate_counters() {
        let (mut a, _) = manager();
        let (mut b, _) = manager();
        a.notify("a", ToastOptions::new()).unwrap();
        assert_eq!(b.notify("b", ToastOptions::new()).unwrap().as_str(), "1");
    }

    #[test]
    fn notify_uses_default_placement() {
        let (mut manager, _) = manager();
        let id = manager.notify("hello", ToastOptions::new()).unwrap();
        assert_eq!(manager.find(&id).unwrap().placement(), Placement::BottomRight);
    }

    #[test]
    fn top_placement_prepends() {
        let (mut manager, _) = manager();
        for id in ["A", "B", "C"] {
            manager
                .notify(id, ToastOptions::new().id(id).placement("top"))
                .unwrap();
        }
        assert_eq!(ids(&manager, Placement::Top), ["C", "B", "A"]);
    }

    #[test]
    fn bottom_placement_appends() {
        let (mut manager, _) = manager();
        for id in ["A", "B", "C"] {
            manager
                .notify(id, ToastOptions::new().id(id).placement(Placement::Bottom))
                .unwrap();
        }
        assert_eq!(ids(&manager, Placement::Bottom), ["A", "B", "C"]);
    }

    #[test]
    fn invalid_placement_is_rejected_and_logged() {
        let (mut manager, _) = manager();
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        manager.set_diagnostics(collector.handle());

        let result = manager.notify("oops", ToastOptions::new().placement("center"));

        assert_eq!(result, Err(Error::InvalidPlacement("center".into())));
        assert!(!manager.has_toasts());
        collector.process_pending();
        let errors: Vec<_> = collector.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ErrorType::InvalidPlacement);
        assert_eq!(
            errors[0].message,
            "Invalid toast placement \"center\". Please provide a valid placement from the \
             following options: bottom, bottom-right, bottom-left, top, top-left, top-right."
        );
    }

    #[test]
    fn duplicate_caller_id_is_rejected() {
        let (mut manager, _) = manager();
        manager.notify("a", ToastOptions::new().id("same")).unwrap();
        let result = manager.notify("b", ToastOptions::new().id("same").placement("top"));

        assert_eq!(result, Err(Error::DuplicateId(ToastId::from("same"))));
        assert!(manager.zone(Placement::Top).is_empty());
    }

    #[test]
    fn close_is_idempotent() {
        let (mut manager, _) = manager();
        let id = manager.notify("a", ToastOptions::new()).unwrap();
        manager.notify("b", ToastOptions::new()).unwrap();

        manager.close(&id, None);
        let after_first = manager.zones().revision();
        manager.close(&id, None);
        manager.close(&ToastId::from("never"), None);

        assert_eq!(manager.zones().revision(), after_first);
        assert_eq!(ids(&manager, Placement::BottomRight), ["2"]);
    }

    #[test]
    fn close_all_respects_placements() {
        let (mut manager, _) = manager();
        manager.notify("t", ToastOptions::new().placement("top")).unwrap();
        manager.notify("b", ToastOptions::new().placement("bottom")).unwrap();

        manager.close_all(Some(&[Placement::Top]));
        assert!(manager.zone(Placement::Top).is_empty());
        assert_eq!(manager.zone(Placement::Bottom).len(), 1);

        manager.close_all(None);
        assert!(manager.zone(Placement::Bottom).is_empty());
    }

    #[test]
    fn find_and_find_index() {
        let (mut manager, _) = manager();
        for id in ["A", "B"] {
            manager
                .notify(id, ToastOptions::new().id(id).placement("top"))
                .unwrap();
        }
        let a = ToastId::from("A");
        assert_eq!(manager.find(&a).unwrap().content().as_text(), Some("A"));
        assert_eq!(manager.find_index(&a), Some(1));
        assert!(manager.find(&ToastId::from("Z")).is_none());
        assert_eq!(manager.find_index(&ToastId::from("Z")), None);
    }

    #[test]
    fn update_merges_fields_in_place() {
        let (mut manager, _) = manager();
        let id = manager
            .notify("before", ToastOptions::new().placement("top-left"))
            .unwrap();

        assert!(manager.update(&id, ToastUpdate::new().content("after")));

        let toast = manager.find(&id).unwrap();
        assert_eq!(toast.content().as_text(), Some("after"));
        assert_eq!(toast.id(), &id);
        assert_eq!(toast.placement(), Placement::TopLeft);
    }

    #[test]
    fn update_missing_returns_false() {
        let (mut manager, _) = manager();
        manager.notify("a", ToastOptions::new()).unwrap();
        let revision = manager.zones().revision();

        assert!(!manager.update(&ToastId::from("missing"), ToastUpdate::new()));
        assert_eq!(manager.zones().revision(), revision);
    }

    #[test]
    fn update_rename_onto_live_id_is_rejected() {
        let (mut manager, _) = manager();
        let a = manager.notify("a", ToastOptions::new()).unwrap();
        let b = manager.notify("b", ToastOptions::new()).unwrap();

        assert!(!manager.update(&a, ToastUpdate::new().id(b.clone())));
        assert_eq!(manager.find(&a).unwrap().content().as_text(), Some("a"));
    }

    #[test]
    fn update_placement_moves_toast() {
        let (mut manager, _) = manager();
        manager.notify("t", ToastOptions::new().id("T").placement("top")).unwrap();
        let id = manager.notify("b", ToastOptions::new().placement("bottom")).unwrap();

        assert!(manager.update(&id, ToastUpdate::new().placement(Placement::Top)));

        assert!(manager.zone(Placement::Bottom).is_empty());
        assert_eq!(ids(&manager, Placement::Top), [id.to_string(), "T".to_string()]);
    }

    #[test]
    fn truncate_zone_is_caller_driven() {
        let (mut manager, _) = manager();
        for _ in 0..5 {
            manager.notify("x", ToastOptions::new()).unwrap();
        }
        assert_eq!(manager.zone(Placement::BottomRight).len(), 5);

        manager.truncate_zone(Placement::BottomRight, 3);
        assert_eq!(ids(&manager, Placement::BottomRight), ["3", "4", "5"]);
    }

    #[test]
    fn expiry_closes_the_toast() {
        let (mut manager, clock) = manager();
        let id = manager
            .notify("bye", ToastOptions::new().duration(Duration::from_millis(100)))
            .unwrap();

        clock.advance(Duration::from_millis(99));
        manager.tick();
        assert!(manager.find(&id).is_some());

        clock.advance(Duration::from_millis(1));
        manager.tick();
        assert!(manager.find(&id).is_none());
        assert_eq!(manager.bridge().find(&id).unwrap().phase(), Phase::Dismissing);

        manager.tick();
        assert!(manager.bridge().find(&id).is_none());
        assert!(!manager.has_toasts());
    }

    #[test]
    fn close_message_from_content_closes_toast() {
        let (mut manager, _) = manager();
        let id = manager.notify("a", ToastOptions::new()).unwrap();
        let on_close = manager.bridge().find(&id).unwrap().context().on_close;

        manager.handle_message(on_close.clone());
        manager.handle_message(on_close);

        assert!(manager.find(&id).is_none());
    }

    #[test]
    fn lifecycle_is_traced() {
        let (mut manager, clock) = manager();
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        manager.set_diagnostics(collector.handle());

        manager
            .notify("a", ToastOptions::new().duration(Duration::from_millis(10)))
            .unwrap();
        clock.advance(Duration::from_millis(10));
        manager.tick();
        manager.tick();
        collector.process_pending();

        let steps: Vec<_> = collector.toast_events().map(|e| e.lifecycle).collect();
        assert_eq!(
            steps,
            [
                ToastLifecycle::Notified,
                ToastLifecycle::Expired,
                ToastLifecycle::Closed,
                ToastLifecycle::Unmounted,
            ]
        );
    }

    #[test]
    fn unknown_exit_complete_is_a_warning() {
        let (mut manager, _) = manager();
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        manager.set_diagnostics(collector.handle());

        manager.handle_message(Message::ExitComplete {
            id: ToastId::from("ghost"),
            placement: Placement::Top,
        });
        collector.process_pending();

        assert_eq!(collector.len(), 1);
        assert_eq!(collector.errors().count(), 0);
    }

    #[test]
    fn exit_complete_for_remounted_toast_is_silent() {
        let clock = ManualClock::new();
        let mut manager: Manager = Manager::new()
            .with_clock(clock.clone())
            .with_transition(Transition::manual(TransitionDuration::ZERO));
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        manager.set_diagnostics(collector.handle());

        let id = manager.notify("a", ToastOptions::new().id("again")).unwrap();
        manager.close(&id, None);
        manager.notify("b", ToastOptions::new().id("again")).unwrap();
        manager.handle_message(Message::ExitComplete {
            id: id.clone(),
            placement: Placement::BottomRight,
        });
        collector.process_pending();

        assert_eq!(collector.len(), collector.toast_events().count());
        assert_eq!(manager.bridge().find(&id).map(|r| r.phase()), Some(Phase::Active));
    }

    #[test]
    fn update_keeps_running_countdown() {
        let (mut manager, clock) = manager();
        let id = manager
            .notify("x", ToastOptions::new().duration(Duration::from_millis(5000)))
            .unwrap();

        clock.advance(Duration::from_millis(4000));
        assert!(manager.update(&id, ToastUpdate::new().content("y")));
        assert!(manager.update(&id, ToastUpdate::new().persistent()));
        clock.advance(Duration::from_millis(1000));
        manager.tick();

        assert!(manager.find(&id).is_none());
    }

    #[test]
    fn updated_duration_applies_after_hover() {
        let (mut manager, clock) = manager();
        let id = manager
            .notify("x", ToastOptions::new().duration(Duration::from_millis(5000)))
            .unwrap();
        manager.update(&id, ToastUpdate::new().duration(Duration::from_millis(200)));

        manager.handle_message(Message::PointerEntered(id.clone()));
        manager.handle_message(Message::PointerLeft(id.clone()));
        clock.advance(Duration::from_millis(200));
        manager.tick();

        assert!(manager.find(&id).is_none());
    }

    #[test]
    fn with_transition_rebuilds_shown_toasts() {
        let clock = ManualClock::new();
        let mut manager: Manager = Manager::new().with_clock(clock.clone());
        let id = manager
            .notify("x", ToastOptions::new().duration(Duration::from_millis(1000)))
            .unwrap();
        assert_eq!(manager.bridge().find(&id).map(|r| r.phase()), Some(Phase::Mounting));

        clock.advance(Duration::from_millis(600));
        let manager = manager.with_transition(Transition::instant());

        let rendered = manager.bridge().find(&id).expect("still rendered");
        assert_eq!(rendered.phase(), Phase::Active);
        assert_eq!(
            rendered.timer().remaining(manager.now()),
            Some(Duration::from_millis(1000))
        );
    }

    #[test]
    fn subscription_sleeps_when_idle() {
        let (mut manager, _) = manager();
        assert!(manager.bridge().is_idle());
        manager.notify("sticky", ToastOptions::new()).unwrap();
        assert!(manager.bridge().is_idle());
        manager
            .notify("timed", ToastOptions::new().duration(Duration::from_secs(1)))
            .unwrap();
        assert!(!manager.bridge().is_idle());
    }
}
