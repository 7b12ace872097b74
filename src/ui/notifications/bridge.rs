// SPDX-License-Identifier: MPL-2.0
//! Projection of the zone store onto rendered toasts.
//!
//! The store is the source of truth and the bridge lags behind it.
//! A toast removed from the store keeps rendering in [`Phase::Dismissing`]
//! until its exit transition completes, either after the configured exit
//! duration or when the view layer reports it through
//! [`RenderBridge::exit_complete`].
//!
//! ```text
//! Mounting ──enter──▶ Active(Running ⇄ Paused) ──close──▶ Dismissing ──exit──▶ (purged)
//! ```

use super::manager::Message;
use super::notification::{Content, Toast, ToastContext, ToastId};
use super::placement::Placement;
use super::timer::TimerController;
use super::zone_store::ZoneSnapshot;
use crate::config::{DEFAULT_ENTER_MS, DEFAULT_EXIT_MS};
use crate::domain::notifications::TransitionDuration;
use iced::Element;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Enter and exit timings of the transition layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    enter: Duration,
    exit: Option<Duration>,
}

impl Transition {
    /// `exit: None` leaves exit completion to [`RenderBridge::exit_complete`].
    #[must_use]
    pub fn new(enter: TransitionDuration, exit: Option<TransitionDuration>) -> Self {
        Self {
            enter: enter.as_duration(),
            exit: exit.map(TransitionDuration::as_duration),
        }
    }

    /// No animation: toasts are active on the first tick and purged on the
    /// tick after they close.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(TransitionDuration::ZERO, Some(TransitionDuration::ZERO))
    }

    /// Timed enter, exit driven by the view layer only.
    #[must_use]
    pub fn manual(enter: TransitionDuration) -> Self {
        Self::new(enter, None)
    }

    #[must_use]
    pub fn enter(&self) -> Duration {
        self.enter
    }

    #[must_use]
    pub fn exit(&self) -> Option<Duration> {
        self.exit
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(
            TransitionDuration::new(DEFAULT_ENTER_MS),
            Some(TransitionDuration::new(DEFAULT_EXIT_MS)),
        )
    }
}

/// Where a rendered toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Mounting,
    Active,
    Dismissing,
}

/// Content ready for the view layer.
pub enum Resolved<'a> {
    /// Value content, shown in the default toast card.
    Text(&'a str),
    /// Output of a content factory.
    Element(Element<'static, Message>),
}

/// A toast as the view layer sees it.
pub struct Rendered<D> {
    toast: Rc<Toast<D>>,
    phase: Phase,
    since: Instant,
    timer: TimerController,
}

impl<D> Rendered<D> {
    fn mount(toast: Rc<Toast<D>>, transition: &Transition, now: Instant) -> Self {
        Self {
            timer: TimerController::new(toast.duration(), now),
            toast,
            phase: entry_phase(transition),
            since: now,
        }
    }

    /// Brings a dismissing instance back for a record that reuses its id.
    fn remount(&mut self, toast: Rc<Toast<D>>, transition: &Transition, now: Instant) {
        self.timer = TimerController::new(toast.duration(), now);
        self.toast = toast;
        self.phase = entry_phase(transition);
        self.since = now;
    }

    #[must_use]
    pub fn toast(&self) -> &Toast<D> {
        &self.toast
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        self.toast.id()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the pointer currently holds the countdown.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    #[must_use]
    pub fn timer(&self) -> &TimerController {
        &self.timer
    }

    /// Arguments handed to a content factory.
    #[must_use]
    pub fn context(&self) -> ToastContext<'_, D> {
        ToastContext {
            id: self.toast.id(),
            data: self.toast.data(),
            placement: self.toast.placement(),
            on_close: Message::Close {
                id: self.toast.id().clone(),
                placement: self.toast.placement(),
            },
        }
    }

    /// Resolves value-or-factory content.
    #[must_use]
    pub fn resolve(&self) -> Resolved<'_> {
        match self.toast.content() {
            Content::Value(text) => Resolved::Text(text),
            Content::Factory(factory) => Resolved::Element(factory(&self.context())),
        }
    }

    /// Transition progress in `[0, 1]`: rising while mounting, falling while
    /// dismissing.
    #[must_use]
    pub fn visibility(&self, transition: &Transition, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.since);
        match self.phase {
            Phase::Mounting => ratio(elapsed, transition.enter),
            Phase::Active => 1.0,
            Phase::Dismissing => match transition.exit {
                Some(exit) => 1.0 - ratio(elapsed, exit),
                None => 1.0,
            },
        }
    }

    fn dismiss(&mut self, now: Instant) {
        if self.phase != Phase::Dismissing {
            self.phase = Phase::Dismissing;
            self.since = now;
            self.timer.cancel();
        }
    }
}

fn entry_phase(transition: &Transition) -> Phase {
    if transition.enter.is_zero() {
        Phase::Active
    } else {
        Phase::Mounting
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Something the bridge reports back to the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// A countdown elapsed; the toast should be closed.
    Expired { id: ToastId, placement: Placement },
    /// Exit finished; the rendered instance and its timer are gone.
    Unmounted { id: ToastId, placement: Placement },
}

pub struct RenderBridge<D> {
    zones: [Vec<Rendered<D>>; 6],
    transition: Transition,
    revision: Option<u64>,
}

impl<D> RenderBridge<D> {
    #[must_use]
    pub fn new(transition: Transition) -> Self {
        Self {
            zones: std::array::from_fn(|_| Vec::new()),
            transition,
            revision: None,
        }
    }

    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Rendered toasts of one zone, in display order.
    #[must_use]
    pub fn zone(&self, placement: Placement) -> &[Rendered<D>] {
        &self.zones[placement.index()]
    }

    /// Zones in [`Placement::ALL`] order.
    pub fn zones(&self) -> impl Iterator<Item = (Placement, &[Rendered<D>])> {
        Placement::ALL
            .into_iter()
            .map(move |placement| (placement, self.zone(placement)))
    }

    /// The live (not dismissing) instance for `id`, else a dismissing one.
    #[must_use]
    pub fn find(&self, id: &ToastId) -> Option<&Rendered<D>> {
        let mut all = self.zones.iter().flatten().filter(|r| r.id() == id);
        let first = all.next()?;
        if first.phase != Phase::Dismissing {
            return Some(first);
        }
        Some(all.find(|r| r.phase != Phase::Dismissing).unwrap_or(first))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.iter().all(Vec::is_empty)
    }

    /// Whether ticking would change anything.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.zones.iter().flatten().all(|rendered| match rendered.phase {
            Phase::Mounting => false,
            Phase::Active => !rendered.timer.is_armed(),
            Phase::Dismissing => self.transition.exit.is_none(),
        })
    }

    /// Reconciles rendered toasts with a store snapshot.
    ///
    /// Snapshots older than or equal to the last one applied are ignored
    /// and `false` is returned.
    pub fn sync(&mut self, snapshot: &ZoneSnapshot<D>, now: Instant) -> bool {
        if self
            .revision
            .is_some_and(|applied| snapshot.revision() <= applied)
        {
            return false;
        }
        self.revision = Some(snapshot.revision());

        let transition = self.transition;
        for (placement, records) in snapshot.iter() {
            let previous = std::mem::take(&mut self.zones[placement.index()]);
            self.zones[placement.index()] = reconcile(previous, records, &transition, now);
        }
        true
    }

    /// Advances transitions and timers to `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<BridgeEvent> {
        let mut events = Vec::new();
        let transition = self.transition;

        for (placement, zone) in Placement::ALL.into_iter().zip(self.zones.iter_mut()) {
            if let Some(exit) = transition.exit {
                zone.retain(|rendered| {
                    let done = rendered.phase == Phase::Dismissing
                        && now.saturating_duration_since(rendered.since) >= exit;
                    if done {
                        events.push(BridgeEvent::Unmounted {
                            id: rendered.id().clone(),
                            placement,
                        });
                    }
                    !done
                });
            }

            for rendered in zone.iter_mut() {
                if rendered.phase == Phase::Mounting
                    && now.saturating_duration_since(rendered.since) >= transition.enter
                {
                    rendered.phase = Phase::Active;
                    rendered.since = now;
                }
                if rendered.phase != Phase::Dismissing && rendered.timer.poll(now) {
                    events.push(BridgeEvent::Expired {
                        id: rendered.id().clone(),
                        placement,
                    });
                }
            }
        }
        events
    }

    /// Pointer entered a toast: hold its countdown.
    pub fn pointer_entered(&mut self, id: &ToastId) -> bool {
        match self.live_mut(id) {
            Some(rendered) => {
                rendered.timer.pause();
                true
            }
            None => false,
        }
    }

    /// Pointer left a toast: restart its countdown from the full duration.
    pub fn pointer_left(&mut self, id: &ToastId, now: Instant) -> bool {
        match self.live_mut(id) {
            Some(rendered) => {
                rendered.timer.resume(now);
                true
            }
            None => false,
        }
    }

    /// Exit transition of a dismissing toast has finished; purge it.
    ///
    /// Live toasts are never purged here.
    pub fn exit_complete(&mut self, id: &ToastId, placement: Option<Placement>) -> Option<BridgeEvent> {
        let placements: Vec<Placement> = match placement {
            Some(placement) => vec![placement],
            None => Placement::ALL.to_vec(),
        };
        for placement in placements {
            let zone = &mut self.zones[placement.index()];
            if let Some(index) = zone
                .iter()
                .position(|r| r.id() == id && r.phase == Phase::Dismissing)
            {
                let mut rendered = zone.remove(index);
                rendered.timer.cancel();
                return Some(BridgeEvent::Unmounted {
                    id: id.clone(),
                    placement,
                });
            }
        }
        None
    }

    /// Transition progress of the toast with `id`, see [`Rendered::visibility`].
    #[must_use]
    pub fn visibility(&self, id: &ToastId, now: Instant) -> Option<f32> {
        self.find(id)
            .map(|rendered| rendered.visibility(&self.transition, now))
    }

    fn live_mut(&mut self, id: &ToastId) -> Option<&mut Rendered<D>> {
        self.zones
            .iter_mut()
            .flatten()
            .find(|r| r.id() == id && r.phase != Phase::Dismissing)
    }
}

/// Merges the previous rendered order of a zone with its new records.
///
/// Live toasts follow the snapshot order. Toasts that left the zone stay in
/// front of the live sibling they preceded, or at the end if none followed.
fn reconcile<D>(
    previous: Vec<Rendered<D>>,
    records: &[Rc<Toast<D>>],
    transition: &Transition,
    now: Instant,
) -> Vec<Rendered<D>> {
    let live: HashSet<&ToastId> = records.iter().map(|toast| toast.id()).collect();

    let mut existing: HashMap<ToastId, Rendered<D>> = HashMap::new();
    let mut leaving_before: HashMap<ToastId, Vec<Rendered<D>>> = HashMap::new();
    let mut pending: Vec<Rendered<D>> = Vec::new();

    for mut rendered in previous {
        if live.contains(rendered.id()) {
            leaving_before.insert(rendered.id().clone(), std::mem::take(&mut pending));
            existing.insert(rendered.id().clone(), rendered);
        } else {
            rendered.dismiss(now);
            pending.push(rendered);
        }
    }

    let mut next = Vec::with_capacity(records.len() + pending.len());
    for toast in records {
        if let Some(leaving) = leaving_before.remove(toast.id()) {
            next.extend(leaving);
        }
        let rendered = match existing.remove(toast.id()) {
            Some(mut rendered) if rendered.phase == Phase::Dismissing => {
                rendered.remount(Rc::clone(toast), transition, now);
                rendered
            }
            Some(mut rendered) => {
                rendered.timer.set_duration(toast.duration());
                rendered.toast = Rc::clone(toast);
                rendered
            }
            None => Rendered::mount(Rc::clone(toast), transition, now),
        };
        next.push(rendered);
    }
    next.extend(pending);
    next
}
