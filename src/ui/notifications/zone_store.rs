// SPDX-License-Identifier: MPL-2.0
//! Per-zone ordered storage of live toasts.
//!
//! Invariants:
//! - a toast lives in the sequence keyed by its own placement;
//! - an id appears at most once across all zones.
//!
//! Every effective mutation bumps the revision, so snapshots taken after
//! successive changes are strictly ordered.

use super::notification::{Toast, ToastId};
use super::placement::Placement;
use std::rc::Rc;

type Zones<D> = [Vec<Rc<Toast<D>>>; 6];

fn empty_zones<D>() -> Zones<D> {
    std::array::from_fn(|_| Vec::new())
}

#[derive(Debug)]
pub struct ZoneStore<D> {
    zones: Zones<D>,
    revision: u64,
}

impl<D> Default for ZoneStore<D> {
    fn default() -> Self {
        Self {
            zones: empty_zones(),
            revision: 0,
        }
    }
}

impl<D> ZoneStore<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn zone(&self, placement: Placement) -> &[Rc<Toast<D>>] {
        &self.zones[placement.index()]
    }

    /// Zone and index of the toast holding `id`.
    #[must_use]
    pub fn position(&self, id: &ToastId) -> Option<(Placement, usize)> {
        Placement::ALL.into_iter().find_map(|placement| {
            self.zone(placement)
                .iter()
                .position(|toast| toast.id() == id)
                .map(|index| (placement, index))
        })
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.iter().all(Vec::is_empty)
    }

    /// Adds a toast to its zone: prepended in top zones, appended elsewhere.
    ///
    /// Returns the toast back if its id is already taken.
    pub fn insert(&mut self, toast: Toast<D>) -> Result<(), Toast<D>> {
        if self.contains(toast.id()) {
            return Err(toast);
        }
        let placement = toast.placement();
        let zone = &mut self.zones[placement.index()];
        if placement.is_top() {
            zone.insert(0, Rc::new(toast));
        } else {
            zone.push(Rc::new(toast));
        }
        self.bump();
        Ok(())
    }

    /// Removes the toast with `id` from `placement`, or from whichever zone
    /// holds it when no placement is given.
    pub fn remove(&mut self, id: &ToastId, placement: Option<Placement>) -> Option<Rc<Toast<D>>> {
        let placement = match placement {
            Some(placement) => placement,
            None => self.position(id)?.0,
        };
        let zone = &mut self.zones[placement.index()];
        let index = zone.iter().position(|toast| toast.id() == id)?;
        let removed = zone.remove(index);
        self.bump();
        Some(removed)
    }

    /// Empties one zone, returning what it held.
    pub fn clear(&mut self, placement: Placement) -> Vec<Rc<Toast<D>>> {
        let removed = std::mem::take(&mut self.zones[placement.index()]);
        if !removed.is_empty() {
            self.bump();
        }
        removed
    }

    /// Swaps the toast at `index` of `placement` for `toast`.
    ///
    /// A toast whose placement differs is moved to its own zone following
    /// the insertion policy.
    pub(crate) fn replace(&mut self, placement: Placement, index: usize, toast: Toast<D>) {
        if toast.placement() == placement {
            self.zones[placement.index()][index] = Rc::new(toast);
            self.bump();
        } else {
            self.zones[placement.index()].remove(index);
            let target = toast.placement();
            let zone = &mut self.zones[target.index()];
            if target.is_top() {
                zone.insert(0, Rc::new(toast));
            } else {
                zone.push(Rc::new(toast));
            }
            self.bump();
        }
    }

    /// Keeps only the `max` most recent toasts of a zone.
    pub fn truncate(&mut self, placement: Placement, max: usize) -> Vec<Rc<Toast<D>>> {
        let zone = &mut self.zones[placement.index()];
        if zone.len() <= max {
            return Vec::new();
        }
        let removed = if placement.is_top() {
            zone.split_off(max)
        } else {
            let excess = zone.len() - max;
            zone.drain(..excess).collect()
        };
        self.bump();
        removed
    }

    #[must_use]
    pub fn snapshot(&self) -> ZoneSnapshot<D> {
        ZoneSnapshot {
            revision: self.revision,
            zones: self.zones.clone(),
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

/// Immutable copy of every zone at one revision.
#[derive(Debug)]
pub struct ZoneSnapshot<D> {
    revision: u64,
    zones: Zones<D>,
}

impl<D> Clone for ZoneSnapshot<D> {
    fn clone(&self) -> Self {
        Self {
            revision: self.revision,
            zones: self.zones.clone(),
        }
    }
}

impl<D> ZoneSnapshot<D> {
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn zone(&self, placement: Placement) -> &[Rc<Toast<D>>] {
        &self.zones[placement.index()]
    }

    /// Zones in [`Placement::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Placement, &[Rc<Toast<D>>])> {
        Placement::ALL
            .into_iter()
            .map(move |placement| (placement, self.zone(placement)))
    }
}
