use std::collections::{BTreeMap, BTreeSet};

use crate::domain::network::{LightpathId, SlotId};

/// A bidirectional occupation index between resources of type `E` and
/// lightpaths, per optical slot id.
///
/// The forward map answers "who occupies slot s of this resource", the
/// inverse map answers "which slots of which resources does this lightpath
/// occupy" so a release never has to scan every resource.
///
/// The index does **not** fail on clashes: allocating two lightpaths on the
/// same slot of the same resource is faithfully recorded, and detecting it
/// is the caller's job (see `OpticalSpectrumManager::is_spectrum_occupation_ok`).
///
/// Both maps keep ascending slot-id order, which first-fit scans rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotIndex<E: Ord + Copy> {
    /// resource -> slot id -> lightpaths occupying that slot
    forward: BTreeMap<E, BTreeMap<SlotId, BTreeSet<LightpathId>>>,

    /// lightpath -> resource -> slot ids occupied there
    inverse: BTreeMap<LightpathId, BTreeMap<E, BTreeSet<SlotId>>>,
}

impl<E: Ord + Copy> SlotIndex<E> {
    pub fn new() -> Self {
        Self { forward: BTreeMap::new(), inverse: BTreeMap::new() }
    }

    pub fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.inverse.is_empty()
    }

    /// Records that `lp` occupies `slot_ids` on `element`. A no-op when
    /// `slot_ids` is empty.
    pub fn allocate(&mut self, element: E, lp: LightpathId, slot_ids: &BTreeSet<SlotId>) {
        if slot_ids.is_empty() {
            return;
        }
        let per_slot = self.forward.entry(element).or_default();
        for &slot in slot_ids {
            per_slot.entry(slot).or_default().insert(lp);
        }
        self.inverse.entry(lp).or_default().entry(element).or_default().extend(slot_ids.iter().copied());
    }

    /// Removes every occupation of `lp`, pruning slot and resource entries
    /// that become empty. A no-op when `lp` has no occupation recorded.
    pub fn release(&mut self, lp: LightpathId) {
        let occupied = match self.inverse.remove(&lp) {
            Some(occupied) => occupied,
            None => return,
        };
        for (element, slot_ids) in occupied {
            let per_slot = match self.forward.get_mut(&element) {
                Some(per_slot) => per_slot,
                None => continue,
            };
            for slot in slot_ids {
                if let Some(lps) = per_slot.get_mut(&slot) {
                    lps.remove(&lp);
                    if lps.is_empty() {
                        per_slot.remove(&slot);
                    }
                }
            }
            if per_slot.is_empty() {
                self.forward.remove(&element);
            }
        }
    }

    /// The per-slot occupation of `element`, empty if the element has none.
    pub fn occupied_slots(&self, element: E) -> BTreeMap<SlotId, BTreeSet<LightpathId>> {
        self.forward.get(&element).cloned().unwrap_or_default()
    }

    /// The set of occupied slot ids of `element`.
    pub fn occupied_slot_ids(&self, element: E) -> BTreeSet<SlotId> {
        match self.forward.get(&element) {
            Some(per_slot) => per_slot.keys().copied().collect(),
            None => BTreeSet::new(),
        }
    }

    pub fn number_of_occupied_slot_ids(&self, element: E) -> usize {
        self.forward.get(&element).map_or(0, |per_slot| per_slot.len())
    }

    pub fn elements_with_any_occupation(&self) -> BTreeSet<E> {
        self.forward.keys().copied().collect()
    }

    /// The resources where `lp` has occupation recorded.
    pub fn occupied_elements_of(&self, lp: LightpathId) -> BTreeSet<E> {
        match self.inverse.get(&lp) {
            Some(per_element) => per_element.keys().copied().collect(),
            None => BTreeSet::new(),
        }
    }

    /// The per-resource slot sets of `lp`, empty if it has no occupation
    /// recorded.
    pub fn occupied_slots_of(&self, lp: LightpathId) -> BTreeMap<E, BTreeSet<SlotId>> {
        self.inverse.get(&lp).cloned().unwrap_or_default()
    }

    /// The lightpaths with any occupation recorded.
    pub fn lightpaths_with_any_occupation(&self) -> BTreeSet<LightpathId> {
        self.inverse.keys().copied().collect()
    }

    /// Read-only view of the full forward map.
    pub fn full_map(&self) -> &BTreeMap<E, BTreeMap<SlotId, BTreeSet<LightpathId>>> {
        &self.forward
    }
}

impl<E: Ord + Copy> Default for SlotIndex<E> {
    fn default() -> Self {
        Self::new()
    }
}
