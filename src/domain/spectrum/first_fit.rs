use std::collections::BTreeSet;

use crate::domain::network::{DirectionlessModule, FiberId, NodeId, SlotId};
use crate::domain::spectrum::manager::OpticalSpectrumManager;
use crate::error::{Error, Result};

/// First-fit spectrum assignment algorithms.
///
/// All of them return `Ok(None)` when no assignment exists, which is a
/// normal outcome and not an error. A path that traverses the same fiber
/// twice also yields `Ok(None)`: no assignment is possible there.
impl OpticalSpectrumManager<'_> {
    /// Searches for a first-fit assignment over a single path.
    ///
    /// Given the fibers to occupy, the optional add and drop directionless
    /// modules, the number of contiguous slots needed and optionally a
    /// minimum initial slot id, returns the lowest-id contiguous range of
    /// slots available in all of them.
    pub fn spectrum_assignment_first_fit(
        &self,
        seq_fibers: &[FiberId],
        add_module: Option<DirectionlessModule>,
        drop_module: Option<DirectionlessModule>,
        num_contiguous_slots: usize,
        minimum_initial_slot: Option<SlotId>,
    ) -> Result<Option<BTreeSet<SlotId>>> {
        debug_assert!(num_contiguous_slots > 0);
        if has_duplicate_fibers(seq_fibers) {
            return Ok(None);
        }
        let mut valid = self.available_slot_ids(seq_fibers, add_module, drop_module)?;
        if let Some(minimum) = minimum_initial_slot {
            valid = valid.split_off(&minimum);
        }
        if valid.len() < num_contiguous_slots {
            return Ok(None);
        }
        let mut range: Vec<SlotId> = Vec::with_capacity(num_contiguous_slots);
        for &slot in &valid {
            if let Some(&last) = range.last() {
                if last != slot - 1 {
                    range.clear();
                }
            }
            range.push(slot);
            if range.len() == num_contiguous_slots {
                return Ok(Some(range.into_iter().collect()));
            }
        }
        Ok(None)
    }

    /// Searches for a first-fit assignment for two paths at once, so the
    /// optical slots can be different for each.
    ///
    /// When the two paths share no fiber, each one gets its own independent
    /// first fit. When they do share fibers, the two returned ranges are
    /// guaranteed disjoint, and the returned pair is the first in ascending
    /// (initial slot 1, initial slot 2) order among all the feasible pairs.
    pub fn spectrum_assignment_first_fit_two_routes(
        &self,
        seq_fibers_1: &[FiberId],
        seq_fibers_2: &[FiberId],
        add_module_1: Option<DirectionlessModule>,
        drop_module_1: Option<DirectionlessModule>,
        add_module_2: Option<DirectionlessModule>,
        drop_module_2: Option<DirectionlessModule>,
        num_contiguous_slots: usize,
    ) -> Result<Option<(BTreeSet<SlotId>, BTreeSet<SlotId>)>> {
        debug_assert!(num_contiguous_slots > 0);
        for &fiber in seq_fibers_1.iter().chain(seq_fibers_2) {
            self.check_fiber(fiber)?;
        }
        if has_duplicate_fibers(seq_fibers_1) || has_duplicate_fibers(seq_fibers_2) {
            return Ok(None);
        }
        let fibers_1: BTreeSet<FiberId> = seq_fibers_1.iter().copied().collect();
        let have_links_in_common = seq_fibers_2.iter().any(|fiber| fibers_1.contains(fiber));

        if !have_links_in_common {
            let first = match self.spectrum_assignment_first_fit(seq_fibers_1, add_module_1, drop_module_1, num_contiguous_slots, None)? {
                Some(range) => range,
                None => return Ok(None),
            };
            let second = match self.spectrum_assignment_first_fit(seq_fibers_2, add_module_2, drop_module_2, num_contiguous_slots, None)? {
                Some(range) => range,
                None => return Ok(None),
            };
            return Ok(Some((first, second)));
        }

        // With links in common the ranges must not overlap anywhere, so
        // brute-force the first feasible pair of initial slots.
        let valid_1 = self.available_slot_ids(seq_fibers_1, add_module_1, drop_module_1)?;
        let valid_2 = self.available_slot_ids(seq_fibers_2, add_module_2, drop_module_2)?;
        for &initial_1 in &valid_1 {
            if !is_contiguous_range_within(&valid_1, initial_1, num_contiguous_slots) {
                continue;
            }
            for &initial_2 in &valid_2 {
                if (initial_1 - initial_2).abs() < num_contiguous_slots as SlotId {
                    continue;
                }
                if !is_contiguous_range_within(&valid_2, initial_2, num_contiguous_slots) {
                    continue;
                }
                let range_1: BTreeSet<SlotId> = (initial_1..initial_1 + num_contiguous_slots as SlotId).collect();
                let range_2: BTreeSet<SlotId> = (initial_2..initial_2 + num_contiguous_slots as SlotId).collect();
                return Ok(Some((range_1, range_2)));
            }
        }
        Ok(None)
    }

    /// Searches for a first-fit assignment over a sequence of bidirectional
    /// adjacencies, choosing one fiber pair per hop.
    ///
    /// For each hop (a, b), every fiber from `a` to `b` together with its
    /// bidirectional pair is an option. The same contiguous slot range must
    /// be idle in both directions of the chosen pair of every hop, must not
    /// use any slot in `unusable_slots`, and must be idle in the four
    /// optional directionless modules. Returns the chosen pair per hop and
    /// the assigned slot range.
    pub fn spectrum_assignment_first_fit_for_adjacencies_bidi(
        &self,
        seq_adjacencies: &[(NodeId, NodeId)],
        add_module_ab: Option<DirectionlessModule>,
        drop_module_ab: Option<DirectionlessModule>,
        add_module_ba: Option<DirectionlessModule>,
        drop_module_ba: Option<DirectionlessModule>,
        num_contiguous_slots: usize,
        unusable_slots: &BTreeSet<SlotId>,
    ) -> Result<Option<(Vec<(FiberId, FiberId)>, BTreeSet<SlotId>)>> {
        debug_assert!(num_contiguous_slots > 0);

        let mut per_hop_candidates: Vec<BTreeSet<SlotId>> = Vec::with_capacity(seq_adjacencies.len());
        let mut per_hop_pairs: Vec<Vec<(FiberId, FiberId)>> = Vec::with_capacity(seq_adjacencies.len());
        let mut seen_fibers: BTreeSet<FiberId> = BTreeSet::new();

        for &(a, b) in seq_adjacencies {
            self.check_node(a)?;
            self.check_node(b)?;
            let fibers_ab = self.network().node_pair_fibers(a, b);
            let fibers_ba = self.network().node_pair_fibers(b, a);
            for &fiber in fibers_ab.iter().chain(fibers_ba.iter()) {
                if !self.check_fiber(fiber)?.is_bidirectional() {
                    return Err(Error::RequiresBidirectional);
                }
            }
            let mut pairs = Vec::new();
            let mut hop_candidates = BTreeSet::new();
            for &ab in &fibers_ab {
                let ba = self.check_fiber(ab)?.bidirectional_pair().expect("all fibers checked bidirectional above");
                if seen_fibers.contains(&ab) || seen_fibers.contains(&ba) {
                    return Err(Error::DuplicateFiberOption);
                }
                seen_fibers.insert(ab);
                seen_fibers.insert(ba);
                pairs.push((ab, ba));
                let options_ab = self.idle_range_initial_slots(ab, num_contiguous_slots)?;
                let options_ba = self.idle_range_initial_slots(ba, num_contiguous_slots)?;
                for &slot in options_ab.intersection(&options_ba) {
                    if !unusable_slots.contains(&slot) {
                        hop_candidates.insert(slot);
                    }
                }
            }
            per_hop_candidates.push(hop_candidates);
            per_hop_pairs.push(pairs);
        }

        let mut candidates: Option<BTreeSet<SlotId>> = None;
        for hop_candidates in &per_hop_candidates {
            candidates = Some(match candidates {
                Some(acc) => acc.intersection(hop_candidates).copied().collect(),
                None => hop_candidates.clone(),
            });
        }
        let candidates = match candidates {
            Some(candidates) => candidates,
            None => return Ok(None),
        };

        'candidate: for &initial in &candidates {
            let range: BTreeSet<SlotId> = (initial..initial + num_contiguous_slots as SlotId).collect();
            for module in [add_module_ab, add_module_ba].iter().flatten() {
                if !self.is_slot_ids_idle_in_add_module(module.node, module.index, &range)? {
                    continue 'candidate;
                }
            }
            for module in [drop_module_ab, drop_module_ba].iter().flatten() {
                if !self.is_slot_ids_idle_in_drop_module(module.node, module.index, &range)? {
                    continue 'candidate;
                }
            }
            let mut chosen: Vec<(FiberId, FiberId)> = Vec::with_capacity(seq_adjacencies.len());
            for pairs in &per_hop_pairs {
                for &(ab, ba) in pairs {
                    if self.is_slot_ids_valid_and_idle(ab, &range)? && self.is_slot_ids_valid_and_idle(ba, &range)? {
                        chosen.push((ab, ba));
                        break;
                    }
                }
            }
            debug_assert_eq!(chosen.len(), seq_adjacencies.len());
            return Ok(Some((chosen, range)));
        }
        Ok(None)
    }
}

fn has_duplicate_fibers(seq_fibers: &[FiberId]) -> bool {
    let unique: BTreeSet<FiberId> = seq_fibers.iter().copied().collect();
    unique.len() != seq_fibers.len()
}

fn is_contiguous_range_within(valid: &BTreeSet<SlotId>, initial: SlotId, num_contiguous_slots: usize) -> bool {
    (0..num_contiguous_slots as SlotId).all(|offset| valid.contains(&(initial + offset)))
}
