use std::collections::BTreeSet;

use super::{FiberId, NodeId, SlotId};

/// A unidirectional optical fiber between two nodes.
#[derive(Debug, Clone)]
pub struct Fiber {
    origin: NodeId,
    destination: NodeId,
    length_km: f64,

    /// Inclusive `(first, last)` ranges of optical slot ids this fiber can
    /// carry.
    valid_slot_ranges: Vec<(SlotId, SlotId)>,

    /// The opposite fiber of a bidirectional pair, if this fiber has one.
    bidirectional_pair: Option<FiberId>,
}

impl Fiber {
    pub(crate) fn new(origin: NodeId, destination: NodeId, length_km: f64, valid_slot_ranges: Vec<(SlotId, SlotId)>) -> Self {
        Self { origin, destination, length_km, valid_slot_ranges, bidirectional_pair: None }
    }

    pub(crate) fn set_bidirectional_pair(&mut self, pair: FiberId) {
        self.bidirectional_pair = Some(pair);
    }

    /// The A end of the fiber.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// The B end of the fiber.
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn length_km(&self) -> f64 {
        self.length_km
    }

    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional_pair.is_some()
    }

    pub fn bidirectional_pair(&self) -> Option<FiberId> {
        self.bidirectional_pair
    }

    pub fn valid_slot_ranges(&self) -> &[(SlotId, SlotId)] {
        &self.valid_slot_ranges
    }

    /// All optical slot ids this fiber can carry, in ascending order.
    pub fn valid_slot_ids(&self) -> BTreeSet<SlotId> {
        let mut res = BTreeSet::new();
        for &(first, last) in &self.valid_slot_ranges {
            res.extend(first..=last);
        }
        res
    }

    pub fn is_valid_slot(&self, slot: SlotId) -> bool {
        self.valid_slot_ranges.iter().any(|&(first, last)| first <= slot && slot <= last)
    }

    /// Minimum and maximum valid slot id, or `None` when the fiber has no
    /// valid slots at all.
    pub fn min_max_valid_slot_id(&self) -> Option<(SlotId, SlotId)> {
        let min = self.valid_slot_ranges.iter().map(|&(first, _)| first).min()?;
        let max = self.valid_slot_ranges.iter().map(|&(_, last)| last).max()?;
        Some((min, max))
    }
}
