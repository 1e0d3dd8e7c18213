use std::collections::BTreeSet;

use crate::domain::network::{DirectionlessModule, FiberId, SlotId};

/// The per-lightpath memo of its legitimate-signal placement, kept by the
/// spectrum manager for as long as the lightpath is allocated.
///
/// Waste-signal resources are not cached here. They are derived on demand
/// from the manager's waste indices, see
/// `OpticalSpectrumManager::fibers_with_waste_signal` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightpathOccupationRecord {
    legitimate_seq_fibers: Vec<FiberId>,
    legitimate_add_module: Option<DirectionlessModule>,
    legitimate_drop_module: Option<DirectionlessModule>,
    occupied_slots: BTreeSet<SlotId>,
}

impl LightpathOccupationRecord {
    pub(crate) fn new(
        legitimate_seq_fibers: Vec<FiberId>,
        legitimate_add_module: Option<DirectionlessModule>,
        legitimate_drop_module: Option<DirectionlessModule>,
        occupied_slots: BTreeSet<SlotId>,
    ) -> Self {
        Self { legitimate_seq_fibers, legitimate_add_module, legitimate_drop_module, occupied_slots }
    }

    /// The fibers traversed by the legitimate signal, in path order.
    pub fn seq_fibers_legitimate_signal(&self) -> &[FiberId] {
        &self.legitimate_seq_fibers
    }

    pub fn directionless_add_module_legitimate_signal(&self) -> Option<DirectionlessModule> {
        self.legitimate_add_module
    }

    pub fn directionless_drop_module_legitimate_signal(&self) -> Option<DirectionlessModule> {
        self.legitimate_drop_module
    }

    pub fn occupied_slots(&self) -> &BTreeSet<SlotId> {
        &self.occupied_slots
    }

    /// True when the legitimate path traverses the same fiber more than
    /// once.
    pub fn is_with_fiber_cycles_in_legitimate_signal(&self) -> bool {
        let unique: BTreeSet<FiberId> = self.legitimate_seq_fibers.iter().copied().collect();
        unique.len() != self.legitimate_seq_fibers.len()
    }
}
