use std::collections::BTreeSet;

use super::{DirectionlessModule, FiberId, SlotId};

/// The resources carrying a lightpath's waste signal: fibers the light
/// unintentionally propagates to, plus the directionless modules that
/// receive it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WasteResources {
    pub fibers: BTreeSet<FiberId>,
    pub add_modules: Vec<DirectionlessModule>,
    pub drop_modules: Vec<DirectionlessModule>,
}

/// A one-directional optical circuit with a fixed fiber sequence and slot
/// set.
#[derive(Debug, Clone)]
pub struct Lightpath {
    seq_fibers: Vec<FiberId>,
    slot_ids: BTreeSet<SlotId>,

    /// Index of the directionless add module used at the origin node, if
    /// the lightpath is added through one.
    add_module_index: Option<usize>,

    /// Index of the directionless drop module used at the destination node,
    /// if the lightpath is dropped through one.
    drop_module_index: Option<usize>,

    waste: WasteResources,
}

impl Lightpath {
    pub(crate) fn new(seq_fibers: Vec<FiberId>, slot_ids: BTreeSet<SlotId>, add_module_index: Option<usize>, drop_module_index: Option<usize>) -> Self {
        Self { seq_fibers, slot_ids, add_module_index, drop_module_index, waste: WasteResources::default() }
    }

    pub(crate) fn set_waste_resources(&mut self, waste: WasteResources) {
        self.waste = waste;
    }

    /// The legitimate path: the sequence of fibers the lightpath was routed
    /// over.
    pub fn seq_fibers(&self) -> &[FiberId] {
        &self.seq_fibers
    }

    pub fn optical_slot_ids(&self) -> &BTreeSet<SlotId> {
        &self.slot_ids
    }

    pub fn directionless_add_module_index_in_origin(&self) -> Option<usize> {
        self.add_module_index
    }

    pub fn directionless_drop_module_index_in_destination(&self) -> Option<usize> {
        self.drop_module_index
    }

    /// The triple of resources occupied by this lightpath's waste signal.
    pub fn resources_with_waste_signal(&self) -> &WasteResources {
        &self.waste
    }
}
