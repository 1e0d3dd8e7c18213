use std::collections::{BTreeMap, BTreeSet};

use crate::domain::network::{DirectionlessModule, Fiber, FiberId, Lightpath, LightpathId, Network, NodeId, SlotId};
use crate::domain::spectrum::occupation::LightpathOccupationRecord;
use crate::domain::spectrum::slot_index::SlotIndex;
use crate::error::{Error, Result};

/// Whether an occupation is caused by the intended signal of a lightpath or
/// by the unintended waste signal a filterless architecture leaks onto
/// other resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpticalSignalOccupation {
    Legitimate,
    Waste,
}

impl OpticalSignalOccupation {
    pub fn is_legitimate(self) -> bool {
        matches!(self, OpticalSignalOccupation::Legitimate)
    }

    pub fn is_waste(self) -> bool {
        matches!(self, OpticalSignalOccupation::Waste)
    }
}

/// Accounts for the occupation of the optical spectrum in a WDM network.
///
/// The manager is created over an existing network. To make a valid optical
/// design, the user is responsible for checking through this object that
/// the routing and spectrum assignments of new lightpaths are valid. It
/// also offers simple RSA recommendations in the form of first-fit
/// assignments (see the `first_fit` module for those operations).
///
/// Occupation is kept in six independent indices (signal kind x resource
/// kind) plus a per-lightpath record of the legitimate placement. Indices
/// never self-validate on mutation: clashes are recorded as-is and global
/// validity is an explicit predicate, so callers can assemble a design in
/// any order.
pub struct OpticalSpectrumManager<'net> {
    net: &'net Network,

    legitimate_fiber_occupation: SlotIndex<FiberId>,
    legitimate_add_occupation: SlotIndex<DirectionlessModule>,
    legitimate_drop_occupation: SlotIndex<DirectionlessModule>,
    waste_fiber_occupation: SlotIndex<FiberId>,
    waste_add_occupation: SlotIndex<DirectionlessModule>,
    waste_drop_occupation: SlotIndex<DirectionlessModule>,

    records: BTreeMap<LightpathId, LightpathOccupationRecord>,
}

impl<'net> OpticalSpectrumManager<'net> {
    /// Creates an empty manager associated to `net`.
    pub fn new(net: &'net Network) -> Self {
        Self {
            net,
            legitimate_fiber_occupation: SlotIndex::new(),
            legitimate_add_occupation: SlotIndex::new(),
            legitimate_drop_occupation: SlotIndex::new(),
            waste_fiber_occupation: SlotIndex::new(),
            waste_add_occupation: SlotIndex::new(),
            waste_drop_occupation: SlotIndex::new(),
            records: BTreeMap::new(),
        }
    }

    /// Creates a manager and fills it from the occupation of every
    /// lightpath currently in `net`.
    pub fn from_lightpaths(net: &'net Network) -> Result<Self> {
        let mut manager = Self::new(net);
        manager.reset_from_lightpaths()?;
        Ok(manager)
    }

    pub fn network(&self) -> &'net Network {
        self.net
    }

    /// Clears all six indices and re-allocates the legitimate and waste
    /// occupation of every lightpath in the network.
    pub fn reset_from_lightpaths(&mut self) -> Result<()> {
        self.legitimate_fiber_occupation.clear();
        self.legitimate_add_occupation.clear();
        self.legitimate_drop_occupation.clear();
        self.waste_fiber_occupation.clear();
        self.waste_add_occupation.clear();
        self.waste_drop_occupation.clear();
        self.records.clear();

        let lightpaths: Vec<LightpathId> = self.net.lightpaths().map(|(id, _)| id).collect();
        for lp in lightpaths {
            let (origin, destination) = match self.net.lightpath_endpoints(lp) {
                Some(endpoints) => endpoints,
                None => return Err(Error::ModelConstructionError(format!("lightpath {:?} has no endpoints", lp))),
            };
            let lightpath = self.check_lightpath(lp)?;
            let add_module = lightpath.directionless_add_module_index_in_origin().map(|index| DirectionlessModule::new(origin, index));
            let drop_module = lightpath.directionless_drop_module_index_in_destination().map(|index| DirectionlessModule::new(destination, index));
            let seq_fibers = lightpath.seq_fibers().to_vec();
            let slot_ids = lightpath.optical_slot_ids().clone();
            let waste = lightpath.resources_with_waste_signal().clone();

            self.allocate_legitimate(lp, add_module, drop_module, &seq_fibers, &slot_ids)?;
            self.allocate_waste(lp, &waste.add_modules, &waste.drop_modules, &waste.fibers, &slot_ids)?;
        }
        Ok(())
    }

    //---------------------------------
    // --- Allocation and release ---
    //---------------------------------

    /// Accounts for the legitimate-signal occupation of a lightpath: its
    /// traversed fibers plus the optional add and drop directionless
    /// modules. A no-op when `slot_ids` is empty.
    pub fn allocate_legitimate(
        &mut self,
        lp: LightpathId,
        add_module: Option<DirectionlessModule>,
        drop_module: Option<DirectionlessModule>,
        fibers: &[FiberId],
        slot_ids: &BTreeSet<SlotId>,
    ) -> Result<()> {
        self.check_lightpath(lp)?;
        for &fiber in fibers {
            self.check_fiber(fiber)?;
        }
        if let Some(module) = add_module {
            self.check_module(module)?;
        }
        if let Some(module) = drop_module {
            self.check_module(module)?;
        }
        if slot_ids.is_empty() {
            return Ok(());
        }
        if self.records.contains_key(&lp) {
            log::warn!("Lightpath {:?} already has a legitimate occupation record. The record is overwritten.", lp);
        }
        for &fiber in fibers {
            self.legitimate_fiber_occupation.allocate(fiber, lp, slot_ids);
        }
        if let Some(module) = add_module {
            self.legitimate_add_occupation.allocate(module, lp, slot_ids);
        }
        if let Some(module) = drop_module {
            self.legitimate_drop_occupation.allocate(module, lp, slot_ids);
        }
        self.records.insert(lp, LightpathOccupationRecord::new(fibers.to_vec(), add_module, drop_module, slot_ids.clone()));
        Ok(())
    }

    /// Accounts for the waste-signal occupation of a lightpath on the given
    /// fibers and directionless modules. A no-op when `slot_ids` is empty.
    pub fn allocate_waste(
        &mut self,
        lp: LightpathId,
        add_modules: &[DirectionlessModule],
        drop_modules: &[DirectionlessModule],
        fibers: &BTreeSet<FiberId>,
        slot_ids: &BTreeSet<SlotId>,
    ) -> Result<()> {
        self.check_lightpath(lp)?;
        for &fiber in fibers {
            self.check_fiber(fiber)?;
        }
        for &module in add_modules.iter().chain(drop_modules) {
            self.check_module(module)?;
        }
        if slot_ids.is_empty() {
            return Ok(());
        }
        for &fiber in fibers {
            self.waste_fiber_occupation.allocate(fiber, lp, slot_ids);
        }
        for &module in add_modules {
            self.waste_add_occupation.allocate(module, lp, slot_ids);
        }
        for &module in drop_modules {
            self.waste_drop_occupation.allocate(module, lp, slot_ids);
        }
        Ok(())
    }

    /// Releases every slot occupied by `lp`, legitimate and waste, in all
    /// six indices. Releasing a lightpath with no occupation is a no-op.
    pub fn release(&mut self, lp: LightpathId) -> Result<()> {
        self.check_lightpath(lp)?;
        self.legitimate_fiber_occupation.release(lp);
        self.legitimate_add_occupation.release(lp);
        self.legitimate_drop_occupation.release(lp);
        self.waste_fiber_occupation.release(lp);
        self.waste_add_occupation.release(lp);
        self.waste_drop_occupation.release(lp);
        self.records.remove(&lp);
        Ok(())
    }

    /// The legitimate-placement record of `lp`, if it is allocated.
    pub fn record(&self, lp: LightpathId) -> Option<&LightpathOccupationRecord> {
        self.records.get(&lp)
    }

    //--------------------------------
    // --- Occupation queries ---
    //--------------------------------

    /// Per-slot occupation of a fiber for the given signal kind. More than
    /// one lightpath on a slot means spectrum clashing occurs there.
    pub fn occupied_resources(&self, fiber: FiberId, kind: OpticalSignalOccupation) -> Result<BTreeMap<SlotId, BTreeSet<LightpathId>>> {
        self.check_fiber(fiber)?;
        let index = if kind.is_legitimate() { &self.legitimate_fiber_occupation } else { &self.waste_fiber_occupation };
        Ok(index.occupied_slots(fiber))
    }

    /// Per-slot occupation of a directionless add module for the given
    /// signal kind.
    pub fn occupied_resources_in_add_module(
        &self,
        node: NodeId,
        module_index: usize,
        kind: OpticalSignalOccupation,
    ) -> Result<BTreeMap<SlotId, BTreeSet<LightpathId>>> {
        self.check_node(node)?;
        let module = DirectionlessModule::new(node, module_index);
        let index = if kind.is_legitimate() { &self.legitimate_add_occupation } else { &self.waste_add_occupation };
        Ok(index.occupied_slots(module))
    }

    /// Per-slot occupation of a directionless drop module for the given
    /// signal kind.
    pub fn occupied_resources_in_drop_module(
        &self,
        node: NodeId,
        module_index: usize,
        kind: OpticalSignalOccupation,
    ) -> Result<BTreeMap<SlotId, BTreeSet<LightpathId>>> {
        self.check_node(node)?;
        let module = DirectionlessModule::new(node, module_index);
        let index = if kind.is_legitimate() { &self.legitimate_drop_occupation } else { &self.waste_drop_occupation };
        Ok(index.occupied_slots(module))
    }

    /// Slots of a fiber occupied by at least one traversing lightpath, in
    /// its legitimate or its waste signal.
    pub fn occupied_slot_ids(&self, fiber: FiberId) -> Result<BTreeSet<SlotId>> {
        self.check_fiber(fiber)?;
        let mut res = self.legitimate_fiber_occupation.occupied_slot_ids(fiber);
        res.extend(self.waste_fiber_occupation.occupied_slot_ids(fiber));
        Ok(res)
    }

    /// Number of occupied slots of a fiber for one signal kind.
    pub fn number_of_occupied_slot_ids(&self, fiber: FiberId, kind: OpticalSignalOccupation) -> Result<usize> {
        self.check_fiber(fiber)?;
        let index = if kind.is_legitimate() { &self.legitimate_fiber_occupation } else { &self.waste_fiber_occupation };
        Ok(index.number_of_occupied_slot_ids(fiber))
    }

    /// Slots occupied (by waste or legitimate signals) in the given
    /// directionless add module.
    pub fn occupied_slot_ids_in_add_module(&self, node: NodeId, module_index: usize) -> Result<BTreeSet<SlotId>> {
        self.check_node(node)?;
        let module = DirectionlessModule::new(node, module_index);
        let mut res = self.legitimate_add_occupation.occupied_slot_ids(module);
        res.extend(self.waste_add_occupation.occupied_slot_ids(module));
        Ok(res)
    }

    /// Slots occupied (by waste or legitimate signals) in the given
    /// directionless drop module.
    pub fn occupied_slot_ids_in_drop_module(&self, node: NodeId, module_index: usize) -> Result<BTreeSet<SlotId>> {
        self.check_node(node)?;
        let module = DirectionlessModule::new(node, module_index);
        let mut res = self.legitimate_drop_occupation.occupied_slot_ids(module);
        res.extend(self.waste_drop_occupation.occupied_slot_ids(module));
        Ok(res)
    }

    /// Slots that are usable in the given fiber: valid for it and not
    /// occupied by the waste or legitimate signal of any lightpath.
    pub fn idle_slot_ids(&self, fiber: FiberId) -> Result<BTreeSet<SlotId>> {
        let fiber_data = self.check_fiber(fiber)?;
        let mut res = fiber_data.valid_slot_ids();
        for slot in self.occupied_slot_ids(fiber)? {
            res.remove(&slot);
        }
        Ok(res)
    }

    /// Slots that are idle in ALL the given fibers and, if provided, not
    /// occupied in the add and drop directionless modules either.
    pub fn available_slot_ids(
        &self,
        fibers: &[FiberId],
        add_module: Option<DirectionlessModule>,
        drop_module: Option<DirectionlessModule>,
    ) -> Result<BTreeSet<SlotId>> {
        if fibers.is_empty() {
            return Err(Error::EmptyFiberSet);
        }
        let mut valid = self.idle_slot_ids(fibers[0])?;
        for &fiber in &fibers[1..] {
            let idle = self.idle_slot_ids(fiber)?;
            valid = valid.intersection(&idle).copied().collect();
        }
        if let Some(module) = add_module {
            for slot in self.occupied_slot_ids_in_add_module(module.node, module.index)? {
                valid.remove(&slot);
            }
        }
        if let Some(module) = drop_module {
            for slot in self.occupied_slot_ids_in_drop_module(module.node, module.index)? {
                valid.remove(&slot);
            }
        }
        Ok(valid)
    }

    /// True when all `slot_ids` are valid and idle in the given fiber.
    pub fn is_slot_ids_valid_and_idle(&self, fiber: FiberId, slot_ids: &BTreeSet<SlotId>) -> Result<bool> {
        let idle = self.idle_slot_ids(fiber)?;
        Ok(slot_ids.iter().all(|slot| idle.contains(slot)))
    }

    /// True when none of `slot_ids` is occupied in the given add module.
    pub fn is_slot_ids_idle_in_add_module(&self, node: NodeId, module_index: usize, slot_ids: &BTreeSet<SlotId>) -> Result<bool> {
        let occupied = self.occupied_slot_ids_in_add_module(node, module_index)?;
        Ok(slot_ids.iter().all(|slot| !occupied.contains(slot)))
    }

    /// True when none of `slot_ids` is occupied in the given drop module.
    pub fn is_slot_ids_idle_in_drop_module(&self, node: NodeId, module_index: usize, slot_ids: &BTreeSet<SlotId>) -> Result<bool> {
        let occupied = self.occupied_slot_ids_in_drop_module(node, module_index)?;
        Ok(slot_ids.iter().all(|slot| !occupied.contains(slot)))
    }

    /// True when all `slot_ids` are valid and idle in every fiber of
    /// `legitimate_path` and in the optional add/drop modules. A path that
    /// traverses the same fiber twice is never allocatable.
    pub fn is_allocatable(
        &self,
        legitimate_path: &[FiberId],
        add_module: Option<DirectionlessModule>,
        drop_module: Option<DirectionlessModule>,
        slot_ids: &BTreeSet<SlotId>,
    ) -> Result<bool> {
        for &fiber in legitimate_path {
            self.check_fiber(fiber)?;
        }
        let unique: BTreeSet<FiberId> = legitimate_path.iter().copied().collect();
        if unique.len() != legitimate_path.len() {
            return Ok(false);
        }
        for &fiber in legitimate_path {
            if !self.is_slot_ids_valid_and_idle(fiber, slot_ids)? {
                return Ok(false);
            }
        }
        if let Some(module) = add_module {
            if !self.is_slot_ids_idle_in_add_module(module.node, module.index, slot_ids)? {
                return Ok(false);
            }
        }
        if let Some(module) = drop_module {
            if !self.is_slot_ids_idle_in_drop_module(module.node, module.index, slot_ids)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Initial slots `s` such that the whole range `[s, s + n - 1]` is
    /// valid and idle in the given fiber.
    pub fn idle_range_initial_slots(&self, fiber: FiberId, num_contiguous_slots: usize) -> Result<BTreeSet<SlotId>> {
        let idle = self.idle_slot_ids(fiber)?;
        let mut res = BTreeSet::new();
        for &slot in &idle {
            let whole_range_idle = (0..num_contiguous_slots as SlotId).all(|offset| idle.contains(&(slot + offset)));
            if whole_range_idle {
                res.insert(slot);
            }
        }
        Ok(res)
    }

    /// Minimum and maximum optical slot id that is valid in all the given
    /// fibers.
    pub fn min_max_valid_slot_across_fibers(net: &Network, fibers: &[FiberId]) -> Result<(SlotId, SlotId)> {
        if fibers.is_empty() {
            return Err(Error::EmptyFiberSet);
        }
        let mut min = SlotId::MIN;
        let mut max = SlotId::MAX;
        for &fiber in fibers {
            let fiber_data = match net.fiber(fiber) {
                Some(f) => f,
                None => return Err(Error::CrossNetwork(format!("unknown fiber {:?}", fiber))),
            };
            match fiber_data.min_max_valid_slot_id() {
                Some((first, last)) => {
                    min = min.max(first);
                    max = max.min(last);
                }
                None => return Err(Error::ModelConstructionError("fiber has no valid optical slots".to_string())),
            }
        }
        Ok((min, max))
    }

    //--------------------------
    // --- Clash diagnostics ---
    //--------------------------

    /// Slots of a fiber where wavelength clashing occurs: a legitimate
    /// signal shares the slot with another legitimate signal, or with the
    /// waste signal of this or any other lightpath.
    pub fn clashing_slot_ids(&self, fiber: FiberId) -> Result<BTreeSet<SlotId>> {
        self.check_fiber(fiber)?;
        let legitimate = self.legitimate_fiber_occupation.occupied_slots(fiber);
        let waste = self.waste_fiber_occupation.occupied_slots(fiber);
        Ok(Self::clashing_slots_of(&legitimate, &waste))
    }

    pub fn number_of_clashing_slot_ids(&self, fiber: FiberId) -> Result<usize> {
        Ok(self.clashing_slot_ids(fiber)?.len())
    }

    /// Clashing slots in the given directionless add module.
    pub fn clashing_slot_ids_in_add_module(&self, node: NodeId, module_index: usize) -> Result<BTreeSet<SlotId>> {
        self.check_node(node)?;
        let module = DirectionlessModule::new(node, module_index);
        let legitimate = self.legitimate_add_occupation.occupied_slots(module);
        let waste = self.waste_add_occupation.occupied_slots(module);
        Ok(Self::clashing_slots_of(&legitimate, &waste))
    }

    /// Clashing slots in the given directionless drop module.
    pub fn clashing_slot_ids_in_drop_module(&self, node: NodeId, module_index: usize) -> Result<BTreeSet<SlotId>> {
        self.check_node(node)?;
        let module = DirectionlessModule::new(node, module_index);
        let legitimate = self.legitimate_drop_occupation.occupied_slots(module);
        let waste = self.waste_drop_occupation.occupied_slots(module);
        Ok(Self::clashing_slots_of(&legitimate, &waste))
    }

    fn clashing_slots_of(
        legitimate: &BTreeMap<SlotId, BTreeSet<LightpathId>>,
        waste: &BTreeMap<SlotId, BTreeSet<LightpathId>>,
    ) -> BTreeSet<SlotId> {
        let mut res = BTreeSet::new();
        for (&slot, lps) in legitimate {
            if lps.is_empty() {
                continue;
            }
            if lps.len() > 1 {
                res.insert(slot);
                continue;
            }
            if waste.get(&slot).map_or(false, |w| !w.is_empty()) {
                res.insert(slot);
            }
        }
        res
    }

    //---------------------------
    // --- Validity predicates ---
    //---------------------------

    /// True when the design is globally ok respect to spectrum occupation:
    /// no slot of any fiber or directionless module is occupied by more
    /// than one lightpath (per signal kind), and every occupied fiber slot
    /// is inside the fiber's valid range.
    pub fn is_spectrum_occupation_ok(&self) -> bool {
        for index in [&self.legitimate_fiber_occupation, &self.waste_fiber_occupation] {
            for (fiber, per_slot) in index.full_map() {
                let fiber_data = match self.net.fiber(*fiber) {
                    Some(f) => f,
                    None => return false,
                };
                for (slot, lps) in per_slot {
                    if !fiber_data.is_valid_slot(*slot) {
                        return false;
                    }
                    if lps.len() != 1 {
                        return false;
                    }
                }
            }
        }
        let module_indices = [
            &self.legitimate_add_occupation,
            &self.legitimate_drop_occupation,
            &self.waste_add_occupation,
            &self.waste_drop_occupation,
        ];
        for index in module_indices {
            for per_slot in index.full_map().values() {
                for lps in per_slot.values() {
                    if lps.len() != 1 {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// True when the design is ok respect to the occupation of this
    /// lightpath: all its slots are valid in every fiber of its path, and
    /// at each of those slots the legitimate occupation is exactly this
    /// lightpath, both in the fibers and in its add/drop modules.
    pub fn is_spectrum_occupation_ok_for(&self, lp: LightpathId) -> Result<bool> {
        let lightpath = self.check_lightpath(lp)?;
        let slot_ids = lightpath.optical_slot_ids();
        for &fiber in lightpath.seq_fibers() {
            let fiber_data = match self.net.fiber(fiber) {
                Some(f) => f,
                None => return Ok(false),
            };
            if !slot_ids.iter().all(|&slot| fiber_data.is_valid_slot(slot)) {
                return Ok(false);
            }
            let occupied = self.legitimate_fiber_occupation.occupied_slots(fiber);
            if !Self::is_sole_occupant(&occupied, slot_ids, lp) {
                return Ok(false);
            }
        }
        if let Some((origin, destination)) = self.net.lightpath_endpoints(lp) {
            if let Some(index) = lightpath.directionless_add_module_index_in_origin() {
                let module = DirectionlessModule::new(origin, index);
                let occupied = self.legitimate_add_occupation.occupied_slots(module);
                if !Self::is_sole_occupant(&occupied, slot_ids, lp) {
                    return Ok(false);
                }
            }
            if let Some(index) = lightpath.directionless_drop_module_index_in_destination() {
                let module = DirectionlessModule::new(destination, index);
                let occupied = self.legitimate_drop_occupation.occupied_slots(module);
                if !Self::is_sole_occupant(&occupied, slot_ids, lp) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn is_sole_occupant(occupied: &BTreeMap<SlotId, BTreeSet<LightpathId>>, slot_ids: &BTreeSet<SlotId>, lp: LightpathId) -> bool {
        for slot in slot_ids {
            match occupied.get(slot) {
                Some(lps) => {
                    if lps.len() != 1 || !lps.contains(&lp) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }

    //-------------------------------
    // --- Waste-signal accessors ---
    //-------------------------------

    /// Fibers where the waste signal of `lp` is currently allocated.
    pub fn fibers_with_waste_signal(&self, lp: LightpathId) -> BTreeSet<FiberId> {
        self.waste_fiber_occupation.occupied_elements_of(lp)
    }

    /// Add directionless modules where the waste signal of `lp` is
    /// currently allocated.
    pub fn add_modules_with_waste_signal(&self, lp: LightpathId) -> BTreeSet<DirectionlessModule> {
        self.waste_add_occupation.occupied_elements_of(lp)
    }

    /// Drop directionless modules where the waste signal of `lp` is
    /// currently allocated.
    pub fn drop_modules_with_waste_signal(&self, lp: LightpathId) -> BTreeSet<DirectionlessModule> {
        self.waste_drop_occupation.occupied_elements_of(lp)
    }

    /// True when the lightpath clashes with itself: its legitimate path
    /// traverses a fiber twice, or its own waste signal lands on a resource
    /// its legitimate signal uses.
    pub fn is_lightpath_self_clashing(&self, lp: LightpathId) -> Result<bool> {
        self.check_lightpath(lp)?;
        let record = match self.records.get(&lp) {
            Some(record) => record,
            None => return Ok(false),
        };
        if record.is_with_fiber_cycles_in_legitimate_signal() {
            return Ok(true);
        }
        let waste_fibers = self.fibers_with_waste_signal(lp);
        for fiber in record.seq_fibers_legitimate_signal() {
            if waste_fibers.contains(fiber) {
                return Ok(true);
            }
        }
        if let Some(module) = record.directionless_add_module_legitimate_signal() {
            if self.add_modules_with_waste_signal(lp).contains(&module) {
                return Ok(true);
            }
        }
        if let Some(module) = record.directionless_drop_module_legitimate_signal() {
            if self.drop_modules_with_waste_signal(lp).contains(&module) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    //--------------------------
    // --- Internal checks ---
    //--------------------------

    pub(crate) fn check_fiber(&self, fiber: FiberId) -> Result<&'net Fiber> {
        self.net.fiber(fiber).ok_or_else(|| Error::CrossNetwork(format!("unknown fiber {:?}", fiber)))
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if self.net.contains_node(node) {
            Ok(())
        } else {
            Err(Error::CrossNetwork(format!("unknown node {:?}", node)))
        }
    }

    pub(crate) fn check_module(&self, module: DirectionlessModule) -> Result<()> {
        self.check_node(module.node)
    }

    pub(crate) fn check_lightpath(&self, lp: LightpathId) -> Result<&'net Lightpath> {
        self.net.lightpath(lp).ok_or_else(|| Error::CrossNetwork(format!("unknown lightpath {:?}", lp)))
    }
}
