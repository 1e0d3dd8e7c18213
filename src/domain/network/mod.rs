use std::collections::{BTreeMap, BTreeSet};

use slotmap::SlotMap;

use crate::api::network_dto::{ArchitectureDto, NetworkDto};
use crate::error::{Error, Result};

pub mod architecture;
pub mod fiber;
pub mod lightpath;
pub mod node;

pub use architecture::SwitchingArchitecture;
pub use fiber::Fiber;
pub use lightpath::{Lightpath, WasteResources};
pub use node::Node;

slotmap::new_key_type! {
    /// Opaque handle of a node owned by a [`Network`].
    pub struct NodeId;
    /// Opaque handle of a fiber owned by a [`Network`].
    pub struct FiberId;
    /// Opaque handle of a lightpath owned by a [`Network`].
    pub struct LightpathId;
}

/// An optical slot is identified by an integer id. The centre frequency of
/// the slot with id `i` is `193.1 + i * 0.0125` THz, all slots having the
/// same width of 12.5 GHz.
pub type SlotId = i64;

/// An add- or drop-side directionless transceiver bank at a node, shared
/// across directions, identified by the pair (node, module index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectionlessModule {
    pub node: NodeId,
    pub index: usize,
}

impl DirectionlessModule {
    pub fn new(node: NodeId, index: usize) -> Self {
        Self { node, index }
    }
}

/// The WDM network topology: nodes, fibers and lightpaths.
///
/// The network owns all entities; the rest of the crate refers to them
/// through their slotmap keys. A key that does not resolve in this network's
/// stores belongs to some other `Network` instance (or was removed), which
/// is what the spectrum manager's cross-network checks rely on.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: SlotMap<NodeId, Node>,
    fibers: SlotMap<FiberId, Fiber>,
    lightpaths: SlotMap<LightpathId, Lightpath>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    //----------------------
    // --- Node methods ---
    //----------------------

    pub fn add_node(&mut self, name: impl Into<String>, architecture: SwitchingArchitecture) -> NodeId {
        self.nodes.insert(Node::new(name.into(), architecture))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    //----------------------
    // --- Fiber methods ---
    //----------------------

    /// Adds a unidirectional fiber from `origin` to `destination`.
    ///
    /// `valid_slot_ranges` are inclusive `(first, last)` ranges of the
    /// optical slot ids this fiber can carry.
    pub fn add_fiber(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        length_km: f64,
        valid_slot_ranges: Vec<(SlotId, SlotId)>,
    ) -> Result<FiberId> {
        if !self.contains_node(origin) || !self.contains_node(destination) {
            return Err(Error::ModelConstructionError("fiber endpoint node does not exist in this network".to_string()));
        }
        for &(first, last) in &valid_slot_ranges {
            if first > last {
                return Err(Error::ModelConstructionError(format!("invalid slot range ({}, {})", first, last)));
            }
        }
        Ok(self.fibers.insert(Fiber::new(origin, destination, length_km, valid_slot_ranges)))
    }

    /// Marks two opposite fibers as each other's bidirectional pair.
    pub fn couple_bidirectional(&mut self, fiber_ab: FiberId, fiber_ba: FiberId) -> Result<()> {
        if fiber_ab == fiber_ba {
            return Err(Error::ModelConstructionError("a fiber cannot be its own bidirectional pair".to_string()));
        }
        let (a_origin, a_destination) = match self.fibers.get(fiber_ab) {
            Some(f) => (f.origin(), f.destination()),
            None => return Err(Error::CrossNetwork(format!("unknown fiber {:?}", fiber_ab))),
        };
        let (b_origin, b_destination) = match self.fibers.get(fiber_ba) {
            Some(f) => (f.origin(), f.destination()),
            None => return Err(Error::CrossNetwork(format!("unknown fiber {:?}", fiber_ba))),
        };
        if a_origin != b_destination || a_destination != b_origin {
            return Err(Error::ModelConstructionError("bidirectional pair fibers must connect the same nodes in opposite directions".to_string()));
        }
        self.fibers[fiber_ab].set_bidirectional_pair(fiber_ba);
        self.fibers[fiber_ba].set_bidirectional_pair(fiber_ab);
        Ok(())
    }

    pub fn fiber(&self, id: FiberId) -> Option<&Fiber> {
        self.fibers.get(id)
    }

    pub fn contains_fiber(&self, id: FiberId) -> bool {
        self.fibers.contains_key(id)
    }

    pub fn fibers(&self) -> impl Iterator<Item = (FiberId, &Fiber)> {
        self.fibers.iter()
    }

    /// All fibers going from node `a` to node `b`.
    pub fn node_pair_fibers(&self, a: NodeId, b: NodeId) -> BTreeSet<FiberId> {
        self.fibers.iter().filter(|(_, f)| f.origin() == a && f.destination() == b).map(|(id, _)| id).collect()
    }

    pub fn incoming_fibers(&self, node: NodeId) -> BTreeSet<FiberId> {
        self.fibers.iter().filter(|(_, f)| f.destination() == node).map(|(id, _)| id).collect()
    }

    pub fn outgoing_fibers(&self, node: NodeId) -> BTreeSet<FiberId> {
        self.fibers.iter().filter(|(_, f)| f.origin() == node).map(|(id, _)| id).collect()
    }

    //--------------------------
    // --- Lightpath methods ---
    //--------------------------

    /// Adds a lightpath traversing `seq_fibers` and occupying `slot_ids`.
    ///
    /// The fiber sequence must form a contiguous unicast path: the origin of
    /// each fiber is the destination of the previous one.
    pub fn add_lightpath(
        &mut self,
        seq_fibers: Vec<FiberId>,
        slot_ids: BTreeSet<SlotId>,
        add_module_index: Option<usize>,
        drop_module_index: Option<usize>,
    ) -> Result<LightpathId> {
        if seq_fibers.is_empty() {
            return Err(Error::EmptyPath);
        }
        let mut previous_destination: Option<NodeId> = None;
        for &fiber in &seq_fibers {
            let data = match self.fibers.get(fiber) {
                Some(f) => f,
                None => return Err(Error::CrossNetwork(format!("unknown fiber {:?}", fiber))),
            };
            if let Some(previous) = previous_destination {
                if data.origin() != previous {
                    return Err(Error::NonContiguousPath);
                }
            }
            previous_destination = Some(data.destination());
        }
        Ok(self.lightpaths.insert(Lightpath::new(seq_fibers, slot_ids, add_module_index, drop_module_index)))
    }

    pub fn lightpath(&self, id: LightpathId) -> Option<&Lightpath> {
        self.lightpaths.get(id)
    }

    pub fn contains_lightpath(&self, id: LightpathId) -> bool {
        self.lightpaths.contains_key(id)
    }

    pub fn lightpaths(&self) -> impl Iterator<Item = (LightpathId, &Lightpath)> {
        self.lightpaths.iter()
    }

    /// Origin and destination nodes of a lightpath (the A end of its first
    /// fiber and the B end of its last one).
    pub fn lightpath_endpoints(&self, id: LightpathId) -> Option<(NodeId, NodeId)> {
        let lightpath = self.lightpaths.get(id)?;
        let first = self.fibers.get(*lightpath.seq_fibers().first()?)?;
        let last = self.fibers.get(*lightpath.seq_fibers().last()?)?;
        Some((first.origin(), last.destination()))
    }

    /// Overwrites the waste-resource triple of a lightpath.
    pub fn set_waste_resources(&mut self, id: LightpathId, waste: WasteResources) -> Result<()> {
        match self.lightpaths.get_mut(id) {
            Some(lp) => {
                lp.set_waste_resources(waste);
                Ok(())
            }
            None => Err(Error::CrossNetwork(format!("unknown lightpath {:?}", id))),
        }
    }

    //-------------------
    // --- DTO loading ---
    //-------------------

    /// Builds the internal network model from its JSON DTO representation.
    pub fn from_dto(dto: NetworkDto) -> Result<Self> {
        let mut network = Network::new();
        let mut node_of_name: BTreeMap<String, NodeId> = BTreeMap::new();

        for node_dto in dto.nodes {
            let architecture = match node_dto.architecture {
                ArchitectureDto::RouteAndSelect => SwitchingArchitecture::RouteAndSelect,
                ArchitectureDto::Filterless => SwitchingArchitecture::Filterless,
            };
            let id = network.add_node(node_dto.name.clone(), architecture);
            if node_of_name.insert(node_dto.name.clone(), id).is_some() {
                return Err(Error::ModelConstructionError(format!("duplicate node name '{}'", node_dto.name)));
            }
        }

        let resolve = |name: &str, node_of_name: &BTreeMap<String, NodeId>| -> Result<NodeId> {
            node_of_name.get(name).copied().ok_or_else(|| Error::ModelConstructionError(format!("unknown node name '{}'", name)))
        };

        // Ids of the declared fibers, in declaration order. Lightpath DTOs
        // reference fibers by this index. Reverse fibers created for
        // bidirectional entries get their own id but no index.
        let mut declared_fibers: Vec<FiberId> = Vec::new();
        for fiber_dto in dto.fibers {
            let origin = resolve(&fiber_dto.origin, &node_of_name)?;
            let destination = resolve(&fiber_dto.destination, &node_of_name)?;
            let forward = network.add_fiber(origin, destination, fiber_dto.length_km, fiber_dto.valid_slot_ranges.clone())?;
            declared_fibers.push(forward);
            if fiber_dto.bidirectional {
                let backward = network.add_fiber(destination, origin, fiber_dto.length_km, fiber_dto.valid_slot_ranges)?;
                network.couple_bidirectional(forward, backward)?;
            }
        }

        for lightpath_dto in dto.lightpaths {
            let mut seq_fibers = Vec::with_capacity(lightpath_dto.fibers.len());
            for index in lightpath_dto.fibers {
                match declared_fibers.get(index) {
                    Some(&fiber) => seq_fibers.push(fiber),
                    None => return Err(Error::ModelConstructionError(format!("lightpath references unknown fiber index {}", index))),
                }
            }
            let slot_ids: BTreeSet<SlotId> = lightpath_dto.slot_ids.into_iter().collect();
            let lp = network.add_lightpath(seq_fibers.clone(), slot_ids, lightpath_dto.add_module_index, lightpath_dto.drop_module_index)?;
            if lightpath_dto.compute_waste {
                let waste = crate::domain::spectrum::propagation::waste_resources_of_path(&network, &seq_fibers)?;
                network.set_waste_resources(lp, waste)?;
            }
        }

        log::debug!(
            "Network constructed: {} nodes, {} fibers, {} lightpaths.",
            network.nodes.len(),
            network.fibers.len(),
            network.lightpaths.len()
        );
        Ok(network)
    }
}
