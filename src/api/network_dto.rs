use serde::Deserialize;

use crate::domain::network::SlotId;

/// Root DTO of a WDM network description file.
#[derive(Debug, Deserialize)]
pub struct NetworkDto {
    pub nodes: Vec<NodeDto>,
    pub fibers: Vec<FiberDto>,
    #[serde(default)]
    pub lightpaths: Vec<LightpathDto>,
}

#[derive(Debug, Deserialize)]
pub struct NodeDto {
    pub name: String,
    pub architecture: ArchitectureDto,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchitectureDto {
    RouteAndSelect,
    Filterless,
}

#[derive(Debug, Deserialize)]
pub struct FiberDto {
    /// Name of the origin node.
    pub origin: String,

    /// Name of the destination node.
    pub destination: String,

    pub length_km: f64,

    /// Inclusive `(first, last)` ranges of valid optical slot ids.
    pub valid_slot_ranges: Vec<(SlotId, SlotId)>,

    /// When true, the opposite fiber is created as well and the two are
    /// coupled as a bidirectional pair.
    #[serde(default)]
    pub bidirectional: bool,
}

#[derive(Debug, Deserialize)]
pub struct LightpathDto {
    /// Indices into the `fibers` array, in traversal order.
    pub fibers: Vec<usize>,

    pub slot_ids: Vec<SlotId>,

    #[serde(default)]
    pub add_module_index: Option<usize>,

    #[serde(default)]
    pub drop_module_index: Option<usize>,

    /// When true, the waste-resource triple is derived from the propagation
    /// analysis of the lightpath's path.
    #[serde(default)]
    pub compute_waste: bool,
}
