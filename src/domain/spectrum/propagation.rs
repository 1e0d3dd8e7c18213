use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::domain::network::{FiberId, Network, NodeId, WasteResources};
use crate::domain::spectrum::cycles;
use crate::error::{Error, Result};

/// The outcome of analysing how an optical signal propagates through the
/// switching fabric along a candidate unicast path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationAnalysis {
    /// Every fiber the signal reaches, intended or not.
    pub propagated_fibers: BTreeSet<FiberId>,

    /// Simple cycles in the propagation graph: loops where optical power
    /// would circulate indefinitely.
    pub lasing_cycles: Vec<Vec<FiberId>>,

    /// True when no fiber of the legitimate path (nor the drop) receives
    /// the signal more than once via different routes through the fabric.
    pub multipath_free: bool,
}

/// A vertex of the propagation graph: the synthetic add and drop fibers
/// plus one vertex per reached network fiber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PropagationVertex {
    Add,
    Fiber(FiberId),
    Drop,
}

/// Computes, for a contiguous unicast path, the set of fibers the signal
/// would propagate to, the lasing cycles occurring (if any), and whether
/// the path is multipath-free.
///
/// The analysis builds a directed graph rooted at a synthetic add fiber and
/// sinking into a synthetic drop fiber, expanding waste propagation at each
/// traversed node according to its switching architecture.
pub fn propagation_of(net: &Network, links: &[FiberId]) -> Result<PropagationAnalysis> {
    if links.is_empty() {
        return Err(Error::EmptyPath);
    }
    let seq_nodes = continuous_sequence_of_nodes(net, links)?;

    let all_non_wasting = seq_nodes.iter().all(|&node| {
        net.node(node).map_or(false, |data| data.switching_architecture().is_never_creating_wasted_spectrum())
    });
    if all_non_wasting {
        return Ok(PropagationAnalysis {
            propagated_fibers: links.iter().copied().collect(),
            lasing_cycles: Vec::new(),
            multipath_free: true,
        });
    }

    let mut graph: DiGraph<PropagationVertex, ()> = DiGraph::new();
    let mut vertex_of: BTreeMap<PropagationVertex, NodeIndex> = BTreeMap::new();
    let add_index = graph.add_node(PropagationVertex::Add);
    vertex_of.insert(PropagationVertex::Add, add_index);

    let mut pending: BTreeSet<PropagationVertex> = BTreeSet::new();
    pending.insert(PropagationVertex::Add);
    let mut processed: BTreeSet<PropagationVertex> = BTreeSet::new();

    while let Some(vertex) = pending.pop_first() {
        if processed.contains(&vertex) {
            continue;
        }
        match vertex {
            PropagationVertex::Add => {
                let first_link = links[0];
                let add_node = fiber_origin(net, first_link)?;
                let architecture = node_architecture(net, add_node)?;
                for propagated in architecture.out_fibers_if_add_to_output_fiber(net, first_link) {
                    connect(&mut graph, &mut vertex_of, PropagationVertex::Add, PropagationVertex::Fiber(propagated));
                    pending.insert(PropagationVertex::Fiber(propagated));
                }
            }
            PropagationVertex::Drop => {
                // Terminal vertex, nothing propagates further.
            }
            PropagationVertex::Fiber(fiber) => {
                let switch_node = fiber_destination(net, fiber)?;
                let architecture = node_architecture(net, switch_node)?;
                for propagated in architecture.out_fibers_unavoidable_propagation_from_input_fiber(net, fiber) {
                    connect(&mut graph, &mut vertex_of, vertex, PropagationVertex::Fiber(propagated));
                    pending.insert(PropagationVertex::Fiber(propagated));
                }
                if let Some(index_in_path) = links.iter().position(|&link| link == fiber) {
                    let is_express = index_in_path < links.len() - 1;
                    if is_express {
                        let out_fiber = links[index_in_path + 1];
                        let express_node = fiber_origin(net, out_fiber)?;
                        let express_architecture = node_architecture(net, express_node)?;
                        for propagated in express_architecture.out_fibers_if_express_from_input_to_output_fiber(net, fiber, out_fiber) {
                            connect(&mut graph, &mut vertex_of, vertex, PropagationVertex::Fiber(propagated));
                            pending.insert(PropagationVertex::Fiber(propagated));
                        }
                    } else {
                        connect(&mut graph, &mut vertex_of, vertex, PropagationVertex::Drop);
                        pending.insert(PropagationVertex::Drop);
                    }
                }
            }
        }
        processed.insert(vertex);
    }

    let drop_index = match vertex_of.get(&PropagationVertex::Drop) {
        Some(&index) => index,
        None => return Err(Error::SignalNotReachingDrop),
    };

    let propagated_fibers: BTreeSet<FiberId> = vertex_of
        .keys()
        .filter_map(|vertex| match vertex {
            PropagationVertex::Fiber(fiber) => Some(*fiber),
            _ => None,
        })
        .collect();

    let mut multipath_free = links.iter().all(|&link| in_degree(&graph, &vertex_of, PropagationVertex::Fiber(link)) == 1);
    multipath_free &= graph.edges_directed(drop_index, Direction::Incoming).count() == 1;

    let lasing_cycles: Vec<Vec<FiberId>> = cycles::simple_cycles(&graph)
        .into_iter()
        .map(|cycle| {
            cycle
                .into_iter()
                .filter_map(|index| match graph[index] {
                    PropagationVertex::Fiber(fiber) => Some(fiber),
                    _ => None,
                })
                .collect()
        })
        .collect();

    Ok(PropagationAnalysis { propagated_fibers, lasing_cycles, multipath_free })
}

/// The lasing loops present in the network as a whole: cycles of fibers
/// where the signal would propagate indefinitely without being blocked by
/// any optical switch. This occurs e.g. in rings where all the nodes are
/// filterless.
pub fn unavoidable_lasing_loops(net: &Network) -> Vec<Vec<FiberId>> {
    let mut graph: DiGraph<FiberId, ()> = DiGraph::new();
    let mut vertex_of: BTreeMap<FiberId, NodeIndex> = BTreeMap::new();
    for (fiber, _) in net.fibers() {
        let index = graph.add_node(fiber);
        vertex_of.insert(fiber, index);
    }
    for (node, data) in net.nodes() {
        let architecture = data.switching_architecture();
        for in_fiber in net.incoming_fibers(node) {
            for propagated in architecture.out_fibers_unavoidable_propagation_from_input_fiber(net, in_fiber) {
                let source = vertex_of[&in_fiber];
                let target = vertex_of[&propagated];
                if graph.find_edge(source, target).is_none() {
                    graph.add_edge(source, target, ());
                }
            }
        }
    }
    cycles::simple_cycles(&graph).into_iter().map(|cycle| cycle.into_iter().map(|index| graph[index]).collect()).collect()
}

/// Derives the waste-resource triple of a candidate path from its
/// propagation analysis: the fibers reached beyond the legitimate ones.
pub fn waste_resources_of_path(net: &Network, links: &[FiberId]) -> Result<WasteResources> {
    let analysis = propagation_of(net, links)?;
    let legitimate: BTreeSet<FiberId> = links.iter().copied().collect();
    let fibers = analysis.propagated_fibers.difference(&legitimate).copied().collect();
    Ok(WasteResources { fibers, add_modules: Vec::new(), drop_modules: Vec::new() })
}

/// True when the origin of each fiber is the destination of the previous
/// one.
pub fn is_continuous_unicast_path(net: &Network, links: &[FiberId]) -> bool {
    continuous_sequence_of_nodes(net, links).is_ok()
}

/// The sequence of nodes a contiguous path traverses, origin first.
pub(crate) fn continuous_sequence_of_nodes(net: &Network, links: &[FiberId]) -> Result<Vec<NodeId>> {
    if links.is_empty() {
        return Err(Error::EmptyPath);
    }
    let mut res = Vec::with_capacity(links.len() + 1);
    res.push(fiber_origin(net, links[0])?);
    for &link in links {
        let origin = fiber_origin(net, link)?;
        if origin != *res.last().expect("sequence starts non-empty") {
            return Err(Error::NonContiguousPath);
        }
        res.push(fiber_destination(net, link)?);
    }
    Ok(res)
}

fn connect(
    graph: &mut DiGraph<PropagationVertex, ()>,
    vertex_of: &mut BTreeMap<PropagationVertex, NodeIndex>,
    from: PropagationVertex,
    to: PropagationVertex,
) {
    let from_index = intern(graph, vertex_of, from);
    let to_index = intern(graph, vertex_of, to);
    // The graph is simple: a second propagation report of the same edge is
    // not a second incoming signal.
    if graph.find_edge(from_index, to_index).is_none() {
        graph.add_edge(from_index, to_index, ());
    }
}

fn intern(graph: &mut DiGraph<PropagationVertex, ()>, vertex_of: &mut BTreeMap<PropagationVertex, NodeIndex>, vertex: PropagationVertex) -> NodeIndex {
    match vertex_of.get(&vertex) {
        Some(&index) => index,
        None => {
            let index = graph.add_node(vertex);
            vertex_of.insert(vertex, index);
            index
        }
    }
}

fn in_degree(graph: &DiGraph<PropagationVertex, ()>, vertex_of: &BTreeMap<PropagationVertex, NodeIndex>, vertex: PropagationVertex) -> usize {
    match vertex_of.get(&vertex) {
        Some(&index) => graph.edges_directed(index, Direction::Incoming).count(),
        None => 0,
    }
}

fn fiber_origin(net: &Network, fiber: FiberId) -> Result<NodeId> {
    net.fiber(fiber).map(|f| f.origin()).ok_or_else(|| Error::CrossNetwork(format!("unknown fiber {:?}", fiber)))
}

fn fiber_destination(net: &Network, fiber: FiberId) -> Result<NodeId> {
    net.fiber(fiber).map(|f| f.destination()).ok_or_else(|| Error::CrossNetwork(format!("unknown fiber {:?}", fiber)))
}

fn node_architecture(net: &Network, node: NodeId) -> Result<crate::domain::network::SwitchingArchitecture> {
    net.node(node).map(|n| n.switching_architecture()).ok_or_else(|| Error::CrossNetwork(format!("unknown node {:?}", node)))
}
