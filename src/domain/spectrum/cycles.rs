use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::{DiGraph, NodeIndex};

/// Enumerates all simple directed cycles of `graph` using Johnson's
/// algorithm.
///
/// Each cycle is returned as its vertices in traversal order, without
/// repeating the initial vertex at the end. Self loops are reported as
/// single-vertex cycles. The enumeration is deterministic: vertices are
/// explored in ascending index order.
pub fn simple_cycles<N, E>(graph: &DiGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    let vertex_count = graph.node_count();
    let mut adjacency: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); vertex_count];
    for edge in graph.edge_indices() {
        let (source, target) = graph.edge_endpoints(edge).expect("edge has endpoints");
        adjacency[source.index()].insert(target.index());
    }

    let mut cycles: Vec<Vec<usize>> = Vec::new();

    // Self loops are emitted directly and removed. The circuit search below
    // only handles cycles of length two or more.
    for vertex in 0..vertex_count {
        if adjacency[vertex].remove(&vertex) {
            cycles.push(vec![vertex]);
        }
    }

    let all_vertices: BTreeSet<usize> = (0..vertex_count).collect();
    let mut component_queue: Vec<Vec<usize>> =
        strongly_connected_components(&adjacency, &all_vertices).into_iter().filter(|component| component.len() > 1).collect();

    while let Some(component) = component_queue.pop() {
        let component_set: BTreeSet<usize> = component.iter().copied().collect();
        let start = *component.iter().min().expect("non-empty component");

        let mut search = CircuitSearch {
            adjacency: &adjacency,
            component: &component_set,
            start,
            blocked: BTreeSet::new(),
            block_map: BTreeMap::new(),
            stack: Vec::new(),
            cycles: &mut cycles,
        };
        search.circuit(start);

        // Remove the start vertex and requeue the remaining cyclic parts.
        let remaining: BTreeSet<usize> = component_set.iter().copied().filter(|&vertex| vertex != start).collect();
        for sub_component in strongly_connected_components(&adjacency, &remaining) {
            if sub_component.len() > 1 {
                component_queue.push(sub_component);
            }
        }
    }

    cycles.into_iter().map(|cycle| cycle.into_iter().map(NodeIndex::new).collect()).collect()
}

/// The blocked-set circuit search of Johnson's algorithm, restricted to one
/// strongly connected component and rooted at its least vertex.
struct CircuitSearch<'a> {
    adjacency: &'a [BTreeSet<usize>],
    component: &'a BTreeSet<usize>,
    start: usize,
    blocked: BTreeSet<usize>,
    block_map: BTreeMap<usize, BTreeSet<usize>>,
    stack: Vec<usize>,
    cycles: &'a mut Vec<Vec<usize>>,
}

impl CircuitSearch<'_> {
    fn circuit(&mut self, vertex: usize) -> bool {
        let adjacency = self.adjacency;
        let component = self.component;
        let mut found = false;
        self.stack.push(vertex);
        self.blocked.insert(vertex);
        for &next in adjacency[vertex].iter().filter(|next| component.contains(*next)) {
            if next == self.start {
                self.cycles.push(self.stack.clone());
                found = true;
            } else if !self.blocked.contains(&next) && self.circuit(next) {
                found = true;
            }
        }
        if found {
            self.unblock(vertex);
        } else {
            for &next in adjacency[vertex].iter().filter(|next| component.contains(*next)) {
                self.block_map.entry(next).or_default().insert(vertex);
            }
        }
        self.stack.pop();
        found
    }

    fn unblock(&mut self, vertex: usize) {
        self.blocked.remove(&vertex);
        if let Some(dependents) = self.block_map.remove(&vertex) {
            for dependent in dependents {
                if self.blocked.contains(&dependent) {
                    self.unblock(dependent);
                }
            }
        }
    }
}

/// Tarjan's strongly connected components, restricted to `vertices`.
fn strongly_connected_components(adjacency: &[BTreeSet<usize>], vertices: &BTreeSet<usize>) -> Vec<Vec<usize>> {
    let mut state = TarjanState {
        adjacency,
        vertices,
        index_of: BTreeMap::new(),
        low_link: BTreeMap::new(),
        on_stack: BTreeSet::new(),
        stack: Vec::new(),
        next_index: 0,
        components: Vec::new(),
    };
    for &vertex in vertices {
        if !state.index_of.contains_key(&vertex) {
            state.visit(vertex);
        }
    }
    state.components
}

struct TarjanState<'a> {
    adjacency: &'a [BTreeSet<usize>],
    vertices: &'a BTreeSet<usize>,
    index_of: BTreeMap<usize, usize>,
    low_link: BTreeMap<usize, usize>,
    on_stack: BTreeSet<usize>,
    stack: Vec<usize>,
    next_index: usize,
    components: Vec<Vec<usize>>,
}

impl TarjanState<'_> {
    fn visit(&mut self, vertex: usize) {
        let adjacency = self.adjacency;
        let vertices = self.vertices;
        self.index_of.insert(vertex, self.next_index);
        self.low_link.insert(vertex, self.next_index);
        self.next_index += 1;
        self.stack.push(vertex);
        self.on_stack.insert(vertex);

        for &next in adjacency[vertex].iter().filter(|next| vertices.contains(*next)) {
            if !self.index_of.contains_key(&next) {
                self.visit(next);
                let next_low = self.low_link[&next];
                if next_low < self.low_link[&vertex] {
                    self.low_link.insert(vertex, next_low);
                }
            } else if self.on_stack.contains(&next) {
                let next_index = self.index_of[&next];
                if next_index < self.low_link[&vertex] {
                    self.low_link.insert(vertex, next_index);
                }
            }
        }

        if self.low_link[&vertex] == self.index_of[&vertex] {
            let mut component = Vec::new();
            loop {
                let member = self.stack.pop().expect("tarjan stack is never empty here");
                self.on_stack.remove(&member);
                component.push(member);
                if member == vertex {
                    break;
                }
            }
            self.components.push(component);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(edges: &[(u32, u32)], vertex_count: usize) -> DiGraph<(), ()> {
        let mut graph = DiGraph::new();
        let indices: Vec<NodeIndex> = (0..vertex_count).map(|_| graph.add_node(())).collect();
        for &(a, b) in edges {
            graph.add_edge(indices[a as usize], indices[b as usize], ());
        }
        graph
    }

    fn as_index_sets(cycles: Vec<Vec<NodeIndex>>) -> Vec<BTreeSet<usize>> {
        cycles.into_iter().map(|cycle| cycle.into_iter().map(|ix| ix.index()).collect()).collect()
    }

    #[test]
    fn test_acyclic_graph_has_no_cycles() {
        let graph = graph_of(&[(0, 1), (1, 2), (0, 2)], 3);
        assert!(simple_cycles(&graph).is_empty());
    }

    #[test]
    fn test_single_triangle() {
        let graph = graph_of(&[(0, 1), (1, 2), (2, 0)], 3);
        let cycles = as_index_sets(simple_cycles(&graph));
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0], BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_self_loop() {
        let graph = graph_of(&[(0, 0), (0, 1)], 2);
        let cycles = as_index_sets(simple_cycles(&graph));
        assert_eq!(cycles, vec![BTreeSet::from([0])]);
    }

    #[test]
    fn test_two_cycles_sharing_a_vertex() {
        // 0 -> 1 -> 0 and 1 -> 2 -> 1
        let graph = graph_of(&[(0, 1), (1, 0), (1, 2), (2, 1)], 3);
        let cycles = as_index_sets(simple_cycles(&graph));
        assert_eq!(cycles.len(), 2, "expected two distinct simple cycles, got {:?}", cycles);
        assert!(cycles.contains(&BTreeSet::from([0, 1])));
        assert!(cycles.contains(&BTreeSet::from([1, 2])));
    }

    #[test]
    fn test_complete_digraph_on_three_vertices() {
        // All ordered pairs: three 2-cycles and two 3-cycles.
        let graph = graph_of(&[(0, 1), (1, 0), (1, 2), (2, 1), (0, 2), (2, 0)], 3);
        let cycles = simple_cycles(&graph);
        assert_eq!(cycles.len(), 5, "expected five simple cycles, got {:?}", cycles);
    }
}
