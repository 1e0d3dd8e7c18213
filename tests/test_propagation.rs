use std::collections::BTreeSet;

use wdm_spectrum_manager::domain::network::{FiberId, Network, SwitchingArchitecture};
use wdm_spectrum_manager::domain::spectrum::propagation::{
    is_continuous_unicast_path, propagation_of, unavoidable_lasing_loops, waste_resources_of_path,
};
use wdm_spectrum_manager::domain::spectrum::regeneration::regeneration_points;
use wdm_spectrum_manager::error::Error;

fn fiber_set(fibers: &[FiberId]) -> BTreeSet<FiberId> {
    fibers.iter().copied().collect()
}

#[test]
fn test_non_wasting_path_shortcut() {
    // A -> B -> C, every node wavelength selective.
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::RouteAndSelect);
    let b = net.add_node("B", SwitchingArchitecture::RouteAndSelect);
    let c = net.add_node("C", SwitchingArchitecture::RouteAndSelect);
    let f1 = net.add_fiber(a, b, 10.0, vec![(0, 100)]).unwrap();
    let f2 = net.add_fiber(b, c, 10.0, vec![(0, 100)]).unwrap();

    let analysis = propagation_of(&net, &[f1, f2]).unwrap();

    // The signal reaches exactly the legitimate path, nothing else.
    assert_eq!(analysis.propagated_fibers, fiber_set(&[f1, f2]));
    assert!(analysis.lasing_cycles.is_empty());
    assert!(analysis.multipath_free);
}

#[test]
fn test_propagation_through_filterless_node() {
    // Path [F1, F2]; the node joining them is filterless and also leaks
    // into F3. Add and drop nodes are non wasting.
    let mut net = Network::new();
    let add_node = net.add_node("ADD", SwitchingArchitecture::RouteAndSelect);
    let mid = net.add_node("MID", SwitchingArchitecture::Filterless);
    let drop_node = net.add_node("DROP", SwitchingArchitecture::RouteAndSelect);
    let leak = net.add_node("LEAK", SwitchingArchitecture::RouteAndSelect);
    let f1 = net.add_fiber(add_node, mid, 10.0, vec![(0, 100)]).unwrap();
    let f2 = net.add_fiber(mid, drop_node, 10.0, vec![(0, 100)]).unwrap();
    let f3 = net.add_fiber(mid, leak, 10.0, vec![(0, 100)]).unwrap();

    let analysis = propagation_of(&net, &[f1, f2]).unwrap();

    assert_eq!(analysis.propagated_fibers, fiber_set(&[f1, f2, f3]));
    assert!(analysis.lasing_cycles.is_empty());
    assert!(analysis.multipath_free, "a single broadcast stage does not duplicate the signal on the path");
    assert!(analysis.propagated_fibers.is_superset(&fiber_set(&[f1, f2])));

    // The waste triple derived from the same analysis.
    let waste = waste_resources_of_path(&net, &[f1, f2]).unwrap();
    assert_eq!(waste.fibers, fiber_set(&[f3]));
}

#[test]
fn test_lasing_loop_in_filterless_ring() {
    // A unidirectional three-node ring of filterless nodes.
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::Filterless);
    let b = net.add_node("B", SwitchingArchitecture::Filterless);
    let c = net.add_node("C", SwitchingArchitecture::Filterless);
    let ab = net.add_fiber(a, b, 10.0, vec![(0, 100)]).unwrap();
    let bc = net.add_fiber(b, c, 10.0, vec![(0, 100)]).unwrap();
    let ca = net.add_fiber(c, a, 10.0, vec![(0, 100)]).unwrap();

    let loops = unavoidable_lasing_loops(&net);

    assert_eq!(loops.len(), 1, "the ring has exactly one simple propagation cycle, got {:?}", loops);
    assert_eq!(fiber_set(&loops[0]), fiber_set(&[ab, bc, ca]));
}

#[test]
fn test_propagation_around_filterless_ring_detects_the_loop() {
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::Filterless);
    let b = net.add_node("B", SwitchingArchitecture::Filterless);
    let c = net.add_node("C", SwitchingArchitecture::Filterless);
    let ab = net.add_fiber(a, b, 10.0, vec![(0, 100)]).unwrap();
    let bc = net.add_fiber(b, c, 10.0, vec![(0, 100)]).unwrap();
    let ca = net.add_fiber(c, a, 10.0, vec![(0, 100)]).unwrap();

    let analysis = propagation_of(&net, &[ab, bc]).unwrap();

    // The waste keeps circulating: every ring fiber is reached, the cycle
    // is reported, and AB receives the signal twice (add plus loop).
    assert_eq!(analysis.propagated_fibers, fiber_set(&[ab, bc, ca]));
    assert_eq!(analysis.lasing_cycles.len(), 1);
    assert_eq!(fiber_set(&analysis.lasing_cycles[0]), fiber_set(&[ab, bc, ca]));
    assert!(!analysis.multipath_free);
}

#[test]
fn test_signal_not_reaching_drop_on_filterless_u_turn() {
    // A bidirectional pair between two filterless nodes. The u-turn path
    // [F1, pair(F1)] cannot be realized: the broadcast never feeds the
    // signal back into the pair fiber.
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::Filterless);
    let b = net.add_node("B", SwitchingArchitecture::Filterless);
    let ab = net.add_fiber(a, b, 10.0, vec![(0, 100)]).unwrap();
    let ba = net.add_fiber(b, a, 10.0, vec![(0, 100)]).unwrap();
    net.couple_bidirectional(ab, ba).unwrap();

    match propagation_of(&net, &[ab, ba]) {
        Err(Error::SignalNotReachingDrop) => {}
        other => panic!("expected a SignalNotReachingDrop error, got {:?}", other),
    }
}

#[test]
fn test_empty_path_is_an_error() {
    let net = Network::new();
    match propagation_of(&net, &[]) {
        Err(Error::EmptyPath) => {}
        other => panic!("expected an EmptyPath error, got {:?}", other),
    }
}

#[test]
fn test_non_contiguous_path_is_an_error() {
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::RouteAndSelect);
    let b = net.add_node("B", SwitchingArchitecture::RouteAndSelect);
    let c = net.add_node("C", SwitchingArchitecture::RouteAndSelect);
    let d = net.add_node("D", SwitchingArchitecture::RouteAndSelect);
    let f1 = net.add_fiber(a, b, 10.0, vec![(0, 100)]).unwrap();
    let gap = net.add_fiber(c, d, 10.0, vec![(0, 100)]).unwrap();

    assert!(is_continuous_unicast_path(&net, &[f1]));
    assert!(!is_continuous_unicast_path(&net, &[f1, gap]));
    match propagation_of(&net, &[f1, gap]) {
        Err(Error::NonContiguousPath) => {}
        other => panic!("expected a NonContiguousPath error, got {:?}", other),
    }
}

#[test]
fn test_regeneration_partitioning_packs_left_to_right() {
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::RouteAndSelect);
    let b = net.add_node("B", SwitchingArchitecture::RouteAndSelect);
    let c = net.add_node("C", SwitchingArchitecture::RouteAndSelect);
    let d = net.add_node("D", SwitchingArchitecture::RouteAndSelect);
    let f1 = net.add_fiber(a, b, 30.0, vec![(0, 100)]).unwrap();
    let f2 = net.add_fiber(b, c, 40.0, vec![(0, 100)]).unwrap();
    let f3 = net.add_fiber(c, d, 50.0, vec![(0, 100)]).unwrap();

    let segments = regeneration_points(&net, &[f1, f2, f3], 80.0).unwrap();

    // 30 + 40 fits in 80 km, adding 50 would exceed it.
    assert_eq!(segments, vec![vec![f1, f2], vec![f3]]);
}

#[test]
fn test_regeneration_partitioning_accepts_exact_fit() {
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::RouteAndSelect);
    let b = net.add_node("B", SwitchingArchitecture::RouteAndSelect);
    let c = net.add_node("C", SwitchingArchitecture::RouteAndSelect);
    let f1 = net.add_fiber(a, b, 30.0, vec![(0, 100)]).unwrap();
    let f2 = net.add_fiber(b, c, 50.0, vec![(0, 100)]).unwrap();

    let segments = regeneration_points(&net, &[f1, f2], 80.0).unwrap();

    assert_eq!(segments, vec![vec![f1, f2]]);
}

#[test]
fn test_regeneration_partitioning_rejects_overlong_fiber() {
    let mut net = Network::new();
    let a = net.add_node("A", SwitchingArchitecture::RouteAndSelect);
    let b = net.add_node("B", SwitchingArchitecture::RouteAndSelect);
    let long_fiber = net.add_fiber(a, b, 120.0, vec![(0, 100)]).unwrap();

    match regeneration_points(&net, &[long_fiber], 80.0) {
        Err(Error::FiberTooLong { length_km, max_km }) => {
            assert_eq!(length_km, 120.0);
            assert_eq!(max_km, 80.0);
        }
        other => panic!("expected a FiberTooLong error, got {:?}", other),
    }
}
