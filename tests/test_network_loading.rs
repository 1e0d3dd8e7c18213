use std::collections::BTreeSet;

use wdm_spectrum_manager::api::network_dto::{ArchitectureDto, FiberDto, LightpathDto, NetworkDto, NodeDto};
use wdm_spectrum_manager::domain::network::{Network, SlotId};
use wdm_spectrum_manager::error::Error;

fn create_test_network_dto() -> NetworkDto {
    NetworkDto {
        nodes: vec![
            NodeDto { name: "Madrid".to_string(), architecture: ArchitectureDto::RouteAndSelect },
            NodeDto { name: "Zaragoza".to_string(), architecture: ArchitectureDto::Filterless },
            NodeDto { name: "Barcelona".to_string(), architecture: ArchitectureDto::RouteAndSelect },
            NodeDto { name: "Valencia".to_string(), architecture: ArchitectureDto::RouteAndSelect },
        ],
        fibers: vec![
            FiberDto {
                origin: "Madrid".to_string(),
                destination: "Zaragoza".to_string(),
                length_km: 325.0,
                valid_slot_ranges: vec![(0, 320)],
                bidirectional: true,
            },
            FiberDto {
                origin: "Zaragoza".to_string(),
                destination: "Barcelona".to_string(),
                length_km: 296.0,
                valid_slot_ranges: vec![(0, 320)],
                bidirectional: true,
            },
            FiberDto {
                origin: "Zaragoza".to_string(),
                destination: "Valencia".to_string(),
                length_km: 309.0,
                valid_slot_ranges: vec![(0, 320)],
                bidirectional: true,
            },
        ],
        lightpaths: vec![LightpathDto {
            fibers: vec![0, 1],
            slot_ids: vec![0, 1, 2, 3],
            add_module_index: Some(0),
            drop_module_index: None,
            compute_waste: true,
        }],
    }
}

#[test]
fn test_network_construction_from_dto() {
    // Execution
    let net = Network::from_dto(create_test_network_dto()).unwrap();

    // Verification: 4 nodes, 3 declared fibers plus their reverses.
    assert_eq!(net.nodes().count(), 4);
    assert_eq!(net.fibers().count(), 6);
    assert_eq!(net.lightpaths().count(), 1);

    for (_, fiber) in net.fibers() {
        assert!(fiber.is_bidirectional(), "every declared fiber is coupled with its reverse");
        assert_eq!(fiber.valid_slot_ids().len(), 321);
        assert_eq!(fiber.min_max_valid_slot_id(), Some((0, 320)));
    }

    let (_lp, lightpath) = net.lightpaths().next().expect("one lightpath");
    assert_eq!(lightpath.optical_slot_ids(), &(0..=3).collect::<BTreeSet<SlotId>>());
    assert_eq!(lightpath.directionless_add_module_index_in_origin(), Some(0));
    assert_eq!(lightpath.directionless_drop_module_index_in_destination(), None);

    // The filterless middle node leaks the signal onto the fiber towards
    // Valencia; the waste triple records it.
    let waste = lightpath.resources_with_waste_signal();
    assert_eq!(waste.fibers.len(), 1, "the filterless hop leaks into exactly one extra fiber");
    for &fiber in &waste.fibers {
        assert!(!lightpath.seq_fibers().contains(&fiber), "waste fibers are outside the legitimate path");
    }
}

#[test]
fn test_network_dto_with_unknown_node_name_fails() {
    let mut dto = create_test_network_dto();
    dto.fibers[0].origin = "Sevilla".to_string();

    match Network::from_dto(dto) {
        Err(Error::ModelConstructionError(message)) => assert!(message.contains("Sevilla"), "unexpected message: {}", message),
        other => panic!("expected a ModelConstructionError, got {:?}", other),
    }
}

#[test]
fn test_network_dto_with_unknown_fiber_index_fails() {
    let mut dto = create_test_network_dto();
    dto.lightpaths[0].fibers = vec![7];

    match Network::from_dto(dto) {
        Err(Error::ModelConstructionError(_)) => {}
        other => panic!("expected a ModelConstructionError, got {:?}", other),
    }
}

#[test]
fn test_network_dto_with_non_contiguous_lightpath_fails() {
    let mut dto = create_test_network_dto();
    // Fiber 2 starts in Zaragoza, but fiber 1 already ended in Barcelona.
    dto.lightpaths[0].fibers = vec![0, 1, 2];

    match Network::from_dto(dto) {
        Err(Error::NonContiguousPath) => {}
        other => panic!("expected a NonContiguousPath error, got {:?}", other),
    }
}
