mod common;

use campus_route_lib::{shortest_path, CampusGraph, Category, Edge, PathError};

use common::{campus, campus_without, node};

#[test]
fn main_gate_to_library_goes_through_admin_and_registrar() {
    let graph = campus();
    let path = shortest_path(&graph, "main_gate", "library").expect("reachable");

    assert_eq!(path.node_ids(), vec!["main_gate", "admin", "registrar", "library"]);
    assert_eq!(path.hop_weights(), &[100.0, 50.0, 150.0]);
    assert_eq!(path.total_weight(), 300.0);
    assert_eq!(path.hop_count(), 3);
}

#[test]
fn same_origin_and_destination_is_a_single_node_path() {
    let graph = campus();
    let path = shortest_path(&graph, "stadium", "stadium").expect("trivial path");

    assert_eq!(path.node_ids(), vec!["stadium"]);
    assert_eq!(path.total_weight(), 0.0);
    assert_eq!(path.hop_count(), 0);
}

#[test]
fn unknown_ids_are_not_found() {
    let graph = campus();
    assert_eq!(
        shortest_path(&graph, "main_gate", "gym"),
        Err(PathError::NotFound("gym".to_string()))
    );
    assert_eq!(
        shortest_path(&graph, "gym", "library"),
        Err(PathError::NotFound("gym".to_string()))
    );
}

#[test]
fn dorm_is_unreachable_without_cafeteria_walkway() {
    let graph = campus_without(|edge| edge.from == "cafeteria" && edge.to == "dorm_a");
    assert_eq!(
        shortest_path(&graph, "main_gate", "dorm_a"),
        Err(PathError::Unreachable {
            origin: "main_gate".to_string(),
            destination: "dorm_a".to_string(),
        })
    );
}

#[test]
fn equal_cost_branches_resolve_to_first_declared() {
    // library -> block_500 -> cafeteria and library -> block_600 -> cafeteria
    // both cost 220; block_500 is declared first.
    let graph = campus();
    let path = shortest_path(&graph, "library", "cafeteria").expect("reachable");
    assert_eq!(path.node_ids(), vec!["library", "block_500", "cafeteria"]);
    assert_eq!(path.total_weight(), 220.0);

    let back = shortest_path(&graph, "cafeteria", "library").expect("reachable");
    assert_eq!(back.node_ids(), vec!["cafeteria", "block_500", "library"]);
}

#[test]
fn cheaper_detour_beats_direct_edge() {
    let graph = CampusGraph::build(
        vec![
            node("a", "A", Category::Gate),
            node("b", "B", Category::Academic),
            node("c", "C", Category::Amenity),
        ],
        &[
            Edge::new("a", "c", 10.0),
            Edge::new("a", "b", 3.0),
            Edge::new("b", "c", 4.0),
        ],
    )
    .expect("valid graph");

    let path = shortest_path(&graph, "a", "c").expect("reachable");
    assert_eq!(path.node_ids(), vec!["a", "b", "c"]);
    assert_eq!(path.total_weight(), 7.0);
}

#[test]
fn cycles_do_not_trap_the_search() {
    let graph = CampusGraph::build(
        vec![
            node("a", "A", Category::Gate),
            node("b", "B", Category::Academic),
            node("c", "C", Category::Academic),
            node("d", "D", Category::Residential),
        ],
        &[
            Edge::new("a", "b", 1.0),
            Edge::new("b", "c", 1.0),
            Edge::new("c", "a", 1.0),
            Edge::new("c", "d", 5.0),
        ],
    )
    .expect("valid graph");

    let path = shortest_path(&graph, "a", "d").expect("reachable");
    assert_eq!(path.node_ids(), vec!["a", "c", "d"]);
    assert_eq!(path.total_weight(), 6.0);
}

#[test]
fn path_endpoints_and_hops_are_consistent() {
    let graph = campus();
    let path = shortest_path(&graph, "stadium", "dorm_a").expect("reachable");

    assert_eq!(path.origin().id, "stadium");
    assert_eq!(path.destination().id, "dorm_a");
    let hops: Vec<_> = path.hops().map(|hop| (hop.from.id.as_str(), hop.to.id.as_str())).collect();
    assert_eq!(hops.first().map(|h| h.0), Some("stadium"));
    assert_eq!(hops.last().map(|h| h.1), Some("dorm_a"));
    assert_eq!(hops.len(), path.hop_count());
}
