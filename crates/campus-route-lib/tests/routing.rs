mod common;

use std::sync::Arc;
use std::thread;

use campus_route_lib::{
    plan_route, route, route_to_node, CampusGraph, Category, Edge, MatchRule, RouteRequest,
    RoutingError,
};

use common::{campus, campus_without, node};

#[test]
fn library_from_main_gate() {
    let graph = campus();
    let result = route(&graph, "library", Some("main_gate")).expect("route exists");

    assert_eq!(result.destination.id, "library");
    assert_eq!(result.matched_by, Some(MatchRule::ExactId));
    assert_eq!(
        result.path.node_ids(),
        vec!["main_gate", "admin", "registrar", "library"]
    );
    assert_eq!(result.total_weight, 300.0);
    assert_eq!(result.narration.len(), 3);
    assert!(result.narration[2]
        .instruction
        .contains("You have arrived at Main Library"));
}

#[test]
fn omitted_origin_uses_dataset_default() {
    let graph = campus();
    let implicit = route(&graph, "library", None).expect("route exists");
    let explicit = route(&graph, "library", Some("main_gate")).expect("route exists");
    assert_eq!(implicit, explicit);
    assert_eq!(implicit.origin.id, "main_gate");
}

#[test]
fn ambiguous_block_query_lists_both_blocks() {
    let graph = campus();
    let err = route(&graph, "block", Some("main_gate")).expect_err("two equal candidates");

    let RoutingError::AmbiguousQuery(candidates) = err else {
        panic!("expected ambiguity, got {err:?}");
    };
    let ids: Vec<&str> = candidates.iter().map(|c| c.node.id.as_str()).collect();
    assert_eq!(ids, vec!["block_500", "block_600"]);
    assert!(candidates.iter().all(|c| c.score == 80));
}

#[test]
fn picking_from_an_ambiguous_list_by_id_routes() {
    let graph = campus();
    let result = plan_route(&graph, &RouteRequest::node("block_600").from_origin("main_gate"))
        .expect("route exists");
    assert_eq!(result.matched_by, None);
    assert_eq!(
        result.path.node_ids(),
        vec!["main_gate", "admin", "registrar", "library", "block_600"]
    );
    assert_eq!(result.total_weight, 420.0);
}

#[test]
fn stale_node_id_is_not_found() {
    let graph = campus();
    assert_eq!(
        route_to_node(&graph, "gym", Some("main_gate")),
        Err(RoutingError::NotFound("gym".to_string()))
    );
}

#[test]
fn unknown_origin_is_not_found() {
    let graph = campus();
    assert_eq!(
        route(&graph, "library", Some("gym")),
        Err(RoutingError::NotFound("gym".to_string()))
    );
}

#[test]
fn disconnected_dorm_is_unreachable() {
    let graph = campus_without(|edge| edge.from == "cafeteria" && edge.to == "dorm_a");
    let err = route(&graph, "dorm", Some("main_gate")).expect_err("no walkway to the dorm");

    assert_eq!(
        err,
        RoutingError::Unreachable {
            origin: "main_gate".to_string(),
            destination: "dorm_a".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "no route available between main_gate and dorm_a"
    );
}

#[test]
fn blank_query_is_rejected() {
    let graph = campus();
    assert_eq!(route(&graph, "   ", None), Err(RoutingError::EmptyQuery));
}

#[test]
fn unmatched_query_carries_suggestions() {
    let graph = campus();
    let err = route(&graph, "libary", None).expect_err("typo matches nothing");

    let RoutingError::NoMatch { query, suggestions } = err else {
        panic!("expected no match, got {err:?}");
    };
    assert_eq!(query, "libary");
    assert_eq!(suggestions.first().map(String::as_str), Some("Main Library"));
}

#[test]
fn routing_to_the_origin_is_zero_hops() {
    let graph = campus();
    let result = route(&graph, "main gate", Some("main_gate")).expect("trivial route");
    assert_eq!(result.hop_count(), 0);
    assert_eq!(result.total_weight, 0.0);
    assert_eq!(result.narration.len(), 1);
}

#[test]
fn graph_without_gate_or_default_has_no_origin() {
    let graph = CampusGraph::build(
        vec![
            node("hall", "Hall", Category::Residential),
            node("lab", "Lab", Category::Academic),
        ],
        &[Edge::new("hall", "lab", 5.0)],
    )
    .expect("valid graph");

    assert_eq!(route(&graph, "lab", None), Err(RoutingError::NoOrigin));
    let result = route(&graph, "lab", Some("hall")).expect("explicit origin works");
    assert_eq!(result.total_weight, 5.0);
}

#[test]
fn repeated_routes_are_identical() {
    let graph = campus();
    let first = route(&graph, "cafeteria", Some("main_gate")).expect("route exists");
    for _ in 0..20 {
        assert_eq!(route(&graph, "cafeteria", Some("main_gate")).as_ref(), Ok(&first));
    }
    assert_eq!(
        first.path.node_ids(),
        vec!["main_gate", "admin", "registrar", "library", "block_500", "cafeteria"]
    );
}

#[test]
fn concurrent_callers_share_one_graph() {
    let graph = Arc::new(campus());
    let expected = route(&graph, "stadium", Some("dorm_a")).expect("route exists");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || route(&graph, "stadium", Some("dorm_a")))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("thread panicked");
        assert_eq!(result.as_ref(), Ok(&expected));
    }
}
