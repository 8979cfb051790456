//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use campus_route_lib::{sample_graph, CampusGraph, Category, Edge, Node, Position};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The bundled ASTU sample campus.
#[allow(dead_code)]
pub fn campus() -> CampusGraph {
    sample_graph().expect("bundled dataset is valid")
}

/// Minimal node with the given id, name, and category.
#[allow(dead_code)]
pub fn node(id: &str, name: &str, category: Category) -> Node {
    Node {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category,
        position: Position { x: 0.0, y: 0.0 },
    }
}

/// Sample campus rebuilt without the edges for which `drop` returns true.
#[allow(dead_code)]
pub fn campus_without(drop: impl Fn(&Edge) -> bool) -> CampusGraph {
    let dataset = campus_route_lib::sample_dataset().expect("bundled dataset parses");
    let nodes = dataset.nodes.into_iter().map(Node::from).collect();
    let edges: Vec<Edge> = dataset.edges.into_iter().filter(|e| !drop(e)).collect();
    CampusGraph::build(nodes, &edges).expect("subset of a valid dataset is valid")
}
