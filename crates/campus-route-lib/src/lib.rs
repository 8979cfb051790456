//! Campus routing library entry points.
//!
//! This crate loads a campus dataset into an immutable weighted graph, resolves
//! free-text destination queries against it, computes deterministic shortest
//! paths, and narrates the result as walking instructions. Presentation layers
//! (CLI, map, assistant) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod narration;
pub mod output;
pub mod path;
pub mod routing;
pub mod search;
pub mod shared;

pub use dataset::{
    default_dataset_path, load_graph, resolve_dataset_source, sample_dataset, sample_graph,
    Dataset, DatasetSource, NodeRecord, DATASET_ENV_VAR,
};
pub use error::{EdgeRef, Error, Result, RoutingError, ValidationError};
pub use graph::{CampusGraph, Category, Edge, Node, NodeId, Position};
pub use narration::{narrate, NarrationStep, StepKind, StepNode};
pub use output::{render_candidates, RouteRenderMode, RouteSummary, Waypoint};
pub use path::{shortest_path, Hop, Path, PathError};
pub use routing::{
    plan_route, route, route_to_node, select_destination, Destination, RouteRequest, RouteResult,
};
pub use search::{normalize, resolve, suggestions, MatchRule, QueryCandidate};
pub use shared::SharedGraph;
