//! Routing facade: the single entry point for presentation layers.
//!
//! A request names a destination, either as free text or as an explicit node
//! id, plus an optional origin. Planning runs:
//! 1. destination selection ([`crate::search::resolve`] for text queries)
//! 2. shortest path search ([`crate::path::shortest_path`])
//! 3. narration ([`crate::narration::narrate`])
//!
//! Every function here is a pure function of its arguments and the immutable
//! graph, so it can be called from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use campus_route_lib::{plan_route, sample_graph, RouteRequest};
//!
//! let graph = sample_graph().expect("bundled dataset is valid");
//! let request = RouteRequest::query("library").from_origin("main_gate");
//! let result = plan_route(&graph, &request).expect("route exists");
//! assert_eq!(result.total_weight, 300.0);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::RoutingError;
use crate::graph::{CampusGraph, Node, NodeId};
use crate::narration::{self, NarrationStep};
use crate::path::{shortest_path, Path, PathError};
use crate::search::{self, MatchRule, QueryCandidate};

/// Number of "did you mean" names attached to [`RoutingError::NoMatch`].
const MAX_SUGGESTIONS: usize = 3;

impl From<PathError> for RoutingError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotFound(id) => RoutingError::NotFound(id),
            PathError::Unreachable {
                origin,
                destination,
            } => RoutingError::Unreachable {
                origin,
                destination,
            },
        }
    }
}

/// Where the user wants to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Free text resolved through the query resolver.
    Query(String),
    /// Explicit node id, typically picked from a disambiguation list.
    Node(NodeId),
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub destination: Destination,
    /// Starting node id. `None` uses the graph's default origin.
    pub origin: Option<NodeId>,
}

impl RouteRequest {
    /// Request a route to whatever `text` resolves to.
    pub fn query(text: impl Into<String>) -> Self {
        Self {
            destination: Destination::Query(text.into()),
            origin: None,
        }
    }

    /// Request a route to a known node id, bypassing text resolution.
    pub fn node(id: impl Into<NodeId>) -> Self {
        Self {
            destination: Destination::Node(id.into()),
            origin: None,
        }
    }

    pub fn from_origin(mut self, origin: impl Into<NodeId>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// Planned route returned to the caller, who owns it outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub origin: Node,
    pub destination: Node,
    /// Rule that selected the destination; `None` for explicit node ids.
    pub matched_by: Option<MatchRule>,
    pub path: Path,
    /// Sum of the narration step weights.
    pub total_weight: f64,
    pub narration: Vec<NarrationStep>,
}

impl RouteResult {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.hop_count()
    }

    /// Number of instructions a walker follows; at least one.
    pub fn step_count(&self) -> usize {
        self.narration.len()
    }
}

/// Route from `origin` (or the default origin) to whatever `query` resolves to.
pub fn route(
    graph: &CampusGraph,
    query: &str,
    origin: Option<&str>,
) -> Result<RouteResult, RoutingError> {
    let candidate = select_destination(graph, query)?;
    let origin = resolve_origin(graph, origin)?;
    build_route(graph, &origin, candidate.node, Some(candidate.rule))
}

/// Route to an explicit destination id without consulting the query resolver.
pub fn route_to_node(
    graph: &CampusGraph,
    destination: &str,
    origin: Option<&str>,
) -> Result<RouteResult, RoutingError> {
    let target = graph
        .node(destination)
        .cloned()
        .ok_or_else(|| RoutingError::NotFound(destination.to_string()))?;
    let origin = resolve_origin(graph, origin)?;
    build_route(graph, &origin, target, None)
}

/// Compute a route for a [`RouteRequest`].
pub fn plan_route(graph: &CampusGraph, request: &RouteRequest) -> Result<RouteResult, RoutingError> {
    let origin = request.origin.as_deref();
    match &request.destination {
        Destination::Query(text) => route(graph, text, origin),
        Destination::Node(id) => route_to_node(graph, id, origin),
    }
}

/// Pick the destination for `query`.
///
/// A single best candidate is selected automatically. When several candidates
/// share the top score the whole tied set is returned as
/// [`RoutingError::AmbiguousQuery`] rather than picking one.
pub fn select_destination(graph: &CampusGraph, query: &str) -> Result<QueryCandidate, RoutingError> {
    if search::normalize(query).is_empty() {
        return Err(RoutingError::EmptyQuery);
    }

    let mut candidates = search::resolve(graph, query);
    let Some(top_score) = candidates.first().map(|candidate| candidate.score) else {
        return Err(RoutingError::NoMatch {
            query: query.trim().to_string(),
            suggestions: search::suggestions(graph, query, MAX_SUGGESTIONS),
        });
    };

    let tied = candidates
        .iter()
        .take_while(|candidate| candidate.score == top_score)
        .count();
    if tied > 1 {
        candidates.truncate(tied);
        return Err(RoutingError::AmbiguousQuery(candidates));
    }

    Ok(candidates.swap_remove(0))
}

fn resolve_origin(graph: &CampusGraph, origin: Option<&str>) -> Result<NodeId, RoutingError> {
    match origin {
        Some(id) => Ok(id.to_string()),
        None => graph
            .default_origin()
            .map(|node| node.id.clone())
            .ok_or(RoutingError::NoOrigin),
    }
}

fn build_route(
    graph: &CampusGraph,
    origin: &str,
    destination: Node,
    matched_by: Option<MatchRule>,
) -> Result<RouteResult, RoutingError> {
    let path = shortest_path(graph, origin, &destination.id)?;
    let narration = narration::narrate(&path);
    let total_weight = narration::total_weight(&narration);

    debug!(
        origin = %origin,
        destination = %destination.id,
        hops = path.hop_count(),
        total_weight,
        "planned route"
    );

    Ok(RouteResult {
        origin: path.origin().clone(),
        destination,
        matched_by,
        path,
        total_weight,
        narration,
    })
}
