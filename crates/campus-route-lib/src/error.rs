use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::graph::NodeId;
use crate::search::QueryCandidate;

/// Convenient result alias for the campus routing library.
pub type Result<T> = std::result::Result<T, Error>;

/// Identifies an edge record by its declaration position and endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRef {
    /// Zero-based position of the record in the dataset's edge list.
    pub index: usize,
    pub from: NodeId,
    pub to: NodeId,
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge #{} ({} -> {})", self.index, self.from, self.to)
    }
}

/// Raised while building a [`CampusGraph`](crate::graph::CampusGraph). A graph
/// that fails validation is never published.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// An edge references a node id that is not part of the dataset.
    #[error("{edge} references unknown node '{missing}'")]
    DanglingEdge { edge: EdgeRef, missing: NodeId },

    /// An edge weight is zero, negative, or not finite.
    #[error("{edge} has invalid weight {weight}; weights must be finite and greater than zero")]
    InvalidWeight { edge: EdgeRef, weight: f64 },

    /// Two node records share the same identifier.
    #[error("duplicate node id '{id}'")]
    DuplicateNode { id: NodeId },

    /// A node record has a blank identifier.
    #[error("node at position {index} has an empty id")]
    EmptyNodeId { index: usize },

    /// The declared default origin is not a node of the dataset.
    #[error("default origin '{id}' is not a known node")]
    UnknownDefaultOrigin { id: NodeId },
}

/// Failure modes of the routing facade. Every variant carries enough data for
/// a presentation layer to build user-facing copy without querying again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The query was empty or whitespace only.
    #[error("query is empty")]
    EmptyQuery,

    /// Several candidates tie at the highest score.
    #[error("query is ambiguous between {}", format_candidates(.0))]
    AmbiguousQuery(Vec<QueryCandidate>),

    /// The query was not blank but matched no node.
    #[error("no destination matches '{query}'{}", format_suggestions(.suggestions))]
    NoMatch {
        query: String,
        suggestions: Vec<String>,
    },

    /// Origin or destination id is absent from the graph.
    #[error("unknown node id '{0}'")]
    NotFound(NodeId),

    /// No walkable connection exists between the two nodes.
    #[error("no route available between {origin} and {destination}")]
    Unreachable {
        origin: NodeId,
        destination: NodeId,
    },

    /// No origin was supplied and the dataset declares no default origin.
    #[error("no origin supplied and the dataset has no default origin")]
    NoOrigin,
}

/// Top-level library error covering dataset ingestion.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Raised when a dataset file is not valid JSON or has the wrong shape.
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_candidates(candidates: &[QueryCandidate]) -> String {
    candidates
        .iter()
        .map(|candidate| format!("'{}' ({})", candidate.node.name, candidate.node.id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
