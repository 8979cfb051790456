use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::{EdgeRef, ValidationError};

/// Stable identifier of a campus node.
pub type NodeId = String;

/// Closed set of point-of-interest categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Academic,
    Administrative,
    Residential,
    Amenity,
    Gate,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Academic,
        Category::Administrative,
        Category::Residential,
        Category::Amenity,
        Category::Gate,
    ];

    /// Lower-case label used in datasets and searched by the query resolver.
    pub fn label(self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Administrative => "administrative",
            Category::Residential => "residential",
            Category::Amenity => "amenity",
            Category::Gate => "gate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "unknown category '{}'; expected one of: {}",
                    trimmed,
                    Category::ALL.map(Category::label).join(", ")
                )
            })
    }
}

/// Datasets accept any letter case, matching [`FromStr`].
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Map placement of a node. Never used for distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A point of interest on campus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub position: Position,
}

/// Undirected walkable connection as declared in a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Directed arc stored in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    pub(crate) target: usize,
    pub(crate) weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RetainedEdge {
    a: usize,
    b: usize,
    weight: f64,
}

/// Immutable campus graph. Built once from a dataset and never mutated; a
/// changed dataset produces a new instance.
#[derive(Debug, Clone)]
pub struct CampusGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<Link>>,
    edges: Vec<RetainedEdge>,
    default_origin: Option<usize>,
}

impl CampusGraph {
    /// Validate and build a graph from nodes and undirected edges.
    ///
    /// Parallel edges between the same pair of nodes collapse into one with the
    /// smallest weight, keeping the position of the first declaration so that
    /// neighbour order follows the dataset. Self-loops are dropped.
    pub fn build(nodes: Vec<Node>, edges: &[Edge]) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if node.id.trim().is_empty() {
                return Err(ValidationError::EmptyNodeId { index: position });
            }
            if index.insert(node.id.clone(), position).is_some() {
                return Err(ValidationError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        let mut retained: Vec<RetainedEdge> = Vec::with_capacity(edges.len());
        let mut by_pair: HashMap<(usize, usize), usize> = HashMap::new();
        let mut self_loops = 0usize;
        let mut collapsed = 0usize;

        for (position, edge) in edges.iter().enumerate() {
            let edge_ref = || EdgeRef {
                index: position,
                from: edge.from.clone(),
                to: edge.to.clone(),
            };
            let from = *index
                .get(&edge.from)
                .ok_or_else(|| ValidationError::DanglingEdge {
                    edge: edge_ref(),
                    missing: edge.from.clone(),
                })?;
            let to = *index
                .get(&edge.to)
                .ok_or_else(|| ValidationError::DanglingEdge {
                    edge: edge_ref(),
                    missing: edge.to.clone(),
                })?;
            if !edge.weight.is_finite() || edge.weight <= 0.0 {
                return Err(ValidationError::InvalidWeight {
                    edge: edge_ref(),
                    weight: edge.weight,
                });
            }

            if from == to {
                self_loops += 1;
                continue;
            }

            let key = (from.min(to), from.max(to));
            match by_pair.get(&key) {
                Some(&slot) => {
                    collapsed += 1;
                    let existing = &mut retained[slot];
                    if edge.weight < existing.weight {
                        existing.weight = edge.weight;
                    }
                }
                None => {
                    by_pair.insert(key, retained.len());
                    retained.push(RetainedEdge {
                        a: from,
                        b: to,
                        weight: edge.weight,
                    });
                }
            }
        }

        if self_loops > 0 {
            warn!(self_loops, "ignored self-loop edges");
        }
        if collapsed > 0 {
            warn!(collapsed, "collapsed parallel edges to their minimum weight");
        }

        let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); nodes.len()];
        for edge in &retained {
            adjacency[edge.a].push(Link {
                target: edge.b,
                weight: edge.weight,
            });
            adjacency[edge.b].push(Link {
                target: edge.a,
                weight: edge.weight,
            });
        }

        debug!(
            nodes = nodes.len(),
            edges = retained.len(),
            "built campus graph"
        );

        Ok(Self {
            nodes,
            index,
            adjacency,
            edges: retained,
            default_origin: None,
        })
    }

    /// Declare which node routes start from when the caller gives no origin.
    pub fn with_default_origin(mut self, id: &str) -> Result<Self, ValidationError> {
        let position = self
            .index_of(id)
            .ok_or_else(|| ValidationError::UnknownDefaultOrigin { id: id.to_string() })?;
        self.default_origin = Some(position);
        Ok(self)
    }

    /// Lookup a node by identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|position| &self.nodes[position])
    }

    /// Neighbours of `id` with edge weights, in edge declaration order. Unknown
    /// ids have no neighbours.
    pub fn neighbours(&self, id: &str) -> impl Iterator<Item = (&Node, f64)> + '_ {
        self.index_of(id)
            .map(|position| self.adjacency[position].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|link| (&self.nodes[link.target], link.weight))
    }

    /// All nodes in dataset order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Nodes of one category, in dataset order.
    pub fn nodes_in(&self, category: Category) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .iter()
            .filter(move |node| node.category == category)
    }

    /// Retained undirected edges in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, f64)> + '_ {
        self.edges
            .iter()
            .map(|edge| (&self.nodes[edge.a], &self.nodes[edge.b], edge.weight))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Declared default origin, falling back to the first gate in dataset order.
    pub fn default_origin(&self) -> Option<&Node> {
        match self.default_origin {
            Some(position) => Some(&self.nodes[position]),
            None => self.nodes_in(Category::Gate).next(),
        }
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, position: usize) -> &Node {
        &self.nodes[position]
    }

    pub(crate) fn links(&self, position: usize) -> &[Link] {
        &self.adjacency[position]
    }
}
