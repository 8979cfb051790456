use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use thiserror::Error;

use crate::graph::{CampusGraph, Node, NodeId};

/// Reasons the path solver can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Origin or destination is not part of the graph.
    #[error("unknown node id '{0}'")]
    NotFound(NodeId),

    /// Origin and destination lie in disconnected components.
    #[error("no path between {origin} and {destination}")]
    Unreachable {
        origin: NodeId,
        destination: NodeId,
    },
}

/// One hop of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop<'a> {
    pub from: &'a Node,
    pub to: &'a Node,
    pub weight: f64,
}

/// Ordered walk from an origin to a destination.
///
/// Always holds at least one node. `hop_weights[i]` is the weight of the edge
/// between `nodes[i]` and `nodes[i + 1]`, and `total_weight` is their sum
/// accumulated in walk order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    nodes: Vec<Node>,
    hop_weights: Vec<f64>,
    total_weight: f64,
}

impl Path {
    /// Zero-hop path that starts and ends at `node`.
    pub fn single(node: Node) -> Self {
        Self {
            nodes: vec![node],
            hop_weights: Vec::new(),
            total_weight: 0.0,
        }
    }

    pub fn origin(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn destination(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn hop_weights(&self) -> &[f64] {
        &self.hop_weights
    }

    /// Iterate over consecutive node pairs with the weight of each hop.
    pub fn hops(&self) -> impl Iterator<Item = Hop<'_>> + '_ {
        self.nodes
            .windows(2)
            .zip(self.hop_weights.iter().copied())
            .map(|(pair, weight)| Hop {
                from: &pair[0],
                to: &pair[1],
                weight,
            })
    }

    pub fn hop_count(&self) -> usize {
        self.hop_weights.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Node identifiers in walk order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.id.as_str()).collect()
    }
}

/// Compute the minimum-weight path between two nodes with Dijkstra's algorithm.
///
/// Frontier entries are ordered by accumulated weight and then by the order in
/// which they were discovered, which follows neighbour declaration order. A
/// node's predecessor only changes on a strictly shorter distance, so equal-cost
/// alternatives always resolve to the first one discovered and repeated runs
/// return identical paths.
pub fn shortest_path(graph: &CampusGraph, origin: &str, destination: &str) -> Result<Path, PathError> {
    let start = graph
        .index_of(origin)
        .ok_or_else(|| PathError::NotFound(origin.to_string()))?;
    let goal = graph
        .index_of(destination)
        .ok_or_else(|| PathError::NotFound(destination.to_string()))?;

    if start == goal {
        return Ok(Path::single(graph.node_at(start).clone()));
    }

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<(usize, f64)>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0, sequence));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if settled[current] {
            continue;
        }
        settled[current] = true;

        if current == goal {
            return Ok(reconstruct_path(graph, &parents, start, goal));
        }

        let current_distance = distances[current];
        for link in graph.links(current) {
            let next = link.target;
            if settled[next] {
                continue;
            }
            let next_cost = current_distance + link.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some((current, link.weight));
                sequence += 1;
                queue.push(QueueEntry::new(next, next_cost, sequence));
            }
        }
    }

    Err(PathError::Unreachable {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })
}

fn reconstruct_path(
    graph: &CampusGraph,
    parents: &[Option<(usize, f64)>],
    start: usize,
    goal: usize,
) -> Path {
    let mut indices = vec![goal];
    let mut hop_weights = Vec::new();
    let mut current = goal;
    while current != start {
        let Some((parent, weight)) = parents[current] else {
            break;
        };
        indices.push(parent);
        hop_weights.push(weight);
        current = parent;
    }
    indices.reverse();
    hop_weights.reverse();

    let total_weight = sum_weights(&hop_weights);

    Path {
        nodes: indices
            .into_iter()
            .map(|position| graph.node_at(position).clone())
            .collect(),
        hop_weights,
        total_weight,
    }
}

/// Sum hop weights in ascending order.
///
/// The result depends only on the multiset of weights, so a walk and its
/// reverse report the same total and narration totals match path totals.
pub fn sum_weights(weights: &[f64]) -> f64 {
    let mut sorted = weights.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.iter().fold(0.0, |sum, weight| sum + weight)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: usize, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // discovery order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
