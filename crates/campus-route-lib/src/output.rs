use std::fmt::Write;

use serde::Serialize;

use crate::graph::{Category, Node, NodeId, Position};
use crate::narration::{format_weight, NarrationStep};
use crate::routing::RouteResult;
use crate::search::{MatchRule, QueryCandidate};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    /// Conversational explanation for an assistant surface.
    AssistantNote,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    pub name: String,
    pub category: Category,
}

impl From<&Node> for RouteEndpoint {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            category: node.category,
        }
    }
}

/// Map marker along the route polyline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Waypoint {
    pub index: usize,
    pub id: NodeId,
    pub name: String,
    pub position: Position,
    /// Weight walked from the origin up to this waypoint.
    pub cumulative_weight: f64,
}

/// Structured representation of a planned route that map and assistant
/// surfaces can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub origin: RouteEndpoint,
    pub destination: RouteEndpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<MatchRule>,
    pub hops: usize,
    /// Number of walking instructions, at least one.
    pub step_count: usize,
    pub total_weight: f64,
    pub waypoints: Vec<Waypoint>,
    pub steps: Vec<NarrationStep>,
}

impl RouteSummary {
    pub fn from_result(result: &RouteResult) -> Self {
        let mut cumulative = 0.0;
        let mut waypoints = Vec::with_capacity(result.path.nodes().len());
        for (index, node) in result.path.nodes().iter().enumerate() {
            if index > 0 {
                cumulative += result.path.hop_weights()[index - 1];
            }
            waypoints.push(Waypoint {
                index,
                id: node.id.clone(),
                name: node.name.clone(),
                position: node.position,
                cumulative_weight: cumulative,
            });
        }

        Self {
            origin: RouteEndpoint::from(&result.origin),
            destination: RouteEndpoint::from(&result.destination),
            matched_by: result.matched_by,
            hops: result.hop_count(),
            step_count: result.step_count(),
            total_weight: result.total_weight,
            waypoints,
            steps: result.narration.clone(),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::AssistantNote => self.render_note(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {} units)",
            self.origin.name,
            self.destination.name,
            self.hops,
            format_weight(self.total_weight)
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}. {}", step.index + 1, step.instruction);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, `{}` units)",
            self.origin.name,
            self.destination.name,
            self.hops,
            format_weight(self.total_weight)
        );
        for waypoint in &self.waypoints {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`, {} units)",
                waypoint.index,
                waypoint.name,
                waypoint.id,
                format_weight(waypoint.cumulative_weight)
            );
        }
        buffer
    }

    fn render_note(&self) -> String {
        let mut buffer = String::new();
        if let Some(rule) = self.matched_by {
            let _ = writeln!(
                buffer,
                "I picked {} as your destination ({} match).",
                self.destination.name, rule
            );
        }

        if self.hops == 0 {
            let _ = writeln!(
                buffer,
                "You are already at {}, so there is nothing to walk.",
                self.destination.name
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "The shortest way from {} to {} has {} {} and covers about {} units.",
            self.origin.name,
            self.destination.name,
            self.hops,
            if self.hops == 1 { "leg" } else { "legs" },
            format_weight(self.total_weight)
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{}", step.instruction);
        }
        buffer
    }
}

/// List tied or ranked candidates so a user can pick one by id.
pub fn render_candidates(candidates: &[QueryCandidate]) -> String {
    let mut buffer = String::new();
    for (position, candidate) in candidates.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "{:>3}. {} [{}] ({}, score {}, {})",
            position + 1,
            candidate.node.name,
            candidate.node.id,
            candidate.node.category,
            candidate.score,
            candidate.rule
        );
    }
    buffer
}
