//! Turn a computed [`Path`] into ordered, human-readable walking instructions.

use serde::Serialize;

use crate::graph::{Category, Node, NodeId};
use crate::path::{sum_weights, Path};

/// Compact reference to a node inside a narration step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepNode {
    pub id: NodeId,
    pub name: String,
    pub category: Category,
}

impl From<&Node> for StepNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            category: node.category,
        }
    }
}

/// Position of a step within the narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Intermediate hop.
    Proceed,
    /// Last hop of a non-empty path.
    Arrive,
    /// Origin and destination are the same node.
    AlreadyThere,
}

/// One instruction of a narrated route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrationStep {
    pub index: usize,
    pub kind: StepKind,
    pub from: StepNode,
    pub to: StepNode,
    pub weight: f64,
    pub instruction: String,
}

/// Narrate every hop of `path`. A zero-hop path yields a single
/// [`StepKind::AlreadyThere`] step, so the result is never empty.
pub fn narrate(path: &Path) -> Vec<NarrationStep> {
    let hop_count = path.hop_count();
    if hop_count == 0 {
        let here = path.origin();
        return vec![NarrationStep {
            index: 0,
            kind: StepKind::AlreadyThere,
            from: StepNode::from(here),
            to: StepNode::from(here),
            weight: 0.0,
            instruction: format!(
                "You are already at {}, {} (≈0 units).",
                here.name,
                place_phrase(here.category)
            ),
        }];
    }

    path.hops()
        .enumerate()
        .map(|(index, hop)| {
            let kind = if index + 1 == hop_count {
                StepKind::Arrive
            } else {
                StepKind::Proceed
            };
            let instruction = match kind {
                StepKind::Arrive => format!(
                    "From {}, proceed to {} (≈{} units). You have arrived at {}, {}.",
                    hop.from.name,
                    hop.to.name,
                    format_weight(hop.weight),
                    hop.to.name,
                    place_phrase(hop.to.category)
                ),
                StepKind::Proceed | StepKind::AlreadyThere => format!(
                    "From {}, proceed to {} (≈{} units).",
                    hop.from.name,
                    hop.to.name,
                    format_weight(hop.weight)
                ),
            };
            NarrationStep {
                index,
                kind,
                from: StepNode::from(hop.from),
                to: StepNode::from(hop.to),
                weight: hop.weight,
                instruction,
            }
        })
        .collect()
}

/// Sum of step weights, added the same way as [`Path::total_weight`].
pub fn total_weight(steps: &[NarrationStep]) -> f64 {
    let weights: Vec<f64> = steps.iter().map(|step| step.weight).collect();
    sum_weights(&weights)
}

/// Short description of a destination used in arrival sentences.
pub fn place_phrase(category: Category) -> &'static str {
    match category {
        Category::Academic => "an academic building",
        Category::Administrative => "an administrative office",
        Category::Residential => "a residence hall",
        Category::Amenity => "a campus amenity",
        Category::Gate => "a campus gate",
    }
}

/// Round to one decimal place, dropping the decimal when the result is whole.
pub fn format_weight(weight: f64) -> String {
    let rounded = (weight * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
