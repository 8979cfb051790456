//! Output formatting for the command-line tool.
//!
//! Renderers return strings so commands decide where they go and tests can
//! inspect them without capturing stdout.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use campus_route_lib::narration::format_weight;
use campus_route_lib::{render_candidates, Node, QueryCandidate, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tagged waypoints followed by walking directions.
    #[default]
    Text,
    /// Markdown suitable for chat or documentation surfaces.
    Rich,
    /// Pretty-printed JSON for map clients and scripts.
    Json,
    /// Conversational explanation of the chosen route.
    Note,
}

impl OutputFormat {
    pub fn render_route(self, summary: &RouteSummary, palette: &ColorPalette) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Text => render_text(summary, palette),
            OutputFormat::Rich => summary.render(RouteRenderMode::RichText),
            OutputFormat::Note => summary.render(RouteRenderMode::AssistantNote),
            OutputFormat::Json => to_json(summary)?,
        })
    }

    pub fn render_candidates(self, candidates: &[QueryCandidate]) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Json => to_json(&candidates)?,
            _ => render_candidates(candidates),
        })
    }

    pub fn render_nodes(self, nodes: &[&Node], palette: &ColorPalette) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Json => to_json(&nodes)?,
            _ => render_node_table(nodes, palette),
        })
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Tagged waypoint list, directions, and total.
pub fn render_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let p = palette;
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {}{}{} to {}{}{} ({} {}, {} units):",
        p.white_bold,
        summary.origin.name,
        p.reset,
        p.white_bold,
        summary.destination.name,
        p.reset,
        summary.hops,
        if summary.hops == 1 { "hop" } else { "hops" },
        format_weight(summary.total_weight)
    );

    let last = summary.waypoints.len().saturating_sub(1);
    let mut previous = 0.0;
    for waypoint in &summary.waypoints {
        let (color, tag) = if waypoint.index == 0 {
            (p.tag_start, " FROM ")
        } else if waypoint.index == last {
            (p.tag_goal, " GOAL ")
        } else {
            (p.tag_step, " STEP ")
        };
        let _ = write!(
            buffer,
            "{}{}{} {}{}{}",
            color, tag, p.reset, p.white_bold, waypoint.name, p.reset
        );
        if waypoint.index > 0 {
            let _ = write!(
                buffer,
                " {}(+{}, {} so far){}",
                p.gray,
                format_weight(waypoint.cumulative_weight - previous),
                format_weight(waypoint.cumulative_weight),
                p.reset
            );
        }
        buffer.push('\n');
        previous = waypoint.cumulative_weight;
    }

    let _ = writeln!(buffer, "\nDirections:");
    for step in &summary.steps {
        let _ = writeln!(buffer, "{:>3}. {}", step.index + 1, step.instruction);
    }
    let _ = writeln!(
        buffer,
        "\n{}Total distance:{} {}{} units{}",
        p.cyan,
        p.reset,
        p.white_bold,
        format_weight(summary.total_weight),
        p.reset
    );
    buffer
}

/// Aligned id / name / category table.
pub fn render_node_table(nodes: &[&Node], palette: &ColorPalette) -> String {
    let id_width = nodes
        .iter()
        .map(|n| n.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);
    let name_width = nodes
        .iter()
        .map(|n| n.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{:<id_width$}  {:<name_width$}  Category",
        "Id", "Name"
    );
    for node in nodes {
        let _ = writeln!(
            buffer,
            "{:<id_width$}  {:<name_width$}  {}{}{}",
            node.id,
            node.name,
            palette.category(node.category),
            node.category,
            palette.reset
        );
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_route_lib::{route, sample_graph};

    fn library_summary() -> RouteSummary {
        let graph = sample_graph().expect("sample graph");
        let result = route(&graph, "library", Some("main_gate")).expect("route");
        RouteSummary::from_result(&result)
    }

    #[test]
    fn test_text_tags_first_middle_last() {
        let text = render_text(&library_summary(), &ColorPalette::plain());

        assert!(text.starts_with("Route from Main Gate to Main Library (3 hops, 300 units):"));
        assert!(text.contains(" FROM  Main Gate\n"));
        assert!(text.contains(" STEP  Administrative Building (+100, 100 so far)"));
        assert!(text.contains(" STEP  Registrar Office (+50, 150 so far)"));
        assert!(text.contains(" GOAL  Main Library (+150, 300 so far)"));
        assert!(text.contains("Total distance: 300 units"));
    }

    #[test]
    fn test_text_plain_palette_has_no_escapes() {
        let text = render_text(&library_summary(), &ColorPalette::plain());
        assert!(!text.contains('\x1b'));

        let colored = render_text(&library_summary(), &ColorPalette::colored());
        assert!(colored.contains('\x1b'));
    }

    #[test]
    fn test_json_route_is_parseable() {
        let json = OutputFormat::Json
            .render_route(&library_summary(), &ColorPalette::plain())
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["total_weight"], 300.0);
        assert_eq!(value["waypoints"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["destination"]["id"], "library");
    }

    #[test]
    fn test_node_table_aligns_columns() {
        let graph = sample_graph().expect("sample graph");
        let nodes: Vec<&Node> = graph.nodes().iter().take(2).collect();
        let table = render_node_table(&nodes, &ColorPalette::plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Id         Name              Category");
        assert_eq!(lines[1], "main_gate  Main Gate         gate");
        assert_eq!(lines[2], "registrar  Registrar Office  administrative");
    }

    #[test]
    fn test_node_table_pads_non_ascii_ids_by_character() {
        let graph = sample_graph().expect("sample graph");
        let mut cafe = graph.nodes()[0].clone();
        cafe.id = "café".to_string();
        cafe.name = "Café".to_string();
        let mut gate = graph.nodes()[0].clone();
        gate.id = "gate".to_string();
        gate.name = "Gate".to_string();

        let table = render_node_table(&[&cafe, &gate], &ColorPalette::plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Id    Name  Category");
        assert_eq!(lines[1], "café  Café  gate");
        assert_eq!(lines[2], "gate  Gate  gate");
    }
}
