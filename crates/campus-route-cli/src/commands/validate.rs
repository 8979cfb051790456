//! Validate command handler: load a dataset and report its shape.

use anyhow::Result;
use serde::Serialize;

use campus_route_lib::{CampusGraph, DatasetSource};

use super::CommandContext;
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct DatasetReport {
    source: String,
    nodes: usize,
    edges: usize,
    default_origin: Option<String>,
}

impl DatasetReport {
    fn new(source: &DatasetSource, graph: &CampusGraph) -> Self {
        Self {
            source: source.to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            default_origin: graph.default_origin().map(|node| node.id.clone()),
        }
    }
}

/// Handle the validate subcommand. Validation failures surface as errors.
pub fn handle_validate_command(ctx: &CommandContext) -> Result<()> {
    let (source, graph) = ctx.load_graph()?;
    let report = DatasetReport::new(&source, &graph);

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let p = &ctx.palette;
    println!("{}Dataset OK:{} {}", p.green, p.reset, report.source);
    println!("  Nodes:          {}", report.nodes);
    println!("  Edges:          {}", report.edges);
    println!(
        "  Default origin: {}",
        report.default_origin.as_deref().unwrap_or("(none)")
    );
    Ok(())
}
