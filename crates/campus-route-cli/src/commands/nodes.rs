//! Nodes command handler: the campus directory.

use anyhow::Result;

use campus_route_lib::{Category, Node};

use super::CommandContext;

/// Handle the nodes subcommand, optionally filtered to one category.
pub fn handle_nodes_command(ctx: &CommandContext, category: Option<Category>) -> Result<()> {
    let (_, graph) = ctx.load_graph()?;
    let nodes: Vec<&Node> = match category {
        Some(category) => graph.nodes_in(category).collect(),
        None => graph.nodes().iter().collect(),
    };

    if nodes.is_empty() {
        println!("No places in this dataset match the requested category.");
        return Ok(());
    }

    print!("{}", ctx.format.render_nodes(&nodes, &ctx.palette)?);
    Ok(())
}
