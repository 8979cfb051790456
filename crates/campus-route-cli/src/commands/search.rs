//! Search command handler: ranked destination candidates for a query.

use anyhow::Result;

use campus_route_lib::{resolve, suggestions, CampusGraph};

use super::CommandContext;
use crate::output::OutputFormat;

/// Number of "did you mean" names printed when nothing matches.
const MAX_SUGGESTIONS: usize = 3;

/// Handle the search subcommand.
pub fn handle_search_command(ctx: &CommandContext, query: &str, limit: usize) -> Result<()> {
    let (_, graph) = ctx.load_graph()?;
    print!("{}", render_search(&graph, ctx.format, query, limit)?);
    Ok(())
}

fn render_search(graph: &CampusGraph, format: OutputFormat, query: &str, limit: usize) -> Result<String> {
    let mut candidates = resolve(graph, query);

    if candidates.is_empty() && format != OutputFormat::Json {
        let mut message = format!("No places match '{}'.", query.trim());
        let hints = suggestions(graph, query, MAX_SUGGESTIONS);
        if !hints.is_empty() {
            message.push_str(&format!(" Did you mean: {}?", hints.join(", ")));
        }
        message.push('\n');
        return Ok(message);
    }

    candidates.truncate(limit);
    format.render_candidates(&candidates)
}
