//! Route command handler.

use anyhow::{bail, Result};

use campus_route_lib::{
    plan_route, render_candidates, CampusGraph, RouteRequest, RouteSummary, RoutingError,
};

use super::CommandContext;

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Free-text destination.
    pub to: Option<String>,
    /// Exact destination node id.
    pub to_id: Option<String>,
    /// Starting node id; the dataset default when omitted.
    pub from: Option<String>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> Result<RouteRequest> {
        let request = match (&self.to, &self.to_id) {
            (Some(query), None) => RouteRequest::query(query.as_str()),
            (None, Some(id)) => RouteRequest::node(id.as_str()),
            (Some(_), Some(_)) => bail!("use either --to or --to-id, not both"),
            (None, None) => bail!("a destination is required: pass --to <QUERY> or --to-id <ID>"),
        };
        Ok(match &self.from {
            Some(origin) => request.from_origin(origin.as_str()),
            None => request,
        })
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(ctx: &CommandContext, args: &RouteCommandArgs) -> Result<()> {
    let request = args.to_request()?;
    let (_, graph) = ctx.load_graph()?;

    let result = match plan_route(&graph, &request) {
        Ok(result) => result,
        Err(err) => bail!(format_routing_error(&graph, args, &err)),
    };

    let summary = RouteSummary::from_result(&result);
    print!("{}", ctx.format.render_route(&summary, &ctx.palette)?);
    Ok(())
}

/// User-facing copy for each routing failure.
pub fn format_routing_error(graph: &CampusGraph, args: &RouteCommandArgs, err: &RoutingError) -> String {
    match err {
        RoutingError::EmptyQuery => {
            "Destination query is empty. Try a place name such as 'library'.".to_string()
        }
        RoutingError::AmbiguousQuery(candidates) => format!(
            "'{}' matches several places equally well:\n{}Pick one with --to-id <ID>.",
            args.to.as_deref().unwrap_or_default().trim(),
            render_candidates(candidates)
        ),
        RoutingError::NoMatch { query, suggestions } => {
            let mut message = format!("No destination matches '{query}'.");
            match suggestions.as_slice() {
                [] => {}
                [only] => message.push_str(&format!(" Did you mean '{only}'?")),
                many => {
                    let joined = many
                        .iter()
                        .map(|s| format!("'{s}'"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    message.push_str(&format!(" Did you mean one of: {joined}?"));
                }
            }
            message
        }
        RoutingError::NotFound(id) => format!(
            "Unknown place id '{id}'. Run `campus-route nodes` to list valid ids."
        ),
        RoutingError::Unreachable {
            origin,
            destination,
        } => format!(
            "No route available between {} and {}; no walkway connects them.",
            describe(graph, origin),
            describe(graph, destination)
        ),
        RoutingError::NoOrigin => {
            "No starting point given and the dataset has no default origin. Pass --from <ID>."
                .to_string()
        }
    }
}

fn describe(graph: &CampusGraph, id: &str) -> String {
    match graph.node(id) {
        Some(node) => format!("{} ({})", node.name, node.id),
        None => id.to_string(),
    }
}
