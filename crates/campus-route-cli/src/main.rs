use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use campus_route_cli::commands::nodes::handle_nodes_command;
use campus_route_cli::commands::route::{handle_route_command, RouteCommandArgs};
use campus_route_cli::commands::search::handle_search_command;
use campus_route_cli::commands::validate::handle_validate_command;
use campus_route_cli::commands::CommandContext;
use campus_route_cli::logging::{init_logging, LoggingConfig};
use campus_route_cli::output::OutputFormat;
use campus_route_cli::terminal::ColorPalette;
use campus_route_lib::Category;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus destination search and walking directions")]
struct Cli {
    /// Dataset file to load. Falls back to CAMPUS_ROUTE_DATASET, the data
    /// directory, then the bundled ASTU sample.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors (NO_COLOR and TERM=dumb are honoured as well).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walking directions to a destination.
    Route(RouteArgs),
    /// Rank places matching a free-text query.
    Search {
        /// Text to look for in names, descriptions, and categories.
        query: String,
        /// Maximum number of candidates to show.
        #[arg(
            long,
            default_value_t = 5,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: usize,
    },
    /// List places in dataset order.
    Nodes {
        /// Only list places of this category.
        #[arg(long)]
        category: Option<Category>,
    },
    /// Load the dataset and report whether it is valid.
    Validate,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Destination as free text, e.g. "library".
    #[arg(long, conflicts_with = "to_id", required_unless_present = "to_id")]
    to: Option<String>,
    /// Destination node id, e.g. "block_500".
    #[arg(long = "to-id")]
    to_id: Option<String>,
    /// Starting node id. Defaults to the dataset's default origin.
    #[arg(long)]
    from: Option<String>,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            to: args.to,
            to_id: args.to_id,
            from: args.from,
        }
    }
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();

    let ctx = CommandContext {
        dataset: cli.dataset,
        format: cli.format,
        palette: ColorPalette::for_flags(cli.no_color),
    };

    match cli.command {
        Command::Route(args) => handle_route_command(&ctx, &args.into()),
        Command::Search { query, limit } => handle_search_command(&ctx, &query, limit),
        Command::Nodes { category } => handle_nodes_command(&ctx, category),
        Command::Validate => handle_validate_command(&ctx),
    }
}
