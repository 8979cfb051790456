//! Subcommand handlers. `main.rs` parses arguments and dispatches here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use campus_route_lib::{resolve_dataset_source, CampusGraph, DatasetSource};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

pub mod nodes;
pub mod route;
pub mod search;
pub mod validate;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Explicit `--dataset` path, if any.
    pub dataset: Option<PathBuf>,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}

impl CommandContext {
    /// Resolve the dataset source and build its graph.
    pub fn load_graph(&self) -> Result<(DatasetSource, CampusGraph)> {
        let source = resolve_dataset_source(self.dataset.as_deref())
            .context("failed to locate a campus dataset")?;
        debug!(source = %source, "using campus dataset");
        let graph = source
            .load()
            .with_context(|| format!("failed to load campus dataset from {source}"))?;
        Ok((source, graph))
    }
}
