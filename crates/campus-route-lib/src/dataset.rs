use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{CampusGraph, Category, Edge, Node, Position};

/// Environment variable that points at a dataset file.
pub const DATASET_ENV_VAR: &str = "CAMPUS_ROUTE_DATASET";

/// Filename looked up in the platform data directory.
const DATASET_FILENAME: &str = "campus.json";

/// ASTU sample campus compiled into the library.
const BUNDLED_DATASET: &str = include_str!("../data/astu_campus.json");

/// Node record as stored in a dataset file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub x: f64,
    pub y: f64,
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        Node {
            id: record.id,
            name: record.name,
            description: record.description,
            category: record.category,
            position: Position {
                x: record.x,
                y: record.y,
            },
        }
    }
}

/// Parsed, not yet validated campus dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub default_origin: Option<String>,
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate the records and build the immutable graph.
    pub fn into_graph(self) -> Result<CampusGraph> {
        let nodes = self.nodes.into_iter().map(Node::from).collect();
        let graph = CampusGraph::build(nodes, &self.edges)?;
        let graph = match self.default_origin.as_deref() {
            Some(origin) => graph.with_default_origin(origin)?,
            None => graph,
        };
        Ok(graph)
    }
}

/// The bundled ASTU sample dataset.
pub fn sample_dataset() -> Result<Dataset> {
    Dataset::from_json_str(BUNDLED_DATASET)
}

/// Graph built from the bundled ASTU sample dataset.
pub fn sample_graph() -> Result<CampusGraph> {
    sample_dataset()?.into_graph()
}

/// Read, validate, and build the graph stored at `path`.
pub fn load_graph(path: &Path) -> Result<CampusGraph> {
    debug!(path = %path.display(), "loading campus dataset");
    let graph = Dataset::from_path(path)?.into_graph()?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "campus dataset loaded"
    );
    Ok(graph)
}

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Bundled,
}

impl DatasetSource {
    pub fn load(&self) -> Result<CampusGraph> {
        match self {
            DatasetSource::File(path) => load_graph(path),
            DatasetSource::Bundled => sample_graph(),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Bundled => f.write_str("bundled ASTU sample"),
        }
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "astu", "campus-route").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Pick the dataset to load.
///
/// Resolution order: `explicit`, then the [`DATASET_ENV_VAR`] environment
/// variable, then `campus.json` in the platform data directory when present,
/// and finally the bundled sample. Explicit and environment paths must exist.
pub fn resolve_dataset_source(explicit: Option<&Path>) -> Result<DatasetSource> {
    if let Some(path) = explicit {
        return existing_file(path.to_path_buf());
    }

    if let Ok(value) = env::var(DATASET_ENV_VAR) {
        if !value.trim().is_empty() {
            return existing_file(PathBuf::from(value));
        }
    }

    match default_dataset_path() {
        Ok(path) if path.is_file() => return Ok(DatasetSource::File(path)),
        Ok(path) => debug!(path = %path.display(), "no dataset in data directory"),
        Err(err) => debug!(error = %err, "data directory unavailable"),
    }

    Ok(DatasetSource::Bundled)
}

fn existing_file(path: PathBuf) -> Result<DatasetSource> {
    if path.is_file() {
        Ok(DatasetSource::File(path))
    } else {
        Err(Error::DatasetNotFound { path })
    }
}
