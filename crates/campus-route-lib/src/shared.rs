//! Publication point for the current campus graph.
//!
//! Readers take an `Arc` snapshot and route against it for as long as they
//! like. Reloading builds the replacement graph completely before swapping the
//! pointer, so a failed reload leaves the published graph untouched and
//! in-flight readers never observe a partially built graph.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::dataset::load_graph;
use crate::error::Result;
use crate::graph::CampusGraph;

/// Cheaply cloneable handle to the currently published graph.
#[derive(Debug, Clone)]
pub struct SharedGraph {
    current: Arc<RwLock<Arc<CampusGraph>>>,
}

impl SharedGraph {
    pub fn new(graph: CampusGraph) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// The graph published at the time of the call.
    pub fn snapshot(&self) -> Arc<CampusGraph> {
        Arc::clone(&self.current.read())
    }

    /// Publish `graph`, returning the graph it replaced.
    pub fn replace(&self, graph: CampusGraph) -> Arc<CampusGraph> {
        let nodes = graph.node_count();
        let edges = graph.edge_count();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(graph));
        info!(nodes, edges, "published new campus graph");
        previous
    }

    /// Load a dataset from `path` and publish it once it validates.
    pub fn reload_from_path(&self, path: &Path) -> Result<Arc<CampusGraph>> {
        let graph = load_graph(path)?;
        Ok(self.replace(graph))
    }
}

impl From<CampusGraph> for SharedGraph {
    fn from(graph: CampusGraph) -> Self {
        Self::new(graph)
    }
}
