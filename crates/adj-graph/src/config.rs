// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Graph descriptions loaded from YAML and the environment.
//!
//! ```yaml
//! nodes: 5
//! edges:
//!   - [0, 1]
//!   - [1, 2]
//!   - [0, 3]
//! ```
//!
//! Layers, later ones winning: built-in defaults, the YAML file, then
//! `ADJ_GRAPH_*` environment variables (e.g. `ADJ_GRAPH_NODES=7`).

use crate::errors::{GraphError, GraphResult};
use crate::graph::Graph;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

pub const ENV_PREFIX: &str = "ADJ_GRAPH_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub nodes: usize,
    pub edges: Vec<(usize, usize)>,
}

impl Default for GraphConfig {
    /// The five-node example graph: `0-1-2`, `0-3`, and `4` isolated.
    fn default() -> Self {
        Self {
            nodes: 5,
            edges: vec![(0, 1), (1, 2), (0, 3)],
        }
    }
}

impl GraphConfig {
    /// Loads a description from `path` (if given) over the defaults, then
    /// applies environment overrides.
    pub fn load(path: Option<&Path>) -> GraphResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(GraphConfig::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(GraphError::config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            info!(path = %path.display(), "loading graph description");
            figment = figment.merge(Yaml::file(path));
        }

        let config: GraphConfig = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| GraphError::config(e.to_string()))?;
        debug!(nodes = config.nodes, edges = config.edges.len(), "graph description loaded");
        Ok(config)
    }

    /// Appends edges, e.g. from the command line.
    pub fn with_edges(mut self, extra: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.edges.extend(extra);
        self
    }

    /// Builds the described graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::Config`] naming the first edge with an endpoint outside
    /// `0..nodes`.
    pub fn build(&self) -> GraphResult<Graph> {
        if let Some((i, j)) = self
            .edges
            .iter()
            .find(|(i, j)| *i >= self.nodes || *j >= self.nodes)
        {
            return Err(GraphError::config(format!(
                "edge ({i}, {j}) references a node outside 0..{}",
                self.nodes
            )));
        }
        Graph::from_edges(self.nodes, self.edges.iter().copied())
    }
}
