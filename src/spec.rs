//! Graph specification types.
//!
//! A [`GraphSpec`] is a serde-deserializable description of a graph and
//! optional rank parameters, suitable for loading from a JSON config file.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "nodes": ["a", "b", "c"],
//!   "edges": [["a", "b"], ["a", "c"], ["c", "a"]],
//!   "parameters": { "damping": 0.75, "max_iterations": 100 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::graph::store::GraphStore;
use crate::pagerank::power::RankConfig;

/// A declarative graph description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Node labels, in the order they should receive indices.
    pub nodes: Vec<String>,

    /// Directed edges as `[src, dest]` label pairs.
    #[serde(default)]
    pub edges: Vec<(String, String)>,

    /// Optional overrides for the power-iteration parameters.
    /// Omitted fields fall back to the engine defaults.
    #[serde(default)]
    pub parameters: RankParameters,
}

/// Partial rank parameters; each field overrides the corresponding
/// [`RankConfig`] default when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankParameters {
    #[serde(default)]
    pub damping: Option<f64>,

    #[serde(default)]
    pub max_iterations: Option<usize>,

    #[serde(default)]
    pub tolerance: Option<f64>,
}

impl RankParameters {
    /// Merge these overrides over the default [`RankConfig`].
    pub fn rank_config(&self) -> RankConfig {
        let defaults = RankConfig::default();
        RankConfig {
            damping: self.damping.unwrap_or(defaults.damping),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        }
    }
}

impl GraphSpec {
    /// Parse a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a [`GraphStore`] from this spec.
    ///
    /// Nodes are inserted in listed order; an edge referencing a label not
    /// in `nodes` surfaces [`GraphError::UnknownNode`](crate::GraphError).
    pub fn build_graph(&self) -> Result<GraphStore, SpecError> {
        let mut graph = GraphStore::with_capacity(self.nodes.len());
        for label in &self.nodes {
            graph.add_node(label);
        }
        for (src, dest) in &self.edges {
            graph.add_edge(src, dest)?;
        }
        Ok(graph)
    }

    /// The effective rank configuration for this spec.
    pub fn rank_config(&self) -> RankConfig {
        self.parameters.rank_config()
    }
}
