//! Label-addressed graph store with a dense adjacency matrix
//!
//! This module provides a mutable graph store that uses FxHashMap
//! for O(1) label lookups during construction. Nodes are identified by
//! unique string labels and receive dense indices in insertion order.

use rustc_hash::FxHashMap;

use crate::error::GraphError;
use crate::pagerank::power::PowerIteration;
use crate::pagerank::PageRankResult;

/// A directed graph over labeled nodes, stored as a dense N×N binary
/// adjacency matrix.
///
/// `adj[i][j] == 1` iff an edge was added from node `i` to node `j`.
/// Self-loops are permitted; repeated edges collapse to a single entry.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Maps label -> node index
    label_to_index: FxHashMap<String, usize>,
    /// Labels in insertion order; `labels[i]` is the label of node `i`
    labels: Vec<String>,
    /// Dense adjacency matrix, row-major: `adj[src][dest]`
    adj: Vec<Vec<u8>>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph store with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_index: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            labels: Vec::with_capacity(node_capacity),
            adj: Vec::with_capacity(node_capacity),
        }
    }

    /// Add a node with the given label, returning its index.
    ///
    /// Idempotent: if the label is already present, the existing index is
    /// returned and the graph is unchanged. Otherwise the node receives the
    /// next index and the adjacency matrix grows to N×N, preserving existing
    /// entries and zero-filling the new row and column.
    pub fn add_node(&mut self, label: &str) -> usize {
        if let Some(&index) = self.label_to_index.get(label) {
            return index;
        }

        let index = self.labels.len();
        self.label_to_index.insert(label.to_string(), index);
        self.labels.push(label.to_string());

        for row in &mut self.adj {
            row.push(0);
        }
        self.adj.push(vec![0; index + 1]);

        index
    }

    /// Add a directed edge from `src` to `dest`.
    ///
    /// Both labels must already be present; referencing an unknown label is
    /// an error. Adding the same edge twice is idempotent.
    pub fn add_edge(&mut self, src: &str, dest: &str) -> Result<(), GraphError> {
        let src_index = self
            .index_of(src)
            .ok_or_else(|| GraphError::UnknownNode(src.to_string()))?;
        let dest_index = self
            .index_of(dest)
            .ok_or_else(|| GraphError::UnknownNode(dest.to_string()))?;

        self.adj[src_index][dest_index] = 1;
        Ok(())
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the index for a label
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    /// Get the label for a node index
    pub fn label_of(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|l| l.as_str())
    }

    /// Labels of all nodes, in insertion order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether an edge exists from `src` to `dest` (by index)
    pub fn adjacent(&self, src: usize, dest: usize) -> bool {
        self.adj
            .get(src)
            .and_then(|row| row.get(dest))
            .map(|&v| v == 1)
            .unwrap_or(false)
    }

    /// All edges as `(src, dest)` label pairs, ordered by source index
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        for (src, row) in self.adj.iter().enumerate() {
            for (dest, &v) in row.iter().enumerate() {
                if v == 1 {
                    out.push((self.labels[src].as_str(), self.labels[dest].as_str()));
                }
            }
        }
        out
    }

    /// Get the total number of edges
    pub fn edge_count(&self) -> usize {
        self.adj
            .iter()
            .map(|row| row.iter().filter(|&&v| v == 1).count())
            .sum()
    }

    /// Out-degree of every node: `out_degrees()[i]` is the row sum of row `i`
    pub fn out_degrees(&self) -> Vec<usize> {
        self.adj
            .iter()
            .map(|row| row.iter().map(|&v| v as usize).sum())
            .collect()
    }

    /// Compute PageRank with the default configuration
    /// (damping 0.75, 100 iterations max, tolerance 1e-6).
    ///
    /// Scores are ordered by node insertion index. Use
    /// [`PowerIteration`](crate::PowerIteration) directly for custom
    /// parameters or per-iteration observation.
    pub fn compute_pagerank(&self) -> Result<PageRankResult, GraphError> {
        PowerIteration::default().run(self)
    }
}
