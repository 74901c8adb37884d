//! Error types for graph construction, engine configuration, and spec loading.

use thiserror::Error;

/// Errors arising from graph mutation or PageRank computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge referenced a label that was never added as a node.
    ///
    /// Surfaced as an error rather than dropped, so bulk loads cannot lose
    /// edges unnoticed.
    #[error("unknown node label \"{0}\"")]
    UnknownNode(String),

    /// PageRank was requested on a graph with no nodes. The matrix builders
    /// require N ≥ 1, so this is rejected before any matrix is built.
    #[error("cannot compute PageRank on an empty graph")]
    EmptyGraph,
}

/// Errors arising from invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Damping factor outside `[0, 1]`. Values outside this range break the
    /// column-stochastic guarantee of the Google matrix.
    #[error("damping factor {0} is outside [0, 1]")]
    InvalidDamping(f64),
}

/// Errors arising while loading a JSON graph spec.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid graph spec: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
