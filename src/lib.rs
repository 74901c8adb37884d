//! # rankmat
//!
//! PageRank centrality over labeled directed graphs, computed with the
//! classic power-iteration method on a dense, damped, teleportation-augmented
//! transition matrix (the "Google matrix").
//!
//! The pipeline has four stages, each rebuilt from scratch on every compute
//! call:
//!
//! 1. Out-degree derivation from the adjacency matrix
//! 2. Column-stochastic transition matrix (dangling columns made uniform)
//! 3. Uniform teleportation matrix
//! 4. Google-matrix blend `G = α·T + (1-α)·E`, iterated to a fixed point
//!
//! # Quick start
//!
//! ```rust
//! use rankmat::GraphStore;
//!
//! let mut graph = GraphStore::new();
//! graph.add_node("a");
//! graph.add_node("b");
//! graph.add_node("c");
//! graph.add_edge("a", "b")?;
//! graph.add_edge("a", "c")?;
//! graph.add_edge("c", "a")?;
//!
//! let result = graph.compute_pagerank()?;
//! assert!(result.is_converged());
//! assert!((result.scores.iter().sum::<f64>() - 1.0).abs() < 1e-6);
//! # Ok::<(), rankmat::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod matrix;
pub mod pagerank;
pub mod spec;

pub use error::{ConfigError, GraphError, SpecError};
pub use graph::store::GraphStore;
pub use matrix::{google_matrix, teleportation_matrix, transition_matrix, Matrix};
pub use pagerank::observer::IterationObserver;
pub use pagerank::power::{PowerIteration, RankConfig};
pub use pagerank::{PageRankResult, Termination};
pub use spec::GraphSpec;
