//! PageRank power iteration
//!
//! This module provides the power-iteration engine and its result types.

pub mod observer;
pub mod power;

use serde::Serialize;

/// Terminal state of a power-iteration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The L1 difference between successive rank vectors fell below the
    /// configured tolerance.
    Converged,
    /// The iteration cap was reached first. The last computed vector is
    /// still returned; exhaustion is a defined outcome, not an error.
    Exhausted,
}

/// Result of a PageRank computation
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Scores for each node, ordered by node insertion index
    pub scores: Vec<f64>,
    /// L1 difference recorded at each iteration, in order
    pub convergence_history: Vec<f64>,
    /// Number of iterations performed (1-based, includes the converging one)
    pub iterations: usize,
    /// How the iteration terminated
    pub termination: Termination,
}

impl PageRankResult {
    /// Whether the run converged before the iteration cap
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Get the score for a specific node index
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Get top N nodes by score as `(index, score)` pairs
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }
}
