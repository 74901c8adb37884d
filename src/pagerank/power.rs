//! Power-iteration engine
//!
//! Materializes the transition, teleportation, and Google matrices from the
//! current graph state, then repeatedly applies the Google matrix to a rank
//! vector until the L1 difference between successive vectors falls below the
//! tolerance or the iteration cap is reached.

use log::debug;
use serde::{Deserialize, Serialize};

use super::observer::{IterationObserver, NoopObserver};
use super::{PageRankResult, Termination};
use crate::error::{ConfigError, GraphError};
use crate::graph::store::GraphStore;
use crate::matrix::{google_matrix, teleportation_matrix, transition_matrix};

/// Power-iteration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor: probability mass following graph edges rather than
    /// teleporting uniformly. Must lie in `[0, 1]`.
    pub damping: f64,
    /// Iteration cap
    pub max_iterations: usize,
    /// Convergence threshold on the L1 difference between successive vectors
    pub tolerance: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.75,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl RankConfig {
    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check the damping constraint. A damping factor outside `[0, 1]`
    /// makes the Google matrix no longer column-stochastic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.damping) || self.damping.is_nan() {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}

/// Power-iteration engine over a [`GraphStore`].
///
/// Construction validates the configuration, so a held engine always has a
/// usable damping factor.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    config: RankConfig,
}

impl Default for PowerIteration {
    fn default() -> Self {
        // The default config is valid by construction.
        Self {
            config: RankConfig::default(),
        }
    }
}

impl PowerIteration {
    /// Create an engine from a validated configuration
    pub fn new(config: RankConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Run PageRank on a graph.
    ///
    /// Fails with [`GraphError::EmptyGraph`] when the graph has no nodes;
    /// reaching the iteration cap is not an error and still yields a result.
    pub fn run(&self, graph: &GraphStore) -> Result<PageRankResult, GraphError> {
        self.run_observed(graph, &mut NoopObserver)
    }

    /// Run PageRank, notifying `observer` after every iteration.
    pub fn run_observed(
        &self,
        graph: &GraphStore,
        observer: &mut dyn IterationObserver,
    ) -> Result<PageRankResult, GraphError> {
        let n = graph.node_count();
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }

        // Matrices are rebuilt fresh from the current adjacency state;
        // nothing is cached across runs.
        let transition = transition_matrix(graph);
        let teleportation = teleportation_matrix(n);
        let google = google_matrix(&transition, &teleportation, self.config.damping);

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let mut convergence_history = Vec::new();

        let mut iterations = 0;
        let mut termination = Termination::Exhausted;

        while iterations < self.config.max_iterations {
            iterations += 1;

            for (row, slot) in new_scores.iter_mut().enumerate() {
                *slot = google
                    .row(row)
                    .iter()
                    .zip(scores.iter())
                    .map(|(g, s)| g * s)
                    .sum();
            }

            let delta: f64 = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            convergence_history.push(delta);

            std::mem::swap(&mut scores, &mut new_scores);

            debug!("pagerank iteration {iterations}: delta={delta:e}");
            observer.on_iteration(iterations, &scores, delta);

            if delta < self.config.tolerance {
                termination = Termination::Converged;
                break;
            }
        }

        Ok(PageRankResult {
            scores,
            convergence_history,
            iterations,
            termination,
        })
    }
}
