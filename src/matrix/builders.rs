//! Transition, teleportation, and Google matrix builders
//!
//! All builders are pure functions of their inputs: building twice from an
//! unchanged graph yields bit-identical matrices. They require N ≥ 1; the
//! power-iteration engine rejects empty graphs before calling them.

use super::Matrix;
use crate::graph::store::GraphStore;

/// Build the column-stochastic transition matrix of a graph.
///
/// Entry `(dest, src)` holds the probability of moving from `src` to `dest`:
/// `adj[src][dest] / out_degree(src)` for nodes with outgoing edges. A
/// dangling node (out-degree 0) gets a uniform column of `1/N`, so its rank
/// mass redistributes over the whole graph instead of leaking.
pub fn transition_matrix(graph: &GraphStore) -> Matrix {
    let n = graph.node_count();
    let out_degrees = graph.out_degrees();
    let mut transition = Matrix::zeros(n);

    for src in 0..n {
        let degree = out_degrees[src];
        if degree == 0 {
            let uniform = 1.0 / n as f64;
            for dest in 0..n {
                transition.set(dest, src, uniform);
            }
        } else {
            for dest in 0..n {
                if graph.adjacent(src, dest) {
                    transition.set(dest, src, 1.0 / degree as f64);
                }
            }
        }
    }

    transition
}

/// Build the uniform teleportation matrix: every entry is `1/N`.
pub fn teleportation_matrix(n: usize) -> Matrix {
    Matrix::filled(n, 1.0 / n as f64)
}

/// Blend transition and teleportation matrices into the Google matrix.
///
/// Elementwise `G = damping·T + (1-damping)·E`. For `damping` in `[0, 1]`
/// this is a convex combination of two column-stochastic matrices and is
/// therefore column-stochastic itself. The damping range is enforced at
/// engine configuration time, not here.
pub fn google_matrix(transition: &Matrix, teleportation: &Matrix, damping: f64) -> Matrix {
    let n = transition.n();
    debug_assert_eq!(n, teleportation.n());

    let mut google = Matrix::zeros(n);
    for row in 0..n {
        for col in 0..n {
            let blended =
                damping * transition.get(row, col) + (1.0 - damping) * teleportation.get(row, col);
            google.set(row, col, blended);
        }
    }
    google
}
