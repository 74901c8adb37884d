//! Dense matrix representation and the PageRank matrix builders
//!
//! The pipeline materializes three N×N matrices per compute call: the
//! column-stochastic transition matrix, the uniform teleportation matrix,
//! and their damped blend (the Google matrix). All three are ephemeral and
//! rebuilt from scratch every time.

pub mod builders;

pub use builders::{google_matrix, teleportation_matrix, transition_matrix};

/// A dense N×N matrix of `f64`, stored row-major.
///
/// Matrices in this crate follow the destination-major convention:
/// `get(dest, src)` holds the probability mass flowing from `src` to `dest`,
/// so stochastic matrices are column-stochastic.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create an N×N matrix of zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Create an N×N matrix with every entry set to `value`
    pub fn filled(n: usize, value: f64) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Side length N
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the entry at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// Set the entry at `(row, col)`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n + col] = value;
    }

    /// Sum of column `col`
    pub fn column_sum(&self, col: usize) -> f64 {
        (0..self.n).map(|row| self.get(row, col)).sum()
    }

    /// Borrow row `row` as a slice
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }
}
