//! Graph construction and representation
//!
//! This module provides the label-addressed graph store
//! that backs the PageRank pipeline.

pub mod store;

pub use store::GraphStore;
