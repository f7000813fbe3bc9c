//! Graph construction and representation
//!
//! This module provides efficient graph building and storage
//! for the directed link graphs the scoring engines iterate over.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::{DiGraph, GraphStatistics, NodeDegrees};
