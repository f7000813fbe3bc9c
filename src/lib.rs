//! # linkrank
//!
//! PageRank and HITS link analysis over small directed graphs, with
//! ranking comparison and visualization projection.
//!
//! The crate is the scoring core behind a network-analysis product: the
//! caller supplies a directed edge list and a configuration, and gets back
//! score mappings, top-k rankings, convergence metadata, comparison
//! insights, and render-ready node categories. Transport, charts, and graph
//! layout live outside.
//!
//! ```
//! use linkrank::{analysis, AnalysisConfig, DiGraph, GraphBuilder};
//!
//! let builder = GraphBuilder::from_pairs([("a", "b"), ("b", "c"), ("c", "a")]);
//! let graph = DiGraph::from_builder(&builder);
//!
//! let result = analysis::compare(&graph, &AnalysisConfig::default()).unwrap();
//! assert!(result.pagerank.converged);
//! assert_eq!(result.pagerank.top_nodes.len(), 3);
//! ```
//!
//! Every scoring request is a pure computation over an immutable
//! [`DiGraph`] snapshot: no shared mutable state, so independent requests
//! run in parallel without locks, and a compare request runs its two
//! engines concurrently over the same graph.

pub mod analysis;
pub mod error;
pub mod graph;
pub mod hits;
pub mod pagerank;
pub mod ranking;
pub mod types;
pub mod viz;

pub use analysis::{CompareResponse, HitsResponse, PageRankResponse};
pub use error::{AnalysisError, ErrorCode, Result};
pub use graph::{DiGraph, GraphBuilder, GraphStatistics, NodeDegrees};
pub use hits::{Hits, HitsResult};
pub use pagerank::{PageRank, PageRankResult};
pub use ranking::{insights, overlap, top_k, RankingEntry};
pub use types::AnalysisConfig;
pub use viz::{NodeCategory, VisualizationData};
