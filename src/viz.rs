//! Visualization projection
//!
//! Maps raw scores onto node categories and display sizes for external
//! rendering. The category thresholds depend on ranking semantics (top-k
//! membership), which is why this projection lives in the core rather than
//! the rendering layer.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::graph::DiGraph;
use crate::ranking::{top_k, RankingEntry};

/// Node coloring category from top-k membership.
///
/// Precedence for nodes in more than one top-k set:
/// pagerank+authority > pagerank+hub > authority+hub, then the single
/// categories pagerank > authority > hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    TopPagerank,
    TopAuthority,
    TopHub,
    BothPagerankAuthority,
    BothPagerankHub,
    BothAuthorityHub,
    None,
}

/// Resolve a category from top-k memberships.
pub fn categorize(in_pagerank: bool, in_authority: bool, in_hub: bool) -> NodeCategory {
    match (in_pagerank, in_authority, in_hub) {
        (true, true, _) => NodeCategory::BothPagerankAuthority,
        (true, false, true) => NodeCategory::BothPagerankHub,
        (false, true, true) => NodeCategory::BothAuthorityHub,
        (true, false, false) => NodeCategory::TopPagerank,
        (false, true, false) => NodeCategory::TopAuthority,
        (false, false, true) => NodeCategory::TopHub,
        (false, false, false) => NodeCategory::None,
    }
}

/// Display size from a PageRank score: a fixed baseline plus a multiple of
/// the score. Monotonic in the score and never zero or negative.
pub fn display_size(pagerank_score: f64) -> f64 {
    10.0 + pagerank_score * 100.0
}

/// A node prepared for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct VizNode {
    pub id: String,
    pub pagerank: f64,
    pub authority: f64,
    pub hub: f64,
    pub category: NodeCategory,
    pub size: f64,
}

/// A directed edge prepared for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct VizEdge {
    pub source: String,
    pub target: String,
}

/// Per-node categories and sizes plus the edge list, for external rendering.
#[derive(Debug, Clone, Serialize)]
pub struct VisualizationData {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
}

/// Project both algorithms' scores onto render data.
///
/// `pagerank`, `authority`, and `hub` are node-id-indexed score vectors over
/// `graph`; `k` is the ranking size used for category membership.
pub fn project(
    graph: &DiGraph,
    pagerank: &[f64],
    authority: &[f64],
    hub: &[f64],
    k: usize,
) -> VisualizationData {
    let labels = graph.labels();

    let top_set = |entries: Vec<RankingEntry>| -> FxHashSet<String> {
        entries.into_iter().map(|entry| entry.node).collect()
    };
    let top_pagerank = top_set(top_k(pagerank, labels, k));
    let top_authorities = top_set(top_k(authority, labels, k));
    let top_hubs = top_set(top_k(hub, labels, k));

    let nodes = labels
        .iter()
        .enumerate()
        .map(|(id, label)| {
            let pr = pagerank.get(id).copied().unwrap_or(0.0);
            VizNode {
                id: label.clone(),
                pagerank: pr,
                authority: authority.get(id).copied().unwrap_or(0.0),
                hub: hub.get(id).copied().unwrap_or(0.0),
                category: categorize(
                    top_pagerank.contains(label),
                    top_authorities.contains(label),
                    top_hubs.contains(label),
                ),
                size: display_size(pr),
            }
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|&(from, to)| VizEdge {
            source: graph.label(from).to_string(),
            target: graph.label(to).to_string(),
        })
        .collect();

    VisualizationData { nodes, edges }
}
