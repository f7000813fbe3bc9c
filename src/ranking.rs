//! Ranking extraction and cross-algorithm comparison
//!
//! Top-k extraction is deterministic: descending by score with ties broken
//! by first-seen node order (node ids are assigned in first-seen order, so a
//! stable sort on the id-indexed score vector gives exactly that).

use serde::Serialize;

/// A single ranking entry: node label and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub node: String,
    pub score: f64,
}

/// Return the `k` highest-scoring nodes, descending by score.
///
/// `scores` is indexed by node id and `labels` holds the matching labels in
/// first-seen order. With `k` larger than the node count, all nodes are
/// returned.
pub fn top_k(scores: &[f64], labels: &[String], k: usize) -> Vec<RankingEntry> {
    let mut indexed: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    // Stable sort: equal scores keep ascending id (first-seen) order.
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed.truncate(k);
    indexed
        .into_iter()
        .map(|(id, score)| RankingEntry {
            node: labels[id].clone(),
            score,
        })
        .collect()
}

/// Set intersection of two rankings' node labels, ordered by the first
/// ranking.
///
/// Inputs are expected to already be top-k slices produced by [`top_k`];
/// this function intersects whatever it is given and applies no further
/// truncation.
pub fn overlap(ranking_a: &[RankingEntry], ranking_b: &[RankingEntry]) -> Vec<String> {
    ranking_a
        .iter()
        .filter(|entry| ranking_b.iter().any(|other| other.node == entry.node))
        .map(|entry| entry.node.clone())
        .collect()
}

/// Human-readable comparison insights.
///
/// A pure function of the three rankings; the output strings are a
/// deterministic function of their inputs so they are reproducible in tests.
pub fn insights(
    top_pagerank: &[RankingEntry],
    top_authorities: &[RankingEntry],
    top_hubs: &[RankingEntry],
) -> Vec<String> {
    let mut out = Vec::new();

    if let (Some(best_pr), Some(best_auth)) = (top_pagerank.first(), top_authorities.first()) {
        if best_pr.node == best_auth.node {
            out.push(format!(
                "Top PageRank node '{}' is also the top authority",
                best_pr.node
            ));
        } else {
            out.push(format!(
                "Top PageRank node '{}' differs from the top authority '{}'",
                best_pr.node, best_auth.node
            ));
        }
    }

    let overlap_authorities = overlap(top_pagerank, top_authorities);
    if overlap_authorities.is_empty() {
        out.push("No overlap between top PageRank nodes and top authorities".to_string());
    } else {
        out.push(format!(
            "{} node(s) appear in both top PageRank and top authorities: {}",
            overlap_authorities.len(),
            overlap_authorities.join(", ")
        ));
    }

    let overlap_hubs = overlap(top_pagerank, top_hubs);
    if overlap_hubs.is_empty() {
        out.push("No overlap between top PageRank nodes and top hubs".to_string());
    } else {
        out.push(format!(
            "{} node(s) appear in both top PageRank and top hubs: {}",
            overlap_hubs.len(),
            overlap_hubs.join(", ")
        ));
    }

    let reciprocal = overlap(top_authorities, top_hubs);
    if reciprocal.is_empty() {
        out.push("No node is simultaneously a top hub and a top authority".to_string());
    } else {
        out.push(format!(
            "{} node(s) are simultaneously top hubs and top authorities, \
             suggesting a reciprocal community: {}",
            reciprocal.len(),
            reciprocal.join(", ")
        ));
    }

    out
}
