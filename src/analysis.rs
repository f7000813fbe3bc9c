//! Request/response boundary for the analysis core.
//!
//! Engines and rankings work on node-id-indexed vectors; this module owns
//! string materialization (label-keyed score maps) and is the contract
//! consumed by the excluded transport layer. Configuration is validated here
//! before any engine invocation.
//!
//! A compare request runs PageRank and HITS concurrently over the shared
//! immutable graph and joins both results for the comparison step — the only
//! ordering dependency in the system.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::Result;
use crate::graph::DiGraph;
use crate::hits::Hits;
use crate::pagerank::PageRank;
use crate::ranking::{insights, overlap, top_k, RankingEntry};
use crate::types::AnalysisConfig;
use crate::viz::{self, VisualizationData};

/// Label-keyed score map, the external form of a score vector.
pub type ScoreMap = FxHashMap<String, f64>;

/// One recorded PageRank iteration.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSnapshot {
    pub iteration: usize,
    pub scores: ScoreMap,
}

/// One recorded HITS iteration.
#[derive(Debug, Clone, Serialize)]
pub struct HitsScoreSnapshot {
    pub iteration: usize,
    pub authority_scores: ScoreMap,
    pub hub_scores: ScoreMap,
}

/// PageRank output at the external boundary.
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResponse {
    pub node_scores: ScoreMap,
    pub top_nodes: Vec<RankingEntry>,
    pub iterations: usize,
    pub converged: bool,
    pub damping_factor: f64,
    pub convergence_threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ScoreSnapshot>>,
}

/// HITS output at the external boundary.
#[derive(Debug, Clone, Serialize)]
pub struct HitsResponse {
    pub authority_scores: ScoreMap,
    pub hub_scores: ScoreMap,
    pub top_authorities: Vec<RankingEntry>,
    pub top_hubs: Vec<RankingEntry>,
    pub iterations: usize,
    pub converged: bool,
    pub convergence_threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HitsScoreSnapshot>>,
}

/// Combined output of a compare request.
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub pagerank: PageRankResponse,
    pub hits: HitsResponse,
    /// Nodes in both top PageRank and top authorities, PageRank order.
    pub overlap_authorities: Vec<String>,
    /// Nodes in both top PageRank and top hubs, PageRank order.
    pub overlap_hubs: Vec<String>,
    pub insights: Vec<String>,
}

fn label_scores(labels: &[String], scores: &[f64]) -> ScoreMap {
    labels
        .iter()
        .zip(scores)
        .map(|(label, &score)| (label.clone(), score))
        .collect()
}

/// Run PageRank and materialize the external response.
pub fn run_pagerank(graph: &DiGraph, config: &AnalysisConfig) -> Result<PageRankResponse> {
    config.validate()?;
    let result = PageRank::new(
        config.damping_factor,
        config.max_iterations,
        config.convergence_threshold,
    )
    .with_record_history(config.record_history)
    .run(graph);

    let labels = graph.labels();
    Ok(PageRankResponse {
        node_scores: label_scores(labels, &result.scores),
        top_nodes: top_k(&result.scores, labels, config.top_k),
        iterations: result.iterations,
        converged: result.converged,
        damping_factor: result.damping,
        convergence_threshold: result.threshold,
        history: result.history.map(|snapshots| {
            snapshots
                .into_iter()
                .enumerate()
                .map(|(i, scores)| ScoreSnapshot {
                    iteration: i + 1,
                    scores: label_scores(labels, &scores),
                })
                .collect()
        }),
    })
}

/// Run HITS and materialize the external response.
pub fn run_hits(graph: &DiGraph, config: &AnalysisConfig) -> Result<HitsResponse> {
    config.validate()?;
    let result = Hits::new(config.max_iterations, config.convergence_threshold)
        .with_record_history(config.record_history)
        .run(graph);

    let labels = graph.labels();
    Ok(HitsResponse {
        authority_scores: label_scores(labels, &result.authority),
        hub_scores: label_scores(labels, &result.hub),
        top_authorities: top_k(&result.authority, labels, config.top_k),
        top_hubs: top_k(&result.hub, labels, config.top_k),
        iterations: result.iterations,
        converged: result.converged,
        convergence_threshold: result.threshold,
        history: result.history.map(|snapshots| {
            snapshots
                .into_iter()
                .enumerate()
                .map(|(i, snapshot)| HitsScoreSnapshot {
                    iteration: i + 1,
                    authority_scores: label_scores(labels, &snapshot.authority),
                    hub_scores: label_scores(labels, &snapshot.hub),
                })
                .collect()
        }),
    })
}

/// Run both algorithms and compare their rankings.
///
/// The two engines only read the immutable graph, so they run concurrently;
/// the comparison joins both results.
pub fn compare(graph: &DiGraph, config: &AnalysisConfig) -> Result<CompareResponse> {
    config.validate()?;
    let (pagerank, hits) = rayon::join(
        || run_pagerank(graph, config),
        || run_hits(graph, config),
    );
    let pagerank = pagerank?;
    let hits = hits?;

    let overlap_authorities = overlap(&pagerank.top_nodes, &hits.top_authorities);
    let overlap_hubs = overlap(&pagerank.top_nodes, &hits.top_hubs);
    let insights = insights(&pagerank.top_nodes, &hits.top_authorities, &hits.top_hubs);

    Ok(CompareResponse {
        pagerank,
        hits,
        overlap_authorities,
        overlap_hubs,
        insights,
    })
}

/// Run both algorithms and project scores onto render data.
pub fn visualization(graph: &DiGraph, config: &AnalysisConfig) -> Result<VisualizationData> {
    config.validate()?;
    let (pagerank, hits) = rayon::join(
        || {
            PageRank::new(
                config.damping_factor,
                config.max_iterations,
                config.convergence_threshold,
            )
            .run(graph)
        },
        || Hits::new(config.max_iterations, config.convergence_threshold).run(graph),
    );

    Ok(viz::project(
        graph,
        &pagerank.scores,
        &hits.authority,
        &hits.hub,
        config.top_k,
    ))
}
