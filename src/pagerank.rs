//! PageRank power iteration
//!
//! Implements the classic random-surfer model with damping, explicit
//! dangling-node redistribution, and L1 convergence detection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::graph::DiGraph;

/// PageRank engine over a directed graph.
///
/// Dangling nodes keep their probability mass: it is redistributed uniformly
/// (scaled by the damping factor) across all nodes each iteration, so the
/// score vector sums to 1 without any renormalization step.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold (L1 distance between successive vectors)
    pub threshold: f64,
    /// Retain a per-iteration snapshot of the score vector
    pub record_history: bool,
    /// Optional cooperative cancel flag, polled between iterations
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for PageRank {
    fn default() -> Self {
        Self::new(0.85, 100, 1e-4)
    }
}

impl PageRank {
    /// Create a new engine with the given parameters.
    ///
    /// Parameters are assumed valid; callers going through
    /// [`AnalysisConfig::validate`](crate::AnalysisConfig::validate) reject
    /// out-of-range values before reaching the engine.
    pub fn new(damping: f64, max_iterations: usize, threshold: f64) -> Self {
        Self {
            damping,
            max_iterations,
            threshold,
            record_history: false,
            cancel: None,
        }
    }

    /// Enable per-iteration history snapshots.
    pub fn with_record_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    /// Attach a cancel flag checked once per iteration. A set flag stops the
    /// run and yields the best-effort scores computed so far with
    /// `converged = false`.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Run PageRank on a graph.
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged = false` — non-convergence is a reportable outcome, not an
    /// error.
    pub fn run(&self, graph: &DiGraph) -> PageRankResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pagerank", nodes = graph.num_nodes()).entered();

        let n = graph.num_nodes();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
                damping: self.damping,
                threshold: self.threshold,
                history: self.record_history.then(Vec::new),
            };
        }

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut history = self.record_history.then(Vec::new);
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            if self.is_cancelled() {
                break;
            }
            iterations += 1;

            // Mass sitting on nodes with no outgoing edges is spread
            // uniformly instead of vanishing.
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            for node in 0..n as u32 {
                let out_degree = graph.out_degree(node);
                if out_degree > 0 {
                    let share = self.damping * scores[node as usize] / out_degree as f64;
                    for &target in graph.out_neighbors(node) {
                        new_scores[target as usize] += share;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if let Some(history) = history.as_mut() {
                history.push(scores.clone());
            }
        }

        PageRankResult {
            converged: delta <= self.threshold,
            scores,
            iterations,
            delta,
            damping: self.damping,
            threshold: self.threshold,
            history,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID), summing to 1
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1 distance)
    pub delta: f64,
    /// Whether the algorithm converged within `max_iterations`
    pub converged: bool,
    /// Damping factor echoed from the configuration
    pub damping: f64,
    /// Convergence threshold echoed from the configuration
    pub threshold: f64,
    /// Per-iteration score snapshots, present only when requested
    pub history: Option<Vec<Vec<f64>>>,
}

impl PageRankResult {
    /// Get the score for a specific node.
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
