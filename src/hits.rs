//! HITS (Hyperlink-Induced Topic Search)
//!
//! Computes two mutually reinforcing scores per node: authority (pointed to
//! by good hubs) and hub (points to good authorities). Both vectors are
//! L2-normalized after every iteration and tested for convergence with the
//! same L1 policy as PageRank.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::graph::DiGraph;

/// HITS engine over a directed graph.
///
/// Within one iteration both updates read the pre-iteration snapshot of the
/// other vector: `new_authority` sums old hub scores and `new_hub` sums old
/// authority scores, never the half-updated values.
#[derive(Debug, Clone)]
pub struct Hits {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold (L1 distance, applied to both vectors)
    pub threshold: f64,
    /// Retain per-iteration snapshots of both vectors
    pub record_history: bool,
    /// Optional cooperative cancel flag, polled between iterations
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Hits {
    fn default() -> Self {
        Self::new(100, 1e-4)
    }
}

impl Hits {
    /// Create a new engine with the given parameters.
    pub fn new(max_iterations: usize, threshold: f64) -> Self {
        Self {
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

    /// Attach a cancel flag checked once per iteration.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Run HITS on a graph.
    ///
    /// Non-convergence within `max_iterations` yields the last computed
    /// vectors with `converged = false`.
    pub fn run(&self, graph: &DiGraph) -> HitsResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("hits", nodes = graph.num_nodes()).entered();

        let n = graph.num_nodes();
        if n == 0 {
            return HitsResult {
                authority: Vec::new(),
                hub: Vec::new(),
                iterations: 0,
                converged: true,
                threshold: self.threshold,
                history: self.record_history.then(Vec::new),
            };
        }

        let mut authority = vec![1.0; n];
        let mut hub = vec![1.0; n];
        let mut new_authority = vec![0.0; n];
        let mut new_hub = vec![0.0; n];

        let mut history = self.record_history.then(Vec::new);
        let mut iterations = 0;
        let mut auth_delta = f64::MAX;
        let mut hub_delta = f64::MAX;

        while iterations < self.max_iterations
            && (auth_delta > self.threshold || hub_delta > self.threshold)
        {
            if self.is_cancelled() {
                break;
            }
            iterations += 1;

            for node in 0..n as u32 {
                new_authority[node as usize] = graph
                    .in_neighbors(node)
                    .iter()
                    .map(|&u| hub[u as usize])
                    .sum();
                new_hub[node as usize] = graph
                    .out_neighbors(node)
                    .iter()
                    .map(|&w| authority[w as usize])
                    .sum();
            }

            normalize_l2(&mut new_authority);
            normalize_l2(&mut new_hub);

            auth_delta = l1_distance(&authority, &new_authority);
            hub_delta = l1_distance(&hub, &new_hub);

            std::mem::swap(&mut authority, &mut new_authority);
            std::mem::swap(&mut hub, &mut new_hub);

            if let Some(history) = history.as_mut() {
                history.push(HitsSnapshot {
                    authority: authority.clone(),
                    hub: hub.clone(),
                });
            }
        }

        HitsResult {
            converged: auth_delta <= self.threshold && hub_delta <= self.threshold,
            authority,
            hub,
            iterations,
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

/// Scale a vector to unit L2 norm. A zero vector (e.g. a graph of isolated
/// nodes) is left untouched so the division can never produce NaN.
fn normalize_l2(values: &mut [f64]) {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in values.iter_mut() {
            *value /= norm;
        }
    }
}

fn l1_distance(old: &[f64], new: &[f64]) -> f64 {
    old.iter().zip(new).map(|(a, b)| (a - b).abs()).sum()
}

/// Both score vectors at the end of one iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct HitsSnapshot {
    pub authority: Vec<f64>,
    pub hub: Vec<f64>,
}

/// Result of a HITS computation.
#[derive(Debug, Clone)]
pub struct HitsResult {
    /// Authority scores for each node (indexed by node ID), L2-normalized
    pub authority: Vec<f64>,
    /// Hub scores for each node (indexed by node ID), L2-normalized
    pub hub: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Whether both vectors converged within `max_iterations`
    pub converged: bool,
    /// Convergence threshold echoed from the configuration
    pub threshold: f64,
    /// Per-iteration snapshots of both vectors, present only when requested
    pub history: Option<Vec<HitsSnapshot>>,
}

impl HitsResult {
    /// Get the authority score for a specific node.
    pub fn authority_score(&self, node: u32) -> f64 {
        self.authority.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Get the hub score for a specific node.
    pub fn hub_score(&self, node: u32) -> f64 {
        self.hub.get(node as usize).copied().unwrap_or(0.0)
    }
}
