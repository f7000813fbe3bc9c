//! Shared configuration for analysis requests.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Configuration for a scoring request.
///
/// Defaults match the conventional values: damping 0.85, at most 100
/// iterations, convergence at an L1 delta of 1e-4, top-5 rankings, no
/// per-iteration history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Probability of following an outgoing edge rather than teleporting.
    pub damping_factor: f64,
    /// Maximum number of power iterations.
    pub max_iterations: usize,
    /// L1 distance between successive score vectors below which the
    /// iteration is considered stable.
    pub convergence_threshold: f64,
    /// Number of entries in each ranking.
    pub top_k: usize,
    /// Retain a per-iteration snapshot of the score vectors. Off by default
    /// so the hot path pays no snapshot allocation.
    pub record_history: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-4,
            top_k: 5,
            record_history: false,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the ranking size.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Enable or disable per-iteration history.
    pub fn with_record_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    /// Reject out-of-range parameters before any iteration runs.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(AnalysisError::InvalidConfiguration {
                field: "damping_factor",
                reason: format!("must be in (0, 1), got {}", self.damping_factor),
            });
        }
        if self.max_iterations == 0 {
            return Err(AnalysisError::InvalidConfiguration {
                field: "max_iterations",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.convergence_threshold > 0.0) {
            return Err(AnalysisError::InvalidConfiguration {
                field: "convergence_threshold",
                reason: format!("must be positive, got {}", self.convergence_threshold),
            });
        }
        if self.top_k == 0 {
            return Err(AnalysisError::InvalidConfiguration {
                field: "top_k",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
