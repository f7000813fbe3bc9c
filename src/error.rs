//! Error taxonomy for the analysis core.
//!
//! Only two things can fail: the edge list itself (`MalformedInput`) and the
//! configuration (`InvalidConfiguration`). Both are rejected synchronously
//! before any iteration runs. Non-convergence within `max_iterations` is a
//! normal outcome reported via `converged = false`, never an error.

use serde::Serialize;
use thiserror::Error;

/// Stable machine-readable code attached to each error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MalformedInput,
    InvalidConfiguration,
}

/// Errors surfaced by graph construction and configuration validation.
#[derive(Debug, Clone, Error, Serialize)]
pub enum AnalysisError {
    /// An edge list entry is missing its source or target field.
    #[error("malformed edge at index {index}: {reason}")]
    MalformedInput { index: usize, reason: String },

    /// A configuration parameter is out of its valid range.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

impl AnalysisError {
    /// The stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedInput { .. } => ErrorCode::MalformedInput,
            Self::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AnalysisError::MalformedInput {
            index: 3,
            reason: "missing target".into(),
        };
        assert_eq!(err.code(), ErrorCode::MalformedInput);

        let err = AnalysisError::InvalidConfiguration {
            field: "damping_factor",
            reason: "must be in (0, 1)".into(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidConfiguration);
    }

    #[test]
    fn test_error_display() {
        let err = AnalysisError::MalformedInput {
            index: 0,
            reason: "missing source".into(),
        };
        assert_eq!(err.to_string(), "malformed edge at index 0: missing source");
    }

    #[test]
    fn test_error_code_serializes_snake_case() {
        let json = serde_json::to_value(ErrorCode::InvalidConfiguration).unwrap();
        assert_eq!(json, "invalid_configuration");
    }
}
