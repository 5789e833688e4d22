//! Error kinds surfaced by the analysis pipeline.

use thiserror::Error;

/// Failures produced by the text-analysis stages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// The model capability could not be loaded or reached.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Input exceeds the summarizer's context bound.
    #[error("input too long: {tokens} tokens exceeds limit of {limit}")]
    InputTooLong { tokens: usize, limit: usize },

    /// Request body did not match the expected shape.
    #[error("validation error: {0}")]
    Validation(String),
}

impl AnalysisError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::ModelUnavailable(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
