//! Length policy around the summarization capability.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::{
    error::{AnalysisError, Result},
    nlp::{
        lazy::LazyModel,
        normalize::{token_count, truncate_tokens},
        Summarize, SummaryBackend,
    },
};

/// Token bounds for generated summaries and accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryBounds {
    pub max_tokens: usize,
    pub min_tokens: usize,
    pub max_input_tokens: usize,
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            max_tokens: 80,
            min_tokens: 20,
            max_input_tokens: 1024,
        }
    }
}

pub struct Summarizer {
    model: LazyModel<dyn SummaryBackend>,
    bounds: SummaryBounds,
}

impl Summarizer {
    pub fn new(model: LazyModel<dyn SummaryBackend>, bounds: SummaryBounds) -> Self {
        Self { model, bounds }
    }
}

#[async_trait]
impl Summarize for Summarizer {
    /// Summaries land within `[min_tokens, max_tokens]`. Input over
    /// `max_input_tokens` is refused before the model is touched, and input
    /// shorter than `min_tokens` is returned as-is (whitespace collapsed).
    #[instrument(skip_all, fields(model = %self.model.name()))]
    async fn summarize(&self, text: &str) -> Result<String> {
        // Whitespace words undercount the model's subword pieces, so input just
        // under the limit can still overflow a hosted model and come back as
        // ModelUnavailable. Lower SUMMARY_MAX_INPUT_TOKENS to leave headroom.
        let tokens = token_count(text);
        if tokens > self.bounds.max_input_tokens {
            return Err(AnalysisError::InputTooLong {
                tokens,
                limit: self.bounds.max_input_tokens,
            });
        }
        if tokens < self.bounds.min_tokens {
            debug!(tokens, "input shorter than summary floor; passing through");
            return Ok(truncate_tokens(text, tokens));
        }

        let backend = self.model.get().await?;
        let summary = backend.generate(text, &self.bounds).await?;
        let produced = token_count(&summary);
        if produced > self.bounds.max_tokens {
            debug!(produced, "clamping summary to max_tokens");
            return Ok(truncate_tokens(&summary, self.bounds.max_tokens));
        }
        if produced < self.bounds.min_tokens {
            warn!(produced, min = self.bounds.min_tokens, "summary shorter than requested");
        }
        Ok(summary)
    }
}
