//! normalize → summarize → classify.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    error::Result,
    nlp::{normalize::Normalization, Classify, Summarize},
};

/// What callers of the sentiment endpoint get back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub sentiment_label: String,
}

/// Everything the pipeline computed for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub sentiment_label: String,
    pub score: f64,
    pub summary: String,
}

impl From<AnalysisReport> for AnalysisOutcome {
    fn from(report: AnalysisReport) -> Self {
        Self {
            sentiment_label: report.sentiment_label,
        }
    }
}

/// Linear analysis pipeline; holds no per-request state.
#[derive(Clone)]
pub struct Analyzer {
    normalization: Normalization,
    summarizer: Arc<dyn Summarize>,
    classifier: Arc<dyn Classify>,
}

impl Analyzer {
    pub fn new(
        normalization: Normalization,
        summarizer: Arc<dyn Summarize>,
        classifier: Arc<dyn Classify>,
    ) -> Self {
        Self {
            normalization,
            summarizer,
            classifier,
        }
    }

    /// Sentiment label for `raw`. The summary is still produced (and must
    /// succeed) but is not part of the outcome.
    pub async fn analyze(&self, raw: &str) -> Result<AnalysisOutcome> {
        self.report(raw).await.map(AnalysisOutcome::from)
    }

    /// Run every stage and keep all intermediate results.
    #[instrument(skip_all, fields(chars = raw.chars().count(), mode = ?self.normalization))]
    pub async fn report(&self, raw: &str) -> Result<AnalysisReport> {
        let normalized = self.normalization.apply(raw);
        let summary = self.summarizer.summarize(&normalized).await?;
        debug!(%summary, "summary computed");
        let classification = self.classifier.classify(&normalized).await?;
        debug!(label = %classification.label, score = classification.score, "classified");

        Ok(AnalysisReport {
            sentiment_label: classification.label,
            score: classification.score,
            summary,
        })
    }
}
