//! Natural language processing orchestration layer.
//!
//! Model inference is treated as an opaque capability: a [`SummaryBackend`]
//! turns text into a shorter text, a [`ClassifierBackend`] ranks labels for a
//! text. [`summarizer::Summarizer`] and [`classifier::SentimentClassifier`] put
//! the length policies around them, and [`pipeline::Analyzer`] chains the
//! stages together.

pub mod classifier;
pub mod lazy;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod remote;
pub mod summarizer;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::{ModelBackend, Settings},
    error::Result,
};

use self::{
    classifier::SentimentClassifier,
    lazy::LazyModel,
    pipeline::Analyzer,
    summarizer::{Summarizer, SummaryBounds},
};

/// One label with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Raw summarization capability.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Generate a summary deterministically (no sampling).
    async fn generate(&self, text: &str, bounds: &SummaryBounds) -> Result<String>;
}

/// Raw classification capability.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    /// Score the text against the model's label set, in any order. Backends
    /// that count input in their own units cut it to `max_tokens` themselves.
    async fn rank(&self, text: &str, max_tokens: usize) -> Result<Vec<Classification>>;
}

/// Summarization as seen by the pipeline.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String>;
}

/// Single-label classification as seen by the pipeline.
#[async_trait]
pub trait Classify: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification>;
}

/// Model handles shared by every request.
#[derive(Clone)]
pub struct Models {
    pub summarizer: Arc<dyn Summarize>,
    pub classifier: Arc<dyn Classify>,
}

impl Models {
    /// Wire the configured backend into lazily-loaded summarizer and classifier.
    pub fn from_settings(settings: &Settings) -> Self {
        info!(backend = %settings.backend, "configuring model backend");
        let bounds = SummaryBounds {
            max_tokens: settings.summary_max_tokens,
            min_tokens: settings.summary_min_tokens,
            max_input_tokens: settings.summary_max_input_tokens,
        };

        let (summary_model, classifier_model): (
            LazyModel<dyn SummaryBackend>,
            LazyModel<dyn ClassifierBackend>,
        ) = match settings.backend {
            ModelBackend::Remote => {
                let endpoint = remote::InferenceEndpoint::new(
                    &settings.inference_url,
                    settings.inference_token.clone(),
                );
                (
                    LazyModel::new(
                        settings.summary_model.clone(),
                        remote::RemoteLoader::new(endpoint.clone(), &settings.summary_model),
                    ),
                    LazyModel::new(
                        settings.sentiment_model.clone(),
                        remote::RemoteLoader::new(endpoint, &settings.sentiment_model),
                    ),
                )
            }
            ModelBackend::Lexicon => (
                LazyModel::new("lexicon-summary", lexicon::LexiconLoader),
                LazyModel::new("lexicon-sentiment", lexicon::LexiconLoader),
            ),
        };

        Self {
            summarizer: Arc::new(Summarizer::new(summary_model, bounds)),
            classifier: Arc::new(SentimentClassifier::new(
                classifier_model,
                settings.classifier_max_tokens,
            )),
        }
    }

    /// Build the orchestrator over these handles.
    pub fn analyzer(&self, settings: &Settings) -> Analyzer {
        Analyzer::new(
            settings.normalization,
            Arc::clone(&self.summarizer),
            Arc::clone(&self.classifier),
        )
    }
}
