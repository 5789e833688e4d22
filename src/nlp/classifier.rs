//! Truncation policy and top-label selection around the classifier capability.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    error::{AnalysisError, Result},
    nlp::{
        lazy::LazyModel,
        normalize::{token_count, truncate_tokens},
        Classification, ClassifierBackend, Classify,
    },
};

pub struct SentimentClassifier {
    model: LazyModel<dyn ClassifierBackend>,
    max_tokens: usize,
}

impl SentimentClassifier {
    pub fn new(model: LazyModel<dyn ClassifierBackend>, max_tokens: usize) -> Self {
        Self { model, max_tokens }
    }
}

/// Highest-scoring entry, score clamped into `[0, 1]`.
pub fn top_label(ranking: Vec<Classification>) -> Option<Classification> {
    ranking
        .into_iter()
        .filter(|c| !c.score.is_nan())
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|c| Classification {
            score: c.score.clamp(0.0, 1.0),
            ..c
        })
}

#[async_trait]
impl Classify for SentimentClassifier {
    /// Long input is cut to `max_tokens` rather than refused. The word cut is a
    /// first pass; the backend gets the same limit for its own tokenizer.
    #[instrument(skip_all, fields(model = %self.model.name()))]
    async fn classify(&self, text: &str) -> Result<Classification> {
        let tokens = token_count(text);
        let input = if tokens > self.max_tokens {
            debug!(tokens, limit = self.max_tokens, "truncating classifier input");
            truncate_tokens(text, self.max_tokens)
        } else {
            text.to_string()
        };

        let backend = self.model.get().await?;
        let ranking = backend.rank(&input, self.max_tokens).await?;
        top_label(ranking).ok_or_else(|| {
            AnalysisError::unavailable(format!("{} returned no labels", self.model.name()))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records what it was asked to classify.
    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
        limits: Mutex<Vec<usize>>,
        ranking: Vec<Classification>,
    }

    #[async_trait]
    impl ClassifierBackend for Recorder {
        async fn rank(&self, text: &str, max_tokens: usize) -> Result<Vec<Classification>> {
            self.seen.lock().unwrap().push(text.to_string());
            self.limits.lock().unwrap().push(max_tokens);
            Ok(self.ranking.clone())
        }
    }

    fn label(label: &str, score: f64) -> Classification {
        Classification {
            label: label.to_string(),
            score,
        }
    }

    fn classifier(backend: Arc<Recorder>) -> SentimentClassifier {
        let model: Arc<dyn ClassifierBackend> = backend;
        SentimentClassifier::new(LazyModel::ready("recorder", model), 512)
    }

    #[tokio::test]
    async fn long_input_is_truncated_not_rejected() {
        let backend = Arc::new(Recorder {
            ranking: vec![label("Neutral", 0.9)],
            ..Default::default()
        });
        let text = vec!["word"; 600].join(" ");
        let result = classifier(Arc::clone(&backend)).classify(&text).await.unwrap();
        assert_eq!(result.label, "Neutral");
        let seen = backend.seen.lock().unwrap();
        assert_eq!(token_count(&seen[0]), 512);
        assert_eq!(*backend.limits.lock().unwrap(), vec![512]);
    }

    #[tokio::test]
    async fn picks_highest_score() {
        let backend = Arc::new(Recorder {
            ranking: vec![label("Negative", 0.1), label("Positive", 0.8), label("Neutral", 0.1)],
            ..Default::default()
        });
        let result = classifier(backend).classify("fine").await.unwrap();
        assert_eq!(result, label("Positive", 0.8));
    }

    #[tokio::test]
    async fn empty_ranking_is_model_unavailable() {
        let backend = Arc::new(Recorder::default());
        let err = classifier(backend).classify("anything").await.unwrap_err();
        assert!(matches!(err, AnalysisError::ModelUnavailable(_)));
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let top = top_label(vec![label("x", 1.7), label("y", f64::NAN)]).unwrap();
        assert_eq!(top.score, 1.0);
    }
}
