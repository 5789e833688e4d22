//! Offline word-list fallback. Swap with a hosted model via `MODEL_BACKEND=remote`.

use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::Result,
    nlp::{
        lazy::ModelLoader, normalize::token_count, summarizer::SummaryBounds, Classification,
        ClassifierBackend, SummaryBackend,
    },
};

/// Labels in the order the default hosted sentiment model uses.
pub const LABELS: [&str; 5] = [
    "Very Negative",
    "Negative",
    "Neutral",
    "Positive",
    "Very Positive",
];

static POSITIVE_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "love", "loved", "excellent", "amazing", "happy", "best", "wonderful",
        "fantastic", "like", "enjoy", "positive", "success", "win", "hope", "progress", "benefit",
        "strong", "improve", "support", "breakthrough", "gut", "bien", "bueno", "excelente",
        "хорошо", "отлично",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "hate", "awful", "worst", "poor", "sad", "angry", "fail", "failure",
        "crisis", "negative", "loss", "weak", "concern", "concerning", "danger", "risk", "harm",
        "disappointed", "schlecht", "malo", "плохо", "ужасно",
    ]
    .into_iter()
    .collect()
});

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").expect("valid regex"));

pub struct LexiconLoader;

#[async_trait]
impl ModelLoader<dyn SummaryBackend> for LexiconLoader {
    async fn load(&self) -> Result<Arc<dyn SummaryBackend>> {
        Ok(Arc::new(LeadSummarizer))
    }
}

#[async_trait]
impl ModelLoader<dyn ClassifierBackend> for LexiconLoader {
    async fn load(&self) -> Result<Arc<dyn ClassifierBackend>> {
        Ok(Arc::new(LexiconClassifier))
    }
}

/// Polarity in `[-1, 1]`, zero when no term matches.
pub fn polarity(text: &str) -> f64 {
    let (mut pos, mut neg) = (0usize, 0usize);
    for word in text.split_whitespace() {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if POSITIVE_TERMS.contains(word.as_str()) {
            pos += 1;
        } else if NEGATIVE_TERMS.contains(word.as_str()) {
            neg += 1;
        }
    }
    if pos + neg == 0 {
        0.0
    } else {
        (pos as f64 - neg as f64) / (pos + neg) as f64
    }
}

pub struct LexiconClassifier;

#[async_trait]
impl ClassifierBackend for LexiconClassifier {
    async fn rank(&self, text: &str, _max_tokens: usize) -> Result<Vec<Classification>> {
        let p = polarity(text);
        let top = match p {
            p if p <= -0.6 => 0,
            p if p < -0.2 => 1,
            p if p <= 0.2 => 2,
            p if p < 0.6 => 3,
            _ => 4,
        };
        let confidence = if top == 2 {
            1.0 - p.abs()
        } else {
            0.5 + p.abs() / 2.0
        };
        let rest = (1.0 - confidence) / (LABELS.len() - 1) as f64;
        Ok(LABELS
            .iter()
            .enumerate()
            .map(|(idx, label)| Classification {
                label: (*label).to_string(),
                score: if idx == top { confidence } else { rest },
            })
            .collect())
    }
}

/// Lead-text summarizer: whole leading sentences while they fit, else leading words.
pub struct LeadSummarizer;

#[async_trait]
impl SummaryBackend for LeadSummarizer {
    async fn generate(&self, text: &str, bounds: &SummaryBounds) -> Result<String> {
        let mut picked: Vec<&str> = Vec::new();
        let mut used = 0usize;
        for sentence in SENTENCE_END.split(text.trim()) {
            let len = token_count(sentence);
            if len == 0 {
                continue;
            }
            if used + len > bounds.max_tokens {
                break;
            }
            picked.push(sentence.trim());
            used += len;
        }
        if used >= bounds.min_tokens {
            return Ok(picked.join(". "));
        }
        Ok(text
            .split_whitespace()
            .take(bounds.max_tokens)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn love_ranks_very_positive_first() {
        let ranking = LexiconClassifier.rank("i love this", 512).await.unwrap();
        let top = ranking
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .unwrap();
        assert_eq!(top.label, "Very Positive");
        let total: f64 = ranking.iter().map(|c| c.score).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn no_terms_is_neutral() {
        let ranking = LexiconClassifier.rank("the weather report", 512).await.unwrap();
        assert_eq!(ranking[2].label, "Neutral");
        assert!((ranking[2].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn polarity_mixes_terms() {
        assert_eq!(polarity("good bad"), 0.0);
        assert!(polarity("great great bad") > 0.0);
    }

    #[tokio::test]
    async fn lead_summary_stays_within_bounds() {
        let bounds = SummaryBounds {
            max_tokens: 10,
            min_tokens: 4,
            max_input_tokens: 100,
        };
        let text = "one two three four five. six seven eight nine ten eleven. twelve";
        let summary = LeadSummarizer.generate(text, &bounds).await.unwrap();
        assert_eq!(summary, "one two three four five");

        let words = "a b c d e f g h i j k l m n";
        let summary = LeadSummarizer.generate(words, &bounds).await.unwrap();
        assert_eq!(token_count(&summary), 10);
    }
}
