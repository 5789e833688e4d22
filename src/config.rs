//! Runtime configuration utilities for newsception-ml.

use std::{env, fmt, str::FromStr};

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::nlp::normalize::Normalization;

pub const DEFAULT_SUMMARY_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_SENTIMENT_MODEL: &str = "tabularisai/multilingual-sentiment-analysis";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

/// Which implementation serves the model capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    /// Hosted inference endpoint over HTTP.
    Remote,
    /// Offline word-list fallback.
    Lexicon,
}

impl FromStr for ModelBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "lexicon" => Ok(Self::Lexicon),
            other => bail!("unknown model backend `{other}` (expected remote or lexicon)"),
        }
    }
}

impl fmt::Display for ModelBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Lexicon => f.write_str("lexicon"),
        }
    }
}

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Bind address for `serve`.
    pub host: String,
    /// Bind port for `serve`.
    pub port: u16,
    /// Model capability implementation.
    pub backend: ModelBackend,
    /// Base URL of the inference endpoint (remote backend only).
    pub inference_url: String,
    /// Optional bearer token for the inference endpoint.
    pub inference_token: Option<String>,
    /// Abstractive summarization model id.
    pub summary_model: String,
    /// Text classification model id.
    pub sentiment_model: String,
    /// Upper bound on summary length, in tokens.
    pub summary_max_tokens: usize,
    /// Lower bound on summary length, in tokens.
    pub summary_min_tokens: usize,
    /// Largest input the summarizer accepts, in tokens.
    pub summary_max_input_tokens: usize,
    /// Classifier input is truncated to this many tokens.
    pub classifier_max_tokens: usize,
    /// Normalization applied before the pipeline stages.
    pub normalization: Normalization,
    /// Seed for the mock insight generator; entropy when unset.
    pub insight_seed: Option<u64>,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<usize>().ok());

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(8000);

        let inference_url_env = lookup("INFERENCE_URL").filter(|v| !v.trim().is_empty());
        let backend = match lookup("MODEL_BACKEND") {
            Some(raw) => raw.parse().context("parsing MODEL_BACKEND")?,
            None if inference_url_env.is_some() => ModelBackend::Remote,
            None => ModelBackend::Lexicon,
        };
        let inference_url = inference_url_env
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());
        let inference_token = lookup("INFERENCE_TOKEN").filter(|v| !v.trim().is_empty());

        let summary_model =
            lookup("SUMMARY_MODEL").unwrap_or_else(|| DEFAULT_SUMMARY_MODEL.to_string());
        let sentiment_model =
            lookup("SENTIMENT_MODEL").unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string());

        let summary_max_tokens = parsed("SUMMARY_MAX_TOKENS").unwrap_or(80);
        let summary_min_tokens = parsed("SUMMARY_MIN_TOKENS").unwrap_or(20);
        let summary_max_input_tokens = parsed("SUMMARY_MAX_INPUT_TOKENS").unwrap_or(1024);
        let classifier_max_tokens = parsed("CLASSIFIER_MAX_TOKENS").unwrap_or(512);

        if summary_min_tokens > summary_max_tokens {
            bail!(
                "SUMMARY_MIN_TOKENS ({summary_min_tokens}) exceeds SUMMARY_MAX_TOKENS ({summary_max_tokens})"
            );
        }
        if summary_max_tokens == 0 || classifier_max_tokens == 0 {
            bail!("token bounds must be positive");
        }

        let normalization = match lookup("NORMALIZATION") {
            Some(raw) => raw.parse().context("parsing NORMALIZATION")?,
            None => Normalization::default(),
        };
        let insight_seed = lookup("INSIGHT_SEED").and_then(|v| v.trim().parse().ok());

        Ok(Self {
            host,
            port,
            backend,
            inference_url,
            inference_token,
            summary_model,
            sentiment_model,
            summary_max_tokens,
            summary_min_tokens,
            summary_max_input_tokens,
            classifier_max_tokens,
            normalization,
            insight_seed,
        })
    }
}
