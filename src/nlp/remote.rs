//! Hosted inference backend speaking the Hugging Face Inference API shape.
//!
//! `POST {base}/models/{model}` with `{"inputs": ..., "parameters": ..., "options": ...}`.
//! Summarization answers `[{"summary_text": ...}]`; text classification answers
//! either `[[{"label", "score"}, ...]]` or `[{"label", "score"}, ...]`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

use crate::{
    error::{AnalysisError, Result},
    nlp::{
        lazy::ModelLoader, summarizer::SummaryBounds, Classification, ClassifierBackend,
        SummaryBackend,
    },
};

/// Base URL plus credentials shared by every hosted model.
#[derive(Debug, Clone)]
pub struct InferenceEndpoint {
    base_url: String,
    token: Option<String>,
}

impl InferenceEndpoint {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn model_url(&self, model: &str) -> Result<Url> {
        Url::parse(&format!("{}/models/{model}", self.base_url))
            .map_err(|e| AnalysisError::unavailable(format!("invalid inference url: {e}")))
    }
}

/// Builds the HTTP client for one hosted model on first use.
pub struct RemoteLoader {
    endpoint: InferenceEndpoint,
    model: String,
}

impl RemoteLoader {
    pub fn new(endpoint: InferenceEndpoint, model: &str) -> Self {
        Self {
            endpoint,
            model: model.to_string(),
        }
    }

    async fn connect(&self) -> Result<Arc<RemoteModel>> {
        let url = self.endpoint.model_url(&self.model)?;
        let client = Client::builder()
            .user_agent(concat!("newsception-ml/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AnalysisError::unavailable(format!("building http client: {e}")))?;
        Ok(Arc::new(RemoteModel {
            client,
            url,
            token: self.endpoint.token.clone(),
            model: self.model.clone(),
        }))
    }
}

#[async_trait]
impl ModelLoader<dyn SummaryBackend> for RemoteLoader {
    async fn load(&self) -> Result<Arc<dyn SummaryBackend>> {
        Ok(self.connect().await? as Arc<dyn SummaryBackend>)
    }
}

#[async_trait]
impl ModelLoader<dyn ClassifierBackend> for RemoteLoader {
    async fn load(&self) -> Result<Arc<dyn ClassifierBackend>> {
        Ok(self.connect().await? as Arc<dyn ClassifierBackend>)
    }
}

/// A single hosted model.
pub struct RemoteModel {
    client: Client,
    url: Url,
    token: Option<String>,
    model: String,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: serde_json::Value,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    /// Block until the model is resident instead of answering 503.
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationPayload {
    Nested(Vec<Vec<Classification>>),
    Flat(Vec<Classification>),
}

impl ClassificationPayload {
    fn into_ranking(self) -> Vec<Classification> {
        match self {
            Self::Nested(mut rows) if !rows.is_empty() => rows.swap_remove(0),
            Self::Nested(_) => Vec::new(),
            Self::Flat(items) => items,
        }
    }
}

impl RemoteModel {
    async fn infer<T>(&self, text: &str, parameters: serde_json::Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let body = InferenceRequest {
            inputs: text,
            parameters,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };
        let mut request = self.client.post(self.url.clone()).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::unavailable(format!("{}: {e}", self.model)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AnalysisError::unavailable(format!(
                "{} returned {status}: {detail}",
                self.model
            )));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AnalysisError::unavailable(format!("{}: malformed response: {e}", self.model)))
    }
}

#[async_trait]
impl SummaryBackend for RemoteModel {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, text: &str, bounds: &SummaryBounds) -> Result<String> {
        let parameters = json!({
            "max_length": bounds.max_tokens,
            "min_length": bounds.min_tokens,
            "do_sample": false,
        });
        let items: Vec<SummaryItem> = self.infer(text, parameters).await?;
        let summary = items
            .into_iter()
            .next()
            .map(|item| item.summary_text)
            .ok_or_else(|| AnalysisError::unavailable(format!("{}: empty summary", self.model)))?;
        debug!(chars = summary.len(), "remote summary received");
        Ok(summary)
    }
}

#[async_trait]
impl ClassifierBackend for RemoteModel {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn rank(&self, text: &str, max_tokens: usize) -> Result<Vec<Classification>> {
        let parameters = json!({
            "top_k": null,
            "truncation": true,
            "max_length": max_tokens,
        });
        let payload: ClassificationPayload = self.infer(text, parameters).await?;
        Ok(payload.into_ranking())
    }
}
