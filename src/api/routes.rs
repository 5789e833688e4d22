//! HTTP route handlers for the text services.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::{
    api::{
        error::ApiResult,
        types::{MessageDto, SummaryDto, TextRequest},
        AppState,
    },
    nlp::Summarize,
};

pub async fn root() -> Json<MessageDto> {
    Json(MessageDto {
        message: "Main API is running".to_string(),
    })
}

/// Responds with the bare label string.
pub async fn sentiment_analysis(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ApiResult<String> {
    let Json(req) = payload?;
    let outcome = state.analyzer.analyze(&req.text).await?;
    info!(label = %outcome.sentiment_label, "sentiment analysed");
    Ok(Json(outcome.sentiment_label))
}

/// Summarizes the raw text; no normalization is applied here.
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ApiResult<SummaryDto> {
    let Json(req) = payload?;
    let summary = state.models.summarizer.summarize(&req.text).await?;
    Ok(Json(SummaryDto { summary }))
}
