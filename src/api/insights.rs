//! HTTP route handlers for the mock news-insight service.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Local;
use serde_json::{json, Map, Value};

use crate::{
    api::{
        error::ApiResult,
        types::{HealthDto, ServiceInfoDto},
        InsightState,
    },
    insights::{
        self,
        types::{AnalysisRequest, AnalysisResult, HistoricalContextRequest, HistoricalContextResponse},
    },
};

pub async fn root() -> Json<ServiceInfoDto> {
    let endpoints: Map<String, Value> = [
        ("/analyze", "POST - Analyze news articles"),
        ("/historical-context", "POST - Get historical context"),
        ("/health", "GET - Health check"),
    ]
    .into_iter()
    .map(|(path, what)| (path.to_string(), json!(what)))
    .collect();

    Json(ServiceInfoDto {
        service: "Newsception ML Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints,
    })
}

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    })
}

pub async fn analyze(
    State(state): State<InsightState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> ApiResult<Vec<AnalysisResult>> {
    let Json(request) = payload?;
    Ok(Json(state.generator.analyze(&request)))
}

pub async fn historical_context(
    payload: Result<Json<HistoricalContextRequest>, JsonRejection>,
) -> ApiResult<HistoricalContextResponse> {
    let Json(request) = payload?;
    let today = Local::now().date_naive();
    Ok(Json(insights::historical_context(&request.topic, today)))
}
