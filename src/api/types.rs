//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryDto {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoDto {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
