//! Mapping from pipeline errors to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::{api::types::ErrorBody, error::AnalysisError};

/// Error returned by every handler.
#[derive(Debug)]
pub struct ApiError(pub AnalysisError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AnalysisError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::ModelUnavailable(_) | AnalysisError::InputTooLong { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AnalysisError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(err = %self.0, "request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
