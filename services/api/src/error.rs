use crate::aggregate::AggregateError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nepse::ClientError;
use serde_json::json;
use thiserror::Error;

/// Central error type for the API service
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Upstream(#[from] ClientError),

    #[error(transparent)]
    Aggregation(#[from] AggregateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMIT_EXCEEDED",
                "Rate limit exceeded".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Upstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                err.to_string(),
            ),
            AppError::Aggregation(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AGGREGATION_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
