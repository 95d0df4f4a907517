#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The single user-facing failure message for recommendation generation.
///
/// Pipeline and validation failures stay distinct internally (variants,
/// error codes, log lines) but collapse to this one message at the boundary.
pub const FAILURE_MESSAGE: &str =
    "Failed to generate recommendations. Please check your API key or input and try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required profile field is empty. Rejected before the pipeline runs.
    #[error("Input error: {0}")]
    Input(String),

    /// The model call could not be completed: missing credential, transport
    /// failure, service error, or a response that is not well-formed JSON.
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// The model answered with well-formed JSON that violates the
    /// recommendation contract.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not legal in the session's current phase.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, "INPUT_ERROR", msg.clone()),
            AppError::Pipeline(msg) => {
                tracing::error!("Pipeline error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PIPELINE_ERROR",
                    FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Validation(msg) => {
                tracing::error!("Response validation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "VALIDATION_ERROR",
                    FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_and_validation_collapse_to_one_message() {
        // The two failure kinds must remain distinguishable internally...
        let pipeline = AppError::Pipeline("connection refused".to_string());
        let validation = AppError::Validation("recommendation 0: missing `salaryRange`".to_string());
        assert!(format!("{pipeline}").contains("connection refused"));
        assert!(format!("{validation}").contains("salaryRange"));

        // ...while sharing the same user-facing message at the boundary.
        let pipeline_response = pipeline.into_response();
        let validation_response = validation.into_response();
        assert_eq!(pipeline_response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(validation_response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_input_error_is_a_bad_request() {
        let response = AppError::Input("interests is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response = AppError::Conflict("a request is already in flight".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
