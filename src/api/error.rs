//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::chart::ChartError;
use crate::dataset::DatasetError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Dataset loading or cleaning error
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Chart resolution or assembly error
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Dataset(e) => match e {
                // The request is well-formed; the table lacks a column the
                // configuration promised.
                DatasetError::MissingColumn { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_COLUMN")
                }
                DatasetError::Read { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "DATASET_ERROR")
                }
            },
            ApiError::Chart(e) => match e {
                ChartError::MissingColumn { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_COLUMN")
                }
                ChartError::DualAxisColumns { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "DUAL_AXIS_COLUMNS")
                }
                ChartError::NonNumeric { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "NON_NUMERIC_COLUMN")
                }
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        // Log the error
        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
