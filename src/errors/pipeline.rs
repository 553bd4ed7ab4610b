use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use super::AppError;
use crate::models::PipelineErrorResponse;

/// Failures reported by the simplification pipeline itself
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No readable text content found. Please provide a file with text or text content directly.")]
    EmptyInput,

    #[error("Error processing report: {message}")]
    Processing { message: String },
}

impl AppError for PipelineError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn user_message(&self) -> String {
        self.to_string()
    }

    fn error_code(&self) -> &'static str {
        match self {
            PipelineError::EmptyInput => "NO_READABLE_TEXT",
            PipelineError::Processing { .. } => "PROCESSING_FAILED",
        }
    }
}

impl PipelineError {
    pub fn to_payload(&self) -> PipelineErrorResponse {
        PipelineErrorResponse {
            error: self.user_message(),
            status: "error".to_string(),
        }
    }
}

/// Rendered as `{"error", "status": "error"}` rather than the generic
/// `AppError` body, matching the pipeline's own error payload.
impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_payload())).into_response()
    }
}
