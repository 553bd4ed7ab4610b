use axum::{extract::multipart::MultipartError, http::StatusCode};
use thiserror::Error;

use crate::content_type::SupportedContentType;

pub mod pipeline;

pub use pipeline::PipelineError;

/// Common trait for the service's HTTP-facing error types
pub trait AppError: std::error::Error + Send + Sync + 'static {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get the error code for client-side handling
    fn error_code(&self) -> &'static str;

    /// Extra fields merged into the JSON error body
    fn details(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        None
    }
}

/// Implements `IntoResponse` for an `AppError`, rendering
/// `{"error", "code", "status"}` plus any [`AppError::details`].
macro_rules! impl_into_response {
    ($error_type:ty) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                use crate::errors::AppError;
                use axum::response::Json;
                use serde_json::json;

                let status = self.status_code();
                if status.is_server_error() {
                    tracing::error!("{}", self);
                } else {
                    tracing::debug!("Rejecting request: {}", self);
                }

                let mut body = json!({
                    "error": self.user_message(),
                    "code": self.error_code(),
                    "status": status.as_u16()
                });
                if let (Some(details), Some(object)) = (self.details(), body.as_object_mut()) {
                    object.extend(details);
                }

                (status, Json(body)).into_response()
            }
        }
    };
}

/// Errors raised by the HTTP layer before or around the pipeline
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unsupported content type: {content_type}")]
    UnsupportedMediaType { content_type: String },

    #[error("Payload too large: {message}")]
    PayloadTooLarge { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::UnsupportedMediaType { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            ApiError::BadRequest { message } | ApiError::PayloadTooLarge { message } => {
                message.clone()
            }
            ApiError::UnsupportedMediaType { content_type } => {
                let quoted: Vec<String> = SupportedContentType::supported_mime_types()
                    .iter()
                    .map(|t| format!("'{}'", t))
                    .collect();
                format!(
                    "File type {} not supported. Supported types: [{}]",
                    content_type,
                    quoted.join(", ")
                )
            }
            ApiError::Internal { .. } => self.to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::UnsupportedMediaType { .. } => "UNSUPPORTED_FILE_TYPE",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    fn details(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        match self {
            ApiError::UnsupportedMediaType { .. } => {
                let mut details = serde_json::Map::new();
                details.insert(
                    "supported_types".to_string(),
                    serde_json::json!(SupportedContentType::supported_mime_types()),
                );
                Some(details)
            }
            _ => None,
        }
    }
}

impl_into_response!(ApiError);

impl ApiError {
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest { message: message.into() }
    }

    pub fn unsupported_media_type<S: Into<String>>(content_type: S) -> Self {
        Self::UnsupportedMediaType { content_type: content_type.into() }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Maps a multipart read failure, keeping body-limit rejections as 413.
    pub fn from_multipart(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge { message: err.body_text() }
        } else {
            Self::BadRequest { message: err.body_text() }
        }
    }
}
