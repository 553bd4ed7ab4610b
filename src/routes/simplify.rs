use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    content_type::SupportedContentType,
    errors::{ApiError, PipelineError},
    models::{PipelineErrorResponse, ProcessingResult, Sex, SimplifyTextRequest},
    pipeline::ReportInput,
    services::staging::with_staged_upload,
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/simplify", post(simplify_report))
        .route("/simplify-text", post(simplify_text))
}

struct UploadedReport {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

/// Upload a lab report file and get a plain-language explanation
#[utoipa::path(
    post,
    path = "/api/simplify",
    tag = "simplify",
    request_body(
        content = String,
        description = "Multipart form with a `file` field (text/plain, application/pdf, image/jpeg, image/jpg or image/png) and an optional `sex` field",
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "Report simplified", body = ProcessingResult),
        (status = 400, description = "Missing file, unsupported type, or no readable text", body = PipelineErrorResponse),
        (status = 413, description = "Upload exceeds the configured size limit"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn simplify_report(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessingResult>, Response> {
    let mut uploaded: Option<UploadedReport> = None;
    let mut sex: Option<Sex> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to get multipart field: {}", e);
        ApiError::from_multipart(e).into_response()
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name == "sex" {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::from_multipart(e).into_response())?;
            sex = parse_sex(&value).map_err(|e| ApiError::bad_request(e).into_response())?;
        } else if name == "file" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await.map_err(|e| {
                error!("Failed to read file data: {}", e);
                ApiError::from_multipart(e).into_response()
            })?;

            uploaded = Some(UploadedReport { file_name, content_type, data: data.to_vec() });
        }
    }

    let upload = uploaded.ok_or_else(|| ApiError::bad_request("No file provided").into_response())?;

    if upload.file_name.is_empty() {
        return Err(ApiError::bad_request("No file selected").into_response());
    }

    let content_type = SupportedContentType::from_mime(&upload.content_type).ok_or_else(|| {
        warn!("Rejected upload '{}' with type {}", upload.file_name, upload.content_type);
        ApiError::unsupported_media_type(upload.content_type.clone()).into_response()
    })?;

    info!(
        "Simplifying uploaded report '{}' ({} bytes, {})",
        upload.file_name,
        upload.data.len(),
        content_type.mime_type()
    );

    let simplifier = state.simplifier.clone();
    let staging_dir = state.config.staging_dir();

    let outcome = tokio::task::spawn_blocking(move || {
        with_staged_upload(&staging_dir, content_type, &upload.data, |path| {
            simplifier.process_report(
                ReportInput::File { path, content_type: content_type.mime_type() },
                sex,
            )
        })
    })
    .await
    .map_err(|e| {
        error!("Report worker failed: {}", e);
        ApiError::internal(e.to_string()).into_response()
    })?
    .map_err(|e| {
        error!("Could not stage upload: {}", e);
        ApiError::internal(e.to_string()).into_response()
    })?;

    respond(outcome)
}

/// Simplify report text sent directly as JSON
#[utoipa::path(
    post,
    path = "/api/simplify-text",
    tag = "simplify",
    request_body = SimplifyTextRequest,
    responses(
        (status = 200, description = "Report simplified", body = ProcessingResult),
        (status = 400, description = "Missing or oversized text, unknown sex, or no readable text", body = PipelineErrorResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn simplify_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SimplifyTextRequest>, JsonRejection>,
) -> Result<Json<ProcessingResult>, Response> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected text request body: {}", rejection.body_text());
            SimplifyTextRequest::default()
        }
    };

    let text = request
        .text
        .ok_or_else(|| ApiError::bad_request("No text provided").into_response())?;

    let max_chars = state.config.max_text_length;
    if text.chars().count() > max_chars {
        return Err(ApiError::bad_request(format!(
            "Text too long. Maximum {} characters.",
            max_chars
        ))
        .into_response());
    }

    let sex = match request.sex.as_deref() {
        Some(value) => parse_sex(value).map_err(|e| ApiError::bad_request(e).into_response())?,
        None => None,
    };

    let simplifier = state.simplifier.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        simplifier.process_report(ReportInput::Text(&text), sex)
    })
    .await
    .map_err(|e| {
        error!("Text simplification error: {}", e);
        ApiError::internal(e.to_string()).into_response()
    })?;

    respond(outcome)
}

fn respond(outcome: Result<ProcessingResult, PipelineError>) -> Result<Json<ProcessingResult>, Response> {
    outcome.map(Json).map_err(|e| {
        warn!("Pipeline rejected report: {}", e);
        e.into_response()
    })
}

/// An empty `sex` field means "not given".
fn parse_sex(value: &str) -> Result<Option<Sex>, String> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sex_field_is_unset() {
        assert_eq!(parse_sex("  "), Ok(None));
        assert_eq!(parse_sex("Female"), Ok(Some(Sex::Female)));
        assert!(parse_sex("unknown").is_err());
    }
}
