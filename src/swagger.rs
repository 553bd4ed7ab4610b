use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use axum::Router;
use std::sync::Arc;

use crate::{
    models::{
        HealthResponse, PipelineErrorResponse, ProcessingResult, ProcessingSummary, ReportType,
        ServiceInfoResponse, Sex, SimplifyTextRequest, TestResult,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::info::service_info,
        crate::routes::info::health_check,
        crate::routes::simplify::simplify_report,
        crate::routes::simplify::simplify_text,
    ),
    components(
        schemas(
            ProcessingResult, ProcessingSummary, PipelineErrorResponse, SimplifyTextRequest,
            ReportType, Sex, TestResult, ServiceInfoResponse, HealthResponse
        )
    ),
    tags(
        (name = "info", description = "Service metadata and health"),
        (name = "simplify", description = "Lab report simplification"),
    ),
    info(
        title = "Medical Report Simplifier API",
        version = "2.0.0",
        description = "Turns lab report text, PDFs and scans into plain-language explanations"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
