use axum::{response::Json, routing::get, Router};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    models::{HealthResponse, ServiceInfoResponse},
    AppState,
};

pub const SERVICE_NAME: &str = "Enhanced Medical Report Simplifier";
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(service_info))
        .route("/api/health", get(health_check))
}

/// Service metadata and the list of available endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfoResponse)
    )
)]
pub async fn service_info() -> Json<ServiceInfoResponse> {
    let features = [
        "Multi-format file support (TXT, PDF, Images)",
        "Enhanced medical term recognition",
        "Risk-level status indicators",
        "Categorized test results",
        "Personalized recommendations",
    ];

    let endpoints = BTreeMap::from([
        ("/api/simplify".to_string(), "POST - Upload medical report for simplification".to_string()),
        ("/api/simplify-text".to_string(), "POST - Simplify medical text directly".to_string()),
        ("/api/health".to_string(), "GET - API health check".to_string()),
    ]);

    Json(ServiceInfoResponse {
        message: "Enhanced Medical Report Simplification API".to_string(),
        status: "running".to_string(),
        version: SERVICE_VERSION.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        endpoints,
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "info",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
        version: SERVICE_VERSION.to_string(),
    })
}
