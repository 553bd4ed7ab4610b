pub mod config;
pub mod content_type;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod reference;
pub mod routes;
pub mod services;
pub mod swagger;


use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use config::Config;
use pipeline::MedicalReportSimplifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub simplifier: Arc<MedicalReportSimplifier>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let simplifier = Arc::new(MedicalReportSimplifier::new(&config)?);
        Ok(Self { config, simplifier })
    }
}

/// The full HTTP surface: info and simplify routes, Swagger UI, permissive
/// CORS and the upload body limit.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(routes::info::router())
        .nest("/api", routes::simplify::router())
        .merge(swagger::create_swagger_router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
