use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use medsimplify::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("medsimplify=info,lopdf=error"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration: max text {} chars, upload limit {} bytes, OCR '{}' ({:?} correction)",
        config.max_text_length, config.max_upload_bytes, config.ocr_language, config.ocr_correction
    );
    if !cfg!(feature = "ocr") {
        info!("Built without the `ocr` feature; image uploads return the extraction fallback text");
    }

    let state = Arc::new(AppState::new(config.clone())?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
