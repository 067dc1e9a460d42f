//! Preview server
//!
//! Serves the static dashboard directory (page, assets and `data.json`)
//! for local previews. The dataset is parsed once at startup so a broken
//! `data.json` is reported before the first browser request.

#[cfg(feature = "preview")]
use axum::{response::IntoResponse, routing::get, Json, Router};

#[cfg(feature = "preview")]
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

#[cfg(feature = "preview")]
use std::path::PathBuf;

#[cfg(feature = "preview")]
use crate::config::ExplorerConfig;

#[cfg(feature = "preview")]
use crate::loader::{load_dataset, FileSource};

// ============================================================================
// Configuration
// ============================================================================

#[cfg(feature = "preview")]
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub site_dir: PathBuf,
    pub port: u16,
}

#[cfg(feature = "preview")]
impl PreviewConfig {
    /// `SITE_DIR` (default `site`) and `PORT` (default 8080)
    pub fn from_env() -> Self {
        let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| "site".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Self {
            site_dir: PathBuf::from(site_dir),
            port,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Parse the site's dataset; fails if it would fail in the browser
#[cfg(feature = "preview")]
pub async fn validate_site(site_dir: &std::path::Path, explorer: &ExplorerConfig) -> anyhow::Result<()> {
    let source = FileSource::new(site_dir.join(&explorer.data_path));
    let dataset = load_dataset(&source).await?;
    tracing::info!(
        "Dataset OK: {} species, {} recommendations",
        dataset.species.len(),
        dataset.recommendations.len()
    );
    Ok(())
}

#[cfg(feature = "preview")]
pub fn create_router(site_dir: PathBuf) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(site_dir).append_index_html_on_directories(true))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(feature = "preview")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
