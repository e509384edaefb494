use std::path::Path;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Serve the page and its generated JSON documents from `public_dir`.
pub fn router(public_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}
