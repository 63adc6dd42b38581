//! Router assembly and serving.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes;

/// Build the service router with request tracing and permissive CORS.
///
/// CORS stays wide open: the service is called cross-origin by a static
/// frontend hosted elsewhere.
pub fn build_router() -> Router {
    Router::new()
        .route("/merge", post(routes::merge))
        .route("/version", get(routes::version))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve the router until the process is stopped.
pub async fn serve(addr: &str) -> std::io::Result<()> {
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, build_router()).await
}

// ============================================================================
// Tests
// ============================================================================
