use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router() -> Router {
    Router::new()
        // Static pages
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/info", get(handlers::info))
        // JSON-RPC tool protocol
        .route("/mcp", post(handlers::mcp_request))
        .layer(TraceLayer::new_for_http())
        // CORS: allow any origin
        .layer(CorsLayer::permissive())
}
