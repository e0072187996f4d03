//! API Route Configuration

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};
use super::middleware::{cors_middleware, logging_middleware};

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Status & configuration visibility
        .route("/", get(handlers::status))
        .route("/sanity", get(handlers::sanity))
        // Screening
        .route("/check", get(handlers::check))
        .route("/analytics", get(handlers::analytics))
        // Unknown paths share the fixed header set via the middleware below
        .fallback(handlers::not_found)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

/// Wrap the router so trailing slashes route like their bare paths
/// (`/check/` serves `/check`). Path rewriting has to happen before routing,
/// which a `Router::layer` call is too late for, hence the external wrap.
pub fn create_service(state: Arc<AppState>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(state))
}
