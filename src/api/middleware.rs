//! API Middleware (CORS/Cache Headers, Method Gate, Logging)
//!
//! The wire contract fixes an exact header set on every response, including
//! errors and empty 204s, so the headers are overlaid here instead of going
//! through a negotiating CORS layer.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA,
};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Instant;
use tracing::info;

use crate::models::errors::ApiError;
use crate::utils::constants;

// Global header table, built once
lazy_static::lazy_static! {
    static ref RESPONSE_HEADERS: [(HeaderName, HeaderValue); 7] = [
        (
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(constants::CORS_ALLOW_ORIGIN),
        ),
        (
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(constants::CORS_ALLOW_METHODS),
        ),
        (
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(constants::CORS_ALLOW_HEADERS),
        ),
        (CACHE_CONTROL, HeaderValue::from_static(constants::CACHE_CONTROL)),
        (PRAGMA, HeaderValue::from_static(constants::PRAGMA)),
        (EXPIRES, HeaderValue::from_static(constants::EXPIRES)),
        (CONTENT_TYPE, HeaderValue::from_static(constants::CONTENT_TYPE_JSON)),
    ];
}

/// Overlay the fixed header set, replacing whatever the inner service set.
fn apply_response_headers(headers: &mut HeaderMap) {
    for (name, value) in RESPONSE_HEADERS.iter() {
        headers.insert(name.clone(), value.clone());
    }
}

/// CORS preflight, method gate, and the uniform header overlay.
///
/// OPTIONS terminates here with an empty 204. Methods outside GET/HEAD get a
/// 400 without reaching the routes. Everything else passes through and picks
/// up the header set on the way out.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();

    let mut response = if method == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else if method != Method::GET && method != Method::HEAD {
        ApiError::method_not_allowed().into_response()
    } else {
        next.run(request).await
    };

    apply_response_headers(response.headers_mut());
    response
}

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        latency_ms = %latency.as_millis(),
        "request completed"
    );

    response
}
