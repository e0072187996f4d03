//! API Request Handlers

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use super::types::{AnalyticsData, CheckParams, SanityData, StatusData};
use crate::core::address::normalize_address;
use crate::core::evaluator::evaluate;
use crate::core::response::{RiskResponse, RiskResponseBuilder};
use crate::models::config::ListSources;
use crate::models::errors::{ApiError, ApiResult};
use crate::utils::constants::ERR_ADDRESS_REQUIRED;

/// Shared application state: the startup snapshot of the configured list
/// sources. Immutable; handlers parse their own sets per request.
pub struct AppState {
    pub lists: ListSources,
}

impl AppState {
    pub fn new(lists: ListSources) -> Self {
        Self { lists }
    }
}

// ============================================
// Status
// ============================================

pub async fn status() -> Json<StatusData> {
    Json(StatusData::current())
}

// ============================================
// Sanity
// ============================================

/// Entry counts for each configured list source. Sizes only; raw list
/// contents never leave the process.
pub async fn sanity(State(state): State<Arc<AppState>>) -> Json<SanityData> {
    Json(SanityData::from_sources(&state.lists))
}

// ============================================
// Risk Check
// ============================================

/// The main evaluation endpoint: normalize, screen against the lists, shape
/// the verdict. A missing address and a malformed one get the same 400.
pub async fn check(
    State(state): State<Arc<AppState>>,
    params: Option<Query<CheckParams>>,
) -> ApiResult<Json<RiskResponse>> {
    let params = params.map(|Query(inner)| inner).unwrap_or_default();

    let Some(address) = normalize_address(params.address.as_deref()) else {
        return Err(ApiError::bad_request(ERR_ADDRESS_REQUIRED));
    };
    let network = params.network_label();

    // Fresh parse per request; the blobs are small plaintext config.
    let lists = state.lists.resolve();
    let verdict = evaluate(&address, &lists);

    Ok(Json(RiskResponseBuilder::new(address, network, verdict).build()))
}

// ============================================
// Analytics (stub)
// ============================================

/// Enrichment stub. A missing or invalid address soft-fails to an empty 204
/// here, analytics being best-effort rather than a client error.
pub async fn analytics(params: Option<Query<CheckParams>>) -> Response {
    let params = params.map(|Query(inner)| inner).unwrap_or_default();

    match normalize_address(params.address.as_deref()) {
        Some(address) => Json(AnalyticsData::stub(address, params.network_label())).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

// ============================================
// Fallback
// ============================================

pub async fn not_found() -> ApiError {
    ApiError::no_such_endpoint()
}
