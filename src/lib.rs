//! SafeSend Risk Library
//!
//! Stateless address-risk screening: normalize a candidate address, check it
//! against env-supplied plaintext denylists, and shape a fixed-format
//! verdict. Covers:
//! - Sanctions screening (union of two OFAC-style list sources)
//! - Internal bad-list screening
//! - A fixed CORS/no-cache header contract on every response
//!
//! Everything is a pure per-request pipeline; no persistence, no caching,
//! no cross-request state.

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::api::handlers::AppState;
pub use crate::api::{create_router, create_service};
pub use crate::core::address::{normalize_address, NormalizedAddress};
pub use crate::core::denylist::{Denylist, ResolvedLists};
pub use crate::core::evaluator::{evaluate, ListMatches, RiskVerdict};
pub use crate::core::response::{RiskResponse, RiskResponseBuilder};
pub use crate::models::config::{ListSources, ServerConfig, SourceCounts};
pub use crate::models::errors::{ApiError, ApiResult, ErrorCode};
pub use crate::utils::constants::VERSION;
