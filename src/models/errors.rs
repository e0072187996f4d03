//! Centralized Error Handling Module
//!
//! Only two failure categories ever reach clients: bad request and not
//! found. Both serialize as `{"error": <message>}` with the matching 4xx
//! status. Every other code path in the service is total and cannot fail.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::utils::constants::{ERR_METHOD_NOT_ALLOWED, ERR_NO_ENDPOINT};

/// Client-visible error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing or malformed required input, or a disallowed method.
    BadRequest,
    /// Unknown path.
    NotFound,
}

impl ErrorCode {
    /// Get string representation of error code (for logging)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// A client-visible error: category plus the message reported on the wire.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

// ============================================
// Convenience constructors
// ============================================

impl ApiError {
    /// Missing or malformed input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Unknown resource
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Disallowed HTTP method
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorCode::BadRequest, ERR_METHOD_NOT_ALLOWED)
    }

    /// Unmatched route
    pub fn no_such_endpoint() -> Self {
        Self::new(ErrorCode::NotFound, ERR_NO_ENDPOINT)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.code.http_status(), body).into_response()
    }
}

// ============================================
// Result type alias
// ============================================

/// Handler Result type
pub type ApiResult<T> = Result<T, ApiError>;
