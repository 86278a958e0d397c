//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the numfact
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `classify`: Integer classification with fun facts

pub mod classify;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "numfact",
        "version": env!("CARGO_PKG_VERSION"),
        "usage": "GET /api/classify-number?number=<integer>",
        "endpoints": [
            "/api/classify-number",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
