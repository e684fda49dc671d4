//! Authentication middleware.
//!
//! Operator endpoints are protected by a single static API key supplied
//! in the `X-API-Key` header and compared against configuration.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the operator API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Middleware that requires a valid API key.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let supplied = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match supplied {
        Some(key) if key == state.config.security.api_key => next.run(req).await,
        _ => ApiError::Unauthorized("Invalid or missing API key".into()).into_response(),
    }
}
