//! Authentication middleware for axum.

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::ApiKeyGate;
use crate::error::ApiError;

pub const MISSING_API_KEY: &str = "API key não fornecida";
pub const INVALID_API_KEY: &str = "API key inválida";

/// Require `Authorization: Bearer <key>` matching the configured secret.
///
/// The wrapped handler only runs when the key matches; otherwise the request
/// is answered with 401 here.
pub async fn require_api_key(
    State(gate): State<ApiKeyGate>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let api_key = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized(MISSING_API_KEY.to_string()))?;

    if !gate.verify(api_key) {
        let prefix: String = api_key.chars().take(4).collect();
        tracing::warn!(key_prefix = %prefix, "Invalid API key attempted");
        return Err(ApiError::Unauthorized(INVALID_API_KEY.to_string()));
    }

    Ok(next.run(request).await)
}
