//! API request and response types.

use serde::Serialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

// ==================== Cases ====================

/// Query parameters for listing cases.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCasesQuery {
    /// Case status filter. Only `em_fila` is accepted.
    pub status: Option<String>,
}

impl ListCasesQuery {
    /// Build from decoded query pairs; the first `status` wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let status = pairs
            .into_iter()
            .find(|(key, _)| key == "status")
            .map(|(_, value)| value);

        Self { status }
    }
}

/// Request to acknowledge printed cases.
#[derive(Debug, ToSchema)]
pub struct MarkPrintedRequest {
    /// Ids of the printed cases, passed to the store as sent.
    #[schema(value_type = Vec<i64>)]
    pub ids: Vec<Value>,
}

/// Plain confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Timestamp.
    pub timestamp: String,
}
