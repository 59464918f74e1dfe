//! HTTP request handlers.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::Value;

use crate::api::types::*;
use crate::domain::{Case, CaseStatus};
use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::AppState;

pub const INVALID_STATUS: &str = "Status inválido";
pub const IDS_NOT_PROVIDED: &str = "IDs não fornecidos";
pub const CASES_UPDATED: &str = "Casos atualizados com sucesso";
pub const NOT_FOUND: &str = "Recurso não encontrado";

/// List cases by status.
///
/// GET {prefix}/casos
///
/// A repeated `status` parameter is resolved by its first value.
#[utoipa::path(
    get,
    path = "/impressao/casos",
    params(ListCasesQuery),
    responses(
        (status = 200, description = "Cases awaiting print", body = [Case]),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "printing"
)]
pub async fn list_cases(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Case>>> {
    let query = match query {
        Ok(Query(pairs)) => ListCasesQuery::from_pairs(pairs),
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable query string");
            ListCasesQuery::default()
        }
    };

    match query.status.as_deref().map(str::parse::<CaseStatus>) {
        Some(Ok(CaseStatus::Pending)) => {
            let cases = state.store.pending_cases()?;
            tracing::info!(status = %CaseStatus::Pending, count = cases.len(), "Listing cases");
            Ok(Json(cases))
        }
        _ => {
            tracing::debug!(status = ?query.status, "Rejected case status filter");
            Err(ApiError::BadRequest(INVALID_STATUS.to_string()))
        }
    }
}

/// Acknowledge a batch of printed cases.
///
/// POST {prefix}/marcar-como-impresso
///
/// The body is taken as raw bytes so that a missing content type or an empty
/// body is answered with the same message as a body without `ids`. The ids
/// themselves are handed to the store as sent.
#[utoipa::path(
    post,
    path = "/impressao/marcar-como-impresso",
    request_body = MarkPrintedRequest,
    responses(
        (status = 200, description = "Cases updated", body = MessageResponse),
        (status = 400, description = "Missing ids", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "printing"
)]
pub async fn mark_printed(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let request = parse_mark_request(&body)?;

    let outcome = state.store.mark_as_printed(&request.ids)?;

    tracing::info!(
        ids = ?request.ids,
        transitioned = outcome.transitioned,
        already_printed = outcome.already_printed,
        unknown = outcome.unknown,
        "Cases marked as printed"
    );

    Ok(Json(MessageResponse {
        message: CASES_UPDATED.to_string(),
    }))
}

fn parse_mark_request(body: &[u8]) -> ApiResult<MarkPrintedRequest> {
    let not_provided = || ApiError::BadRequest(IDS_NOT_PROVIDED.to_string());

    let mut value: Value = serde_json::from_slice(body).map_err(|_| not_provided())?;
    let ids = value
        .as_object_mut()
        .and_then(|body| body.remove("ids"))
        .ok_or_else(not_provided)?;

    // A lone value is one entry, not a missing list
    let ids = match ids {
        Value::Array(ids) => ids,
        other => vec![other],
    };

    Ok(MarkPrintedRequest { ids })
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Fallback for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND.to_string())
}
