//! Route definitions for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::auth::{require_api_key, ApiKeyGate};
use crate::AppState;

/// Security scheme modifier for OpenAPI.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_cases,
        handlers::mark_printed,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::MarkPrintedRequest,
        crate::api::types::MessageResponse,
        crate::api::types::HealthResponse,
        crate::error::ErrorResponse,
        crate::domain::Case,
        crate::domain::CaseId,
        crate::domain::CaseStatus,
        crate::domain::Address,
        crate::domain::CaseFiles,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "printing", description = "Print queue endpoints"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Print Queue API",
        version = "0.1.0",
        description = "Lists cases awaiting print and acknowledges printed batches",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Prefix the printing paths are declared under in [`ApiDoc`].
const DOCUMENTED_PREFIX: &str = "/impressao";

/// OpenAPI document with the printing paths moved under `path_prefix`.
pub fn openapi_for_prefix(path_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    let paths = std::mem::take(&mut openapi.paths.paths);

    openapi.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(DOCUMENTED_PREFIX) {
            Some(rest) if rest.starts_with('/') => (format!("{path_prefix}{rest}"), item),
            _ => (path, item),
        })
        .collect();

    openapi
}

/// Build the API router.
///
/// The printing routes are mounted under `path_prefix` and gated by the API
/// key; health and docs are public.
pub fn build_router(state: AppState, gate: ApiKeyGate, path_prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // route_layer keeps unmatched paths answering 404 instead of 401
    let printing_routes = Router::new()
        .route("/casos", get(handlers::list_cases))
        .route("/marcar-como-impresso", post(handlers::mark_printed))
        .route_layer(middleware::from_fn_with_state(gate, require_api_key))
        .with_state(state);

    let router = if path_prefix.is_empty() {
        Router::new().merge(printing_routes)
    } else {
        Router::new().nest(path_prefix, printing_routes)
    };

    router
        .route("/health", get(handlers::health_check))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi_for_prefix(path_prefix)),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
