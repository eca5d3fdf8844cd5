//! API implementation for the synonyms HTTP server

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

pub mod dto;
pub mod synonyms;
pub mod validation;

use dto::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        synonyms::add_synonym,
        synonyms::add_synonym_group,
        synonyms::get_synonyms,
        synonyms::get_synonyms_within,
        health_check,
    ),
    components(
        schemas(
            dto::AddSynonymRequest,
            dto::AddSynonymGroupRequest,
            dto::SynonymsResponse,
            dto::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "synonyms", description = "Synonym registration and lookup"),
    ),
    info(
        title = "Synonyms Service API",
        version = "1.0.0",
        description = "RESTful API to register synonym pairs and query direct or transitive synonyms. Words are matched case-insensitively.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api", description = "API base path")
    )
)]
pub struct ApiDoc;

/// Create the main router with all API endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_request_size;

    let api_router = Router::new()
        .route(
            "/synonyms",
            post(synonyms::add_synonym).get(synonyms::get_synonyms),
        )
        .route("/synonym-groups", post(synonyms::add_synonym_group))
        .route("/synonyms/{word}", get(synonyms::get_synonyms_within))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    let swagger_router = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new().nest("/api", api_router).merge(swagger_router)
}

/// Health check endpoint with store size
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health and store size", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.store.stats();

    Json(HealthResponse {
        status: "OK".to_string(),
        version: ::synonyms::VERSION.to_string(),
        words: stats.words,
        links: stats.links,
    })
}
