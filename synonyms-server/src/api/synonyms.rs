//! Synonym management API endpoints

use std::sync::Arc;

use axum::{
    Json as JsonExtractor,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use tracing::debug;

use synonyms::word::normalize;

use crate::{
    api::dto::{AddSynonymGroupRequest, AddSynonymRequest, DepthParams, SynonymsQuery, SynonymsResponse},
    api::validation::{validate_group, validate_required},
    error::{ServerResult, not_found},
    state::AppState,
};

const NO_SYNONYM_FOUND: &str = "Could not find a valid synonym.";

/// Register a synonym pair
#[utoipa::path(
    post,
    path = "/api/synonyms",
    tag = "synonyms",
    request_body = AddSynonymRequest,
    responses(
        (status = 204, description = "Synonym pair stored"),
        (status = 400, description = "Missing or blank field", body = crate::error::ErrorResponse),
    )
)]
pub async fn add_synonym(
    State(state): State<Arc<AppState>>,
    payload: Result<JsonExtractor<AddSynonymRequest>, JsonRejection>,
) -> ServerResult<StatusCode> {
    let JsonExtractor(request) = payload?;

    let word = validate_required("word", request.word.as_deref())?;
    let to = validate_required("to", request.to.as_deref())?;

    state.store.add(word, to);

    Ok(StatusCode::NO_CONTENT)
}

/// Register a group of mutual synonyms
#[utoipa::path(
    post,
    path = "/api/synonym-groups",
    tag = "synonyms",
    request_body = AddSynonymGroupRequest,
    responses(
        (status = 204, description = "Every pair in the group stored"),
        (status = 400, description = "Fewer than two words, or a blank word", body = crate::error::ErrorResponse),
    )
)]
pub async fn add_synonym_group(
    State(state): State<Arc<AppState>>,
    payload: Result<JsonExtractor<AddSynonymGroupRequest>, JsonRejection>,
) -> ServerResult<StatusCode> {
    let JsonExtractor(request) = payload?;

    let words = validate_group(request.words.as_deref())?;
    let linked = state.store.add_group(words);

    debug!(size = words.len(), linked, "Stored synonym group");
    Ok(StatusCode::NO_CONTENT)
}

/// Look up the synonyms of a word
#[utoipa::path(
    get,
    path = "/api/synonyms",
    tag = "synonyms",
    params(SynonymsQuery),
    responses(
        (status = 200, description = "Synonyms found", body = SynonymsResponse),
        (status = 400, description = "Missing or blank word", body = crate::error::ErrorResponse),
        (status = 404, description = "No synonym recorded for the word", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_synonyms(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SynonymsQuery>, QueryRejection>,
) -> ServerResult<Json<SynonymsResponse>> {
    let Query(params) = query?;

    let word = validate_required("word", params.word.as_deref())?;
    let synonyms = state.store.get_synonyms(word, params.transitive_search);

    if synonyms.is_empty() {
        return Err(not_found(NO_SYNONYM_FOUND));
    }

    Ok(Json(SynonymsResponse::new(
        normalize(word),
        params.transitive_search,
        None,
        synonyms,
    )))
}

/// Look up the words reachable from a word within a number of links
#[utoipa::path(
    get,
    path = "/api/synonyms/{word}",
    tag = "synonyms",
    params(
        ("word" = String, Path, description = "Word to look up (case-insensitive)"),
        DepthParams,
    ),
    responses(
        (status = 200, description = "Synonyms found", body = SynonymsResponse),
        (status = 400, description = "Blank word or invalid depth", body = crate::error::ErrorResponse),
        (status = 404, description = "No synonym within reach", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_synonyms_within(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
    query: Result<Query<DepthParams>, QueryRejection>,
) -> ServerResult<Json<SynonymsResponse>> {
    let Query(params) = query?;

    let word = validate_required("word", Some(word.as_str()))?;
    let max_depth = params.max_depth.or(state.default_max_depth);

    let synonyms = match max_depth {
        Some(depth) => state.store.get_synonyms_within(word, depth),
        None => state.store.get_synonyms(word, true),
    };

    if synonyms.is_empty() {
        return Err(not_found(NO_SYNONYM_FOUND));
    }

    Ok(Json(SynonymsResponse::new(
        normalize(word),
        true,
        max_depth,
        synonyms,
    )))
}
