//! Route handlers. Each one is a thin adapter from HTTP to a store or search
//! call; all catalog semantics live in `vjdir-core`.

use crate::{error::ApiError, AppState};
use axum::{
    extract::{FromRequest, FromRequestParts, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::collections::BTreeSet;
use vjdir_core::{
    facets::{distinct_features, Facets},
    CatalogStore, NewSoftware, SearchRequest, Software, SoftwareId, SoftwareUpdate,
};

/// JSON body extractor whose rejections render as [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Path extractor whose rejections render as [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub async fn healthcheck() -> Json<Health> {
    Json(Health { status: "ok", timestamp: chrono::Utc::now() })
}

pub async fn list_software(State(state): State<AppState>) -> Json<Vec<Software>> {
    Json(state.store.list())
}

pub async fn get_software(
    State(state): State<AppState>,
    Path(id): Path<SoftwareId>,
) -> Result<Json<Software>, ApiError> {
    state.store.by_id(id).map(Json).ok_or(ApiError::NotFound(id))
}

pub async fn create_software(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewSoftware>,
) -> Result<(StatusCode, Json<Software>), ApiError> {
    let created = state.store.create(input)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_software(
    State(state): State<AppState>,
    Path(id): Path<SoftwareId>,
    JsonBody(mut patch): JsonBody<SoftwareUpdate>,
) -> Result<Json<Software>, ApiError> {
    patch.id = id;
    state.store.update(patch)?.map(Json).ok_or(ApiError::NotFound(id))
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: bool,
}

pub async fn delete_software(
    State(state): State<AppState>,
    Path(id): Path<SoftwareId>,
) -> Json<Deleted> {
    Json(Deleted { deleted: state.store.delete(id) })
}

pub async fn search_software(
    State(state): State<AppState>,
    JsonBody(mut request): JsonBody<SearchRequest>,
) -> Result<Json<Vec<Software>>, ApiError> {
    if request.sort.is_none() {
        request.sort = Some(state.default_sort.to_string());
    }
    let results = state.engine().search(&request)?;
    tracing::info!(
        query = request.query.as_deref(),
        results = results.len(),
        "search served"
    );
    Ok(Json(results))
}

pub async fn features(State(state): State<AppState>) -> Json<BTreeSet<String>> {
    Json(distinct_features(&state.store.all()))
}

pub async fn facets(State(state): State<AppState>) -> Json<Facets> {
    Json(Facets::collect(&state.store.all()))
}
