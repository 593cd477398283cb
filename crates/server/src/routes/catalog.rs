//! JSON view of the catalog for programmatic clients.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use catalog::models::pattern::Pattern;
use serde::{Deserialize, Serialize};
use services::services::{
    navigation::{PatternDetail, find_by_route_id},
    query::PatternQuery,
};
use ts_rs::TS;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct PatternListParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct HealthStatus {
    pub status: String,
    pub patterns: usize,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> ResponseJson<ApiResponse<HealthStatus>> {
    ResponseJson(ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        patterns: state.catalog().len(),
    }))
}

/// GET /api/catalog/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Vec<String>>> {
    let labels = state
        .catalog()
        .categories()
        .into_iter()
        .map(|category| category.label().to_string())
        .collect();
    ResponseJson(ApiResponse::success(labels))
}

/// GET /api/catalog/patterns?category=&q=
pub async fn list_patterns(
    State(state): State<AppState>,
    Query(params): Query<PatternListParams>,
) -> Result<ResponseJson<ApiResponse<Vec<Pattern>>>, ApiError> {
    let query = PatternQuery::from_params(params.category.as_deref(), params.q.as_deref())?;
    let patterns = query
        .apply(state.catalog())
        .into_iter()
        .cloned()
        .collect();
    Ok(ResponseJson(ApiResponse::success(patterns)))
}

/// GET /api/catalog/patterns/{id}
pub async fn get_pattern(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<PatternDetail>>, ApiError> {
    let catalog = state.catalog();
    let pattern = find_by_route_id(catalog, &raw_id)?;
    Ok(ResponseJson(ApiResponse::success(PatternDetail::new(
        catalog, pattern,
    ))))
}

pub fn router(_state: &AppState) -> Router<AppState> {
    Router::new().route("/health", get(health)).nest(
        "/catalog",
        Router::new()
            .route("/categories", get(list_categories))
            .route("/patterns", get(list_patterns))
            .route("/patterns/{id}", get(get_pattern)),
    )
}
