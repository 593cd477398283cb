//! HTML list and detail pages.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use services::services::{
    navigation::{PatternDetail, find_by_route_id},
    query::PatternQuery,
};
use tracing::debug;

use crate::{
    AppState,
    views::{
        PageContext, Theme,
        detail::{render_detail, render_not_found},
        home::render_home,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeParams {
    pub theme: Option<String>,
}

/// GET /
pub async fn home(State(state): State<AppState>, Query(params): Query<HomeParams>) -> Html<String> {
    let theme = Theme::from_param(params.theme.as_deref(), state.config().default_theme);
    let query = PatternQuery::from_params_lenient(params.category.as_deref(), params.q.as_deref());
    let results = query.apply(state.catalog());

    let mut ctx = PageContext::new(theme, "/");
    if !query.category.is_wildcard() {
        ctx = ctx.with_param("category", query.category.label());
    }
    if !query.search_term.is_empty() {
        ctx = ctx.with_param("q", query.search_term.clone());
    }

    Html(render_home(
        &ctx,
        &state.catalog().categories(),
        &query,
        &results,
    ))
}

/// GET /pattern/{id}
pub async fn pattern_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<ThemeParams>,
) -> Response {
    let theme = Theme::from_param(params.theme.as_deref(), state.config().default_theme);
    let catalog = state.catalog();

    match find_by_route_id(catalog, &raw_id) {
        Ok(pattern) => {
            let ctx = PageContext::new(theme, format!("/pattern/{}", pattern.id));
            let detail = PatternDetail::new(catalog, pattern);
            Html(render_detail(&ctx, &detail)).into_response()
        }
        Err(e) => {
            debug!(error = %e, "Rendering not-found page");
            let path = format!("/pattern/{}", urlencoding::encode(&raw_id));
            not_found_page(PageContext::new(theme, path))
        }
    }
}

/// GET /pattern and /pattern/ with no id
pub async fn missing_pattern(
    State(state): State<AppState>,
    Query(params): Query<ThemeParams>,
) -> Response {
    let theme = Theme::from_param(params.theme.as_deref(), state.config().default_theme);
    not_found_page(PageContext::new(theme, "/pattern"))
}

fn not_found_page(ctx: PageContext) -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found(&ctx))).into_response()
}

pub fn router(_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/pattern", get(missing_pattern))
        .route("/pattern/", get(missing_pattern))
        .route("/pattern/{id}", get(pattern_detail))
}
