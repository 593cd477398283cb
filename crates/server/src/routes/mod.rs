use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod assets;
pub mod catalog;
pub mod functions;
pub mod pages;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(pages::router(&state))
        .merge(assets::router(&state))
        .nest("/api", catalog::router(&state))
        .nest("/.netlify/functions", functions::router(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
