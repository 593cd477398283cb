//! Standalone stub endpoints kept at their historical serverless paths.
//!
//! These return canned sample data and are not backed by the catalog.

use axum::{Router, routing::any};

use crate::AppState;

pub mod api;
pub mod patterns;

pub fn router(_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/patterns", any(patterns::handler))
        .route("/api", any(api::handler))
        .route("/api/{*rest}", any(api::handler))
}
