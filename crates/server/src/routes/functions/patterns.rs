use axum::{
    http::{Method, StatusCode, header},
    response::{IntoResponse, Json as ResponseJson, Response},
};
use catalog::models::pattern::{Difficulty, PatternCategory};
use serde::Serialize;
use serde_json::json;

/// Sample pattern summary; a separate, smaller dataset than the catalog
#[derive(Debug, Clone, Serialize)]
pub struct PatternSummary {
    pub id: u32,
    pub category: PatternCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

static SAMPLE_PATTERNS: [PatternSummary; 3] = [
    PatternSummary {
        id: 1,
        category: PatternCategory::ArrayMethods,
        title: "Map - Transform Array Elements",
        description: "The map() method creates a new array by applying a function to each element.",
        difficulty: Difficulty::Beginner,
    },
    PatternSummary {
        id: 2,
        category: PatternCategory::ArrayMethods,
        title: "Filter - Select Specific Elements",
        description: "The filter() method creates a new array with elements that pass a test.",
        difficulty: Difficulty::Beginner,
    },
    PatternSummary {
        id: 3,
        category: PatternCategory::AsyncPatterns,
        title: "Promises - Handle Async Operations",
        description: "Promises represent future values and handle asynchronous operations cleanly.",
        difficulty: Difficulty::Intermediate,
    },
];

#[derive(Debug, Serialize)]
struct PatternsResponse {
    success: bool,
    data: &'static [PatternSummary],
    count: usize,
}

/// Any method on /.netlify/functions/patterns
pub async fn handler(method: Method) -> Response {
    if method != Method::GET {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            ResponseJson(json!({ "error": "Method not allowed" })),
        )
            .into_response();
    }

    let body = PatternsResponse {
        success: true,
        data: &SAMPLE_PATTERNS,
        count: SAMPLE_PATTERNS.len(),
    };
    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        ResponseJson(body),
    )
        .into_response()
}
