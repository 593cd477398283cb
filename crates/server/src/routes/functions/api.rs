use axum::{
    body::Bytes,
    extract::OriginalUri,
    http::{HeaderName, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, info};

const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    (header::CONTENT_TYPE, "application/json"),
];

#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("request body is null")]
    NullBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternViews {
    pub id: u32,
    pub title: &'static str,
    pub views: u32,
}

static SAMPLE_VIEWS: [PatternViews; 3] = [
    PatternViews {
        id: 1,
        title: "Map Pattern",
        views: 150,
    },
    PatternViews {
        id: 2,
        title: "Filter Pattern",
        views: 120,
    },
    PatternViews {
        id: 3,
        title: "Reduce Pattern",
        views: 95,
    },
];

/// Any method on /.netlify/functions/api and below; dispatches on method and
/// on whether the full request path mentions `/patterns` or `/track`
pub async fn handler(method: Method, OriginalUri(uri): OriginalUri, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, CORS_HEADERS, String::new()).into_response();
    }

    match dispatch(&method, uri.path(), &body) {
        Ok((status, payload)) => json_response(status, &payload),
        Err(e) => {
            error!(error = %e, path = uri.path(), "Function request failed");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "error": "Internal server error", "details": e.to_string() }),
            )
        }
    }
}

fn dispatch(method: &Method, path: &str, body: &[u8]) -> Result<(StatusCode, Value), FunctionError> {
    if *method == Method::GET && path.contains("/patterns") {
        return Ok((StatusCode::OK, json!({ "patterns": &SAMPLE_VIEWS })));
    }

    if *method == Method::POST && path.contains("/track") {
        let pattern_id = track_pattern_id(body)?;
        info!(pattern_id = ?pattern_id, "Pattern viewed");
        return Ok((
            StatusCode::OK,
            json!({ "success": true, "message": "View tracked" }),
        ));
    }

    Ok((StatusCode::NOT_FOUND, json!({ "error": "Not found" })))
}

/// `patternId` of a track body, if any. Any JSON value but `null` is accepted.
fn track_pattern_id(body: &[u8]) -> Result<Option<Value>, FunctionError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Err(FunctionError::NullBody),
        value => Ok(value.get("patternId").cloned()),
    }
}

fn json_response(status: StatusCode, payload: &Value) -> Response {
    (status, CORS_HEADERS, payload.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_patterns() {
        let (status, payload) =
            dispatch(&Method::GET, "/.netlify/functions/api/patterns", b"").unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["patterns"][0]["views"], 150);
        assert_eq!(payload["patterns"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_dispatch_track() {
        let (status, payload) = dispatch(
            &Method::POST,
            "/.netlify/functions/api/track",
            br#"{"patternId": 3}"#,
        )
        .unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({ "success": true, "message": "View tracked" }));
    }

    #[test]
    fn test_dispatch_track_without_id_still_succeeds() {
        let (status, _) =
            dispatch(&Method::POST, "/.netlify/functions/api/track", b"{}").unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_track_accepts_any_non_null_json() {
        assert_eq!(
            track_pattern_id(br#"{"patternId": 3}"#).unwrap(),
            Some(json!(3))
        );
        let bodies: [&[u8]; 5] = [b"3", b"[]", br#""x""#, b"true", b"{}"];
        for body in bodies {
            assert_eq!(track_pattern_id(body).unwrap(), None);
            let (status, _) =
                dispatch(&Method::POST, "/.netlify/functions/api/track", body).unwrap();
            assert_eq!(status, StatusCode::OK);
        }
        assert!(matches!(track_pattern_id(b"null"), Err(FunctionError::NullBody)));
    }

    #[test]
    fn test_dispatch_track_rejects_malformed_body() {
        assert!(dispatch(&Method::POST, "/.netlify/functions/api/track", b"{oops").is_err());
        assert!(dispatch(&Method::POST, "/.netlify/functions/api/track", b"").is_err());
    }

    #[test]
    fn test_dispatch_unmatched() {
        for (method, path) in [
            (Method::GET, "/.netlify/functions/api/other"),
            (Method::POST, "/.netlify/functions/api/patterns"),
            (Method::DELETE, "/.netlify/functions/api/track"),
        ] {
            let (status, payload) = dispatch(&method, path, b"").unwrap();
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(payload["error"], "Not found");
        }
    }
}
