use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use services::services::{navigation::LookupError, query::QueryError};
use thiserror::Error;
use tracing::debug;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Lookup(LookupError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Query(QueryError::UnknownCategory(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(error = %self, status = status.as_u16(), "Request rejected");
        let body = ApiResponse::<()>::error(&self.to_string());
        (status, ResponseJson(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(LookupError::NotFound("99".to_string())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(QueryError::UnknownCategory("x".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
