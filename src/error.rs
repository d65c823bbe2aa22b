//! Unified API error handling
//!
//! Every failure is returned as `{ "error": "<message>" }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::estimation::EstimateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Estimate(EstimateError::MissingRequiredInput) => StatusCode::BAD_REQUEST,
            // 400 for bad JSON, 415 for a missing content type, 422 for wrong field types
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Estimate(e) => e.to_string(),
            Self::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = status.as_u16(), error = %self, "API error");

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_bad_request() {
        let err = ApiError::from(EstimateError::MissingRequiredInput);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "plotSize & floors required");
    }
}
