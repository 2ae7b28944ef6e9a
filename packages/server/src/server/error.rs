//! HTTP error responses for the upload endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to the HTTP caller, each with a fixed message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request carried no blog content
    #[error("No content provided")]
    NoContent,

    /// The rewrite step produced no usable content
    #[error("LLaMA 3 processing failed")]
    RewriteFailed,

    /// The CMS did not accept the page create request
    #[error("Failed to publish post")]
    PublishFailed,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoContent => StatusCode::BAD_REQUEST,
            ApiError::RewriteFailed | ApiError::PublishFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NoContent.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::RewriteFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::PublishFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::NoContent.to_string(), "No content provided");
        assert_eq!(
            ApiError::RewriteFailed.to_string(),
            "LLaMA 3 processing failed"
        );
        assert_eq!(ApiError::PublishFailed.to_string(), "Failed to publish post");
    }
}
