//! Relay error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the proxy routes and the job watcher.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("missing multipart field {0:?}")]
    MissingField(&'static str),
    #[error("malformed multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidField { .. }
            | RelayError::MissingField(_)
            | RelayError::Multipart(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        // Same `{"detail": ...}` error shape the upstream service emits.
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        let err = RelayError::InvalidField {
            field: "model_type",
            value: "boats".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::MissingField("sketch").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_message_names_field() {
        let err = RelayError::InvalidField {
            field: "sketch_style",
            value: "sketchy".to_string(),
        };
        assert!(err.to_string().contains("sketch_style"));
        assert!(err.to_string().contains("sketchy"));
    }
}
