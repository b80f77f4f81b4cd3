//! Error types for the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while handling a generation request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required input (prompt or file) was missing from the request.
    #[error("{0}")]
    Validation(String),

    /// Reading a staged upload from local storage failed.
    #[error("Failed to read uploaded file: {0}")]
    ArtifactRead(#[source] std::io::Error),

    /// Writing an upload into transient storage failed.
    #[error("Failed to stage uploaded file: {0}")]
    ArtifactStage(#[source] std::io::Error),

    /// A request was composed with no parts. The handlers always supply at
    /// least an instruction part, so reaching this indicates a programming
    /// fault, not bad client input.
    #[error("A generation request must contain at least one content part")]
    EmptyRequest,

    /// The generation backend rejected or failed the request.
    #[error("{0}")]
    Backend(String),

    /// A required environment variable was not set.
    #[error("Environment variable not found: {0}")]
    Env(#[from] std::env::VarError),
}

impl GatewayError {
    /// Creates a validation error with the given client-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a backend error with the given failure description.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// The HTTP status the error maps to: 400 for client-caused failures,
    /// 500 for everything else.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        assert_eq!(
            GatewayError::validation("Prompt is required").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn backend_errors_are_server_errors_with_the_message_passed_through() {
        let err = GatewayError::backend("quota exceeded");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
