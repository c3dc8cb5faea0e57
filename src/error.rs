//! Error types for the digest server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Digest Error Enum ==
/// Unified error type for the digest server.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Inbound payload is malformed or matches neither accepted shape
    #[error("Invalid digest structure: {0}")]
    InvalidStructure(String),

    /// No live digest entry exists (never written or expired)
    #[error("No digest available")]
    Unavailable,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DigestError {
    fn into_response(self) -> Response {
        let (status, taxonomy, message) = match &self {
            DigestError::InvalidStructure(msg) => (
                StatusCode::BAD_REQUEST,
                "InvalidDigestStructure",
                msg.clone(),
            ),
            DigestError::Unavailable => (
                StatusCode::NOT_FOUND,
                "DigestUnavailable",
                "No digest available for today".to_string(),
            ),
            // Never leak internals to the caller
            DigestError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalFault",
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": taxonomy,
            "message": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the digest server.
pub type Result<T> = std::result::Result<T, DigestError>;
