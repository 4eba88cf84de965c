//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Store-access error from the document database
    #[error("Database error: {0}")]
    Database(Box<surrealdb::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client-caused validation failure, rejected before any store call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<surrealdb::Error> for Error {
    fn from(err: surrealdb::Error) -> Self {
        Self::Database(Box::new(err))
    }
}

/// Error response body
///
/// Every error carries a `message`; server errors additionally carry the
/// underlying `error` detail string for diagnostics.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,

    /// Underlying error detail (server errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Create an error response with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Create an error response with an attached detail string
    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(detail.into()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),

            Error::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),

            Error::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_detail("Server error", e.to_string()),
                )
            }

            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_detail("Server error", e.to_string()),
                )
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_detail("Server error", e.to_string()),
                )
            }

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_detail("Server error", msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
