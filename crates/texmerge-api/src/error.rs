//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Convenience `Result` alias for handler outcomes.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Failure reported by the merge engine.
    #[error(transparent)]
    Merge(#[from] texmerge_core::Error),
}

impl Error {
    /// The HTTP status a failure maps onto: a missing main file is the
    /// client's mistake (404), everything else is a server-side merge
    /// failure (500).
    fn status(&self) -> StatusCode {
        match self {
            Self::Merge(texmerge_core::Error::MainFileNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Merge(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
