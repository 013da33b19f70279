//! Showcase error type

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chirp_ui::error::ChirpUiError;
use thiserror::Error;

/// Errors returned by showcase handlers
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Template loading or rendering failed
    #[error("Template error: {0}")]
    Template(#[from] ChirpUiError),

    /// Not Found (404)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ShowcaseError {
    fn into_response(self) -> Response {
        match self {
            Self::Template(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Template rendering failed",
                )
                    .into_response()
            }
            Self::NotFound(_) => {
                tracing::debug!(error = %self, "not found");
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
        }
    }
}
