use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::StorageError;
use thiserror::Error;

/// Failures that end a request. Validation problems never get here; they
/// are rendered back into the form.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // details stay in the log
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred",
        )
            .into_response()
    }
}
