//! API error type shared by the note handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use notesync_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors surfaced at the handler boundary.
///
/// The complete status vocabulary of the API is 400, 404 and 500; every
/// failure inside a handler converts into exactly one of these responses,
/// with a JSON body of the form `{"error": <message>}`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The store target is not configured. Checked before any store access.
    #[error("NOTES_TABLE_NAME environment variable is required")]
    Unconfigured,
    /// The request body failed to parse or validate.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// The path identifier is missing or empty.
    #[error("Note id is required")]
    MissingId,
    /// The conditional update/delete found no matching record.
    #[error("Note not found")]
    NotFound,
    /// A store call failed. Carries a generic operation-level message so no
    /// internal detail leaks to the caller.
    #[error("{0}")]
    Store(&'static str),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unconfigured | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) | ApiError::MissingId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Maps a repository failure to an API error.
    ///
    /// Condition failures that mean "no such record" become 404; everything
    /// else becomes a 500 carrying the generic `message`.
    pub fn from_repository(err: RepositoryError, message: &'static str) -> Self {
        match repository_error_to_status_code(&err) {
            404 => ApiError::NotFound,
            _ => {
                tracing::error!(error = %err, "Store operation failed");
                ApiError::Store(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        tracing::warn!(status = %status, message = %message, "API error");
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
