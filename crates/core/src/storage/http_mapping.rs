//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`]
//! variants, following the Functional Core pattern - pure functions with no
//! side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// The API's complete status vocabulary is 400, 404 and 500. `AlreadyExists`
/// maps to 500 rather than 409: note ids are generated server-side and
/// caller-opaque, so a create-time collision is an internal error, not a
/// caller conflict.
///
/// - `NotFound` -> 404 (Not Found)
/// - everything else -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use notesync_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::NotFound {
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 500,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
    }
}
