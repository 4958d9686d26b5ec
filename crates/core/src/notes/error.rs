use thiserror::Error;

/// Errors that can occur while validating a note payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
}
