use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Condition-failure outcomes (`NotFound`, `AlreadyExists`) are distinct
/// variants from transport failures, since handlers branch on that
/// distinction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Note not found: {id}")]
    NotFound { id: String },
    #[error("Note already exists: {id}")]
    AlreadyExists { id: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::NotFound {
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Note not found: abc-123");
    }

    #[test]
    fn test_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Note already exists: abc-123");
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("invalid partition key".to_string());
        assert_eq!(error.to_string(), "Query failed: invalid partition key");
    }

    #[test]
    fn test_serialization_display() {
        let error = RepositoryError::Serialization("missing required field".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: missing required field"
        );
    }
}
