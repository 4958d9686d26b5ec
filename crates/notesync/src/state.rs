//! Application state shared by the note handlers.
//!
//! The state is cloned for each request handler. Handlers hold nothing
//! beyond the repository handle; every invocation is independent and
//! stateless.

use std::sync::Arc;

use notesync_core::storage::NoteRepository;

use crate::handlers::ApiError;

/// Shared application state.
///
/// The repository is `None` when the store target is not configured. Every
/// handler checks this first and fails fast with a 500 before any store
/// access.
#[derive(Clone)]
pub struct AppState {
    repo: Option<Arc<dyn NoteRepository>>,
}

impl AppState {
    /// Creates state over an explicit repository.
    ///
    /// Useful for tests that inject an in-memory implementation of the
    /// repository contract.
    pub fn with_repository(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo: Some(repo) }
    }

    /// Creates state with no configured store target.
    ///
    /// Every operation answers with a configuration error.
    pub fn unconfigured() -> Self {
        Self { repo: None }
    }

    /// Creates state over a fresh in-memory repository.
    #[cfg(feature = "inmemory")]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    /// Creates state over a DynamoDB repository, or unconfigured state when
    /// the table name is missing.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &crate::config::Config) -> Self {
        match &config.table_name {
            Some(table_name) => {
                let repo = crate::storage::DynamoDbRepository::from_env(table_name.clone()).await;
                Self::with_repository(Arc::new(repo))
            }
            None => Self::unconfigured(),
        }
    }

    /// Returns the repository, or a configuration error when the store
    /// target is missing.
    pub fn repository(&self) -> Result<&Arc<dyn NoteRepository>, ApiError> {
        self.repo.as_ref().ok_or(ApiError::Unconfigured)
    }
}
