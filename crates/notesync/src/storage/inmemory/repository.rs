//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notesync_core::notes::{Note, NoteChanges};
use notesync_core::storage::{NoteRepository, RepositoryError, Result};

/// In-memory storage backend for testing and local development.
///
/// Holds notes in a `HashMap` behind a `tokio::sync::RwLock`. Mutations run
/// under the write lock, which gives the same existence-check-plus-mutate
/// atomicity per key that the DynamoDB backend gets from conditional
/// expressions. Data is not persisted and is lost when the repository is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    notes: Arc<RwLock<HashMap<String, Note>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn create_note(&self, note: &Note) -> Result<()> {
        let mut notes = self.notes.write().await;
        if notes.contains_key(&note.id) {
            return Err(RepositoryError::AlreadyExists {
                id: note.id.clone(),
            });
        }
        notes.insert(note.id.clone(), note.clone());
        Ok(())
    }

    async fn update_note(&self, id: &str, changes: &NoteChanges) -> Result<Note> {
        let mut notes = self.notes.write().await;
        let note = notes.get_mut(id).ok_or_else(|| RepositoryError::NotFound {
            id: id.to_string(),
        })?;
        note.apply(changes);
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &str) -> Result<()> {
        let mut notes = self.notes.write().await;
        if notes.remove(id).is_none() {
            return Err(RepositoryError::NotFound {
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_notes(&self) -> Result<Vec<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.values().cloned().collect())
    }
}
