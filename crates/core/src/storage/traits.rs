use async_trait::async_trait;

use crate::notes::{Note, NoteChanges};

use super::Result;

/// Repository for note operations.
///
/// All records belong to one fixed logical owner; the note id addresses a
/// single record within that partition. Every mutating operation is
/// single-key and condition-guarded: the existence check and the mutation
/// resolve as one atomic step at the store, so concurrent calls on the same
/// id cannot race past each other.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Inserts a new note only if no record with the same id exists.
    ///
    /// Fails with `AlreadyExists` when the id is already present.
    async fn create_note(&self, note: &Note) -> Result<()>;

    /// Applies a change set to an existing note and returns the full
    /// post-update record.
    ///
    /// Fails with `NotFound` when the id is absent.
    async fn update_note(&self, id: &str, changes: &NoteChanges) -> Result<Note>;

    /// Removes a note only if it exists.
    ///
    /// Fails with `NotFound` when the id is absent.
    async fn delete_note(&self, id: &str) -> Result<()>;

    /// Returns all notes for the fixed owner, in no particular order.
    async fn list_notes(&self) -> Result<Vec<Note>>;
}
