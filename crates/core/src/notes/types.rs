use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored note record.
///
/// A note is either absent from the store or fully populated; there is no
/// partially-constructed state. The `id` is generated server-side at
/// creation time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with a generated id and matching timestamps.
    pub fn new(title: impl Into<String>, note: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            note: note.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific id for this note (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Applies a change set to this note.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, changes: &NoteChanges) {
        self.title = changes.title.clone();
        self.note = changes.note.clone();
        self.updated_at = changes.updated_at;
    }
}

/// The mutable fields applied by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: String,
    pub note: String,
    pub updated_at: DateTime<Utc>,
}

impl NoteChanges {
    /// Builds a change set stamped with the current time.
    pub fn new(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: note.into(),
            updated_at: Utc::now(),
        }
    }
}
