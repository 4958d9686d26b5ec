//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the note record. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

use notesync_core::notes::Note;
use notesync_core::storage::RepositoryError;

use super::keys;

pub const ENTITY_TYPE_NOTE: &str = "NOTE";

/// Convert a Note to a DynamoDB item.
pub fn note_to_item(note: &Note) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert("PK".to_string(), AttributeValue::S(keys::owner_pk()));
    item.insert("SK".to_string(), AttributeValue::S(keys::note_sk(&note.id)));

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_NOTE.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(note.id.clone()));
    item.insert("title".to_string(), AttributeValue::S(note.title.clone()));
    item.insert("note".to_string(), AttributeValue::S(note.note.clone()));
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(note.created_at.to_rfc3339()),
    );
    item.insert(
        "updatedAt".to_string(),
        AttributeValue::S(note.updated_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a Note.
pub fn item_to_note(item: &HashMap<String, AttributeValue>) -> Result<Note, RepositoryError> {
    Ok(Note {
        id: get_string(item, "id")?,
        title: get_string(item, "title")?,
        note: get_string(item, "note")?,
        created_at: get_datetime(item, "createdAt")?,
        updated_at: get_datetime(item, "updatedAt")?,
    })
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            RepositoryError::Serialization(format!("missing or invalid attribute: {key}"))
        })
}

fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let raw = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("invalid timestamp in {key}: {e}")))
}
