//! DynamoDB repository implementation.
//!
//! Implements `notesync_core::storage::NoteRepository` using DynamoDB.
//! Every mutation is a single condition-guarded operation, so the existence
//! check and the write resolve atomically at the store.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use notesync_core::notes::{Note, NoteChanges};
use notesync_core::storage::{NoteRepository, RepositoryError, Result};

use super::conversions::{item_to_note, note_to_item};
use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_update_item_error,
};
use super::keys;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository for the given table using the AWS SDK
    /// default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl NoteRepository for DynamoDbRepository {
    async fn create_note(&self, note: &Note) -> Result<()> {
        let item = note_to_item(note);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &note.id))?;

        Ok(())
    }

    async fn update_note(&self, id: &str, changes: &NoteChanges) -> Result<Note> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::owner_pk()))
            .key("SK", AttributeValue::S(keys::note_sk(id)))
            .update_expression("SET #title = :title, #note = :note, #updated_at = :ts")
            .condition_expression("attribute_exists(PK)")
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#note", "note")
            .expression_attribute_names("#updated_at", "updatedAt")
            .expression_attribute_values(":title", AttributeValue::S(changes.title.clone()))
            .expression_attribute_values(":note", AttributeValue::S(changes.note.clone()))
            .expression_attribute_values(
                ":ts",
                AttributeValue::S(changes.updated_at.to_rfc3339()),
            )
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, id))?;

        let item = result.attributes.ok_or_else(|| {
            RepositoryError::Serialization("UpdateItem returned no attributes".to_string())
        })?;

        item_to_note(&item)
    }

    async fn delete_note(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::owner_pk()))
            .key("SK", AttributeValue::S(keys::note_sk(id)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id))?;

        Ok(())
    }

    async fn list_notes(&self) -> Result<Vec<Note>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("PK = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(keys::owner_pk()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_note).collect()
    }
}
