//! Note CRUD handlers.
//!
//! Each handler validates its inputs, issues exactly one conditional
//! repository call, and maps the outcome to a response. Nothing is retried
//! and no handler holds state across invocations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use notesync_core::notes::{Note, NoteChanges, NotePayload, ValidatedPayload};

use crate::{handlers::ApiError, state::AppState};

/// Parses and validates a create/update payload.
///
/// Unparseable JSON and missing/blank fields both map to a 400; the store
/// is never contacted for an invalid payload.
fn parse_payload(
    body: Result<Json<NotePayload>, JsonRejection>,
) -> Result<ValidatedPayload, ApiError> {
    let Json(payload) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    payload
        .validated()
        .map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Extracts and trims the note id from the request path.
fn parse_note_id(Path(id): Path<String>) -> Result<String, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::MissingId);
    }
    Ok(id.to_string())
}

/// Create a new note (POST /notes).
///
/// The id and timestamps are generated server-side; an id collision at the
/// store surfaces as an opaque 500.
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<NotePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let repo = state.repository()?;
    let payload = parse_payload(body)?;

    tracing::debug!(title = %payload.title, "Received create note request");

    let note = Note::new(payload.title, payload.note);

    repo.create_note(&note)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create note"))?;

    tracing::info!(note_id = %note.id, title = %note.title, "Created note");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": note.id,
            "title": note.title,
            "note": note.note,
        })),
    ))
}

/// List all notes (GET /notes).
///
/// Read-only and idempotent; `items` carries no ordering contract.
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = state.repository()?;

    let items = repo
        .list_notes()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to list notes"))?;

    Ok(Json(serde_json::json!({ "items": items })))
}

/// Update a note by ID (PUT /notes/{id}).
///
/// Applies `title`, `note` and a fresh `updated_at` in one conditional
/// store operation and returns the full post-update record; `created_at` is
/// untouched.
pub async fn update_note(
    State(state): State<AppState>,
    path: Path<String>,
    body: Result<Json<NotePayload>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let repo = state.repository()?;
    let id = parse_note_id(path)?;
    let payload = parse_payload(body)?;

    tracing::debug!(note_id = %id, "Received update note request");

    let changes = NoteChanges::new(payload.title, payload.note);
    let updated = repo
        .update_note(&id, &changes)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update note"))?;

    tracing::info!(note_id = %id, "Updated note");

    Ok(Json(updated))
}

/// Delete a note by ID (DELETE /notes/{id}).
pub async fn delete_note(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = state.repository()?;
    let id = parse_note_id(path)?;

    tracing::debug!(note_id = %id, "Received delete note request");

    repo.delete_note(&id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to delete note"))?;

    tracing::info!(note_id = %id, "Deleted note");

    Ok(Json(serde_json::json!({ "message": "Note deleted" })))
}
