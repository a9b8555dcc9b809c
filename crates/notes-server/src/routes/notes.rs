//! Note resource routes.
//!
//! - GET /api/notes - List all notes
//! - POST /api/notes - Create a note
//! - GET /api/notes/{id} - Get a note
//! - PUT /api/notes/{id} - Update a note's content and/or importance
//! - DELETE /api/notes/{id} - Delete a note
//!
//! Each handler awaits exactly one gateway call. A missing note is a branch
//! here, not an error; malformed ids and validation failures propagate to
//! [`ApiError`](crate::error::ApiError).

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use notes_core::{Note, NoteDraft, NoteUpdate};

use crate::error::{ApiResult, ErrorResponse};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Body of the 404 returned when deleting a note that does not exist.
pub const NOTE_NOT_FOUND: &str = "note not found in database";

/// GET /api/notes - All notes in the store's natural order.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.notes().find_all().await?;
    Ok(Json(notes))
}

/// GET /api/notes/{id}
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: empty body when no note has this id
async fn get_note(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    Ok(match state.notes().find_by_id(&id).await? {
        Some(note) => Json(note).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// POST /api/notes
///
/// The store stamps the id and date and defaults `important` to false.
async fn create_note(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NoteDraft>,
) -> ApiResult<Json<Note>> {
    let note = state.notes().insert(draft).await?;
    tracing::debug!(note_id = %note.id, "note created");
    Ok(Json(note))
}

/// PUT /api/notes/{id}
///
/// Responds 200 with `null` when no note has this id.
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<NoteUpdate>,
) -> ApiResult<Json<Option<Note>>> {
    let note = state.notes().update_by_id(&id, update).await?;
    Ok(Json(note))
}

/// DELETE /api/notes/{id}
///
/// # Response
///
/// - 204 No Content: the note was removed
/// - 404 Not Found: `{"error": "note not found in database"}`
async fn delete_note(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    Ok(if state.notes().delete_by_id(&id).await? {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(ErrorResponse::new(NOTE_NOT_FOUND))).into_response()
    })
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}
