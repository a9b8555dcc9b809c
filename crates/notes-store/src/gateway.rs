//! The persistence gateway trait.
//!
//! Handlers talk to notes only through [`NoteGateway`]. Ids arrive as the raw
//! strings taken from the request path; each backend parses them and reports
//! [`StoreError::MalformedId`](crate::StoreError::MalformedId) for anything
//! that is not a valid id. A well-formed id with no matching note yields
//! `None` (or `false` for deletes), never an error.

use std::fmt;

use async_trait::async_trait;
use notes_core::{Note, NoteDraft, NoteUpdate};

use crate::error::StoreResult;

/// CRUD operations over the note collection.
#[async_trait]
pub trait NoteGateway: Send + Sync + fmt::Debug {
    /// All notes in the backend's natural (insertion) order.
    async fn find_all(&self) -> StoreResult<Vec<Note>>;

    /// The note with the given id, if any.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Note>>;

    /// Validate and persist a new note, returning it with id and date set.
    async fn insert(&self, draft: NoteDraft) -> StoreResult<Note>;

    /// Apply `update` to the note with the given id and return the new state.
    ///
    /// Updates are not schema-validated.
    async fn update_by_id(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>>;

    /// Remove the note with the given id. Returns whether a note was removed.
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
}
