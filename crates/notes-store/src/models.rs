//! Database models and schema validation for notes.
//!
//! [`NoteRow`] maps directly to a row of the `notes` table. [`NewNote`] is a
//! draft that has passed schema validation and been stamped with its id and
//! creation date; both backends insert only `NewNote`s.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use notes_core::{Note, NoteDraft, NoteId};

use crate::error::{StoreError, StoreResult};

/// Validation message for a draft without content.
pub const CONTENT_REQUIRED: &str = "Note validation failed: content: Path `content` is required.";

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    pub date: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            content: row.content,
            important: row.important,
            date: row.date,
        }
    }
}

/// A validated note ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub id: NoteId,
    pub content: String,
    pub important: bool,
    pub date: DateTime<Utc>,
}

impl NewNote {
    /// Validate `draft` against the note schema and stamp it.
    ///
    /// `content` must be present and non-empty. `important` defaults to
    /// `false`. The id is freshly generated and the date is `now`.
    pub fn from_draft(draft: NoteDraft, now: DateTime<Utc>) -> StoreResult<Self> {
        let content = match draft.content {
            Some(content) if !content.is_empty() => content,
            _ => return Err(StoreError::Validation(CONTENT_REQUIRED.to_string())),
        };

        Ok(Self {
            id: NoteId::new(),
            content,
            important: draft.important.unwrap_or(false),
            date: now,
        })
    }
}

impl From<NewNote> for Note {
    fn from(new: NewNote) -> Self {
        Self {
            id: new.id,
            content: new.content,
            important: new.important,
            date: new.date,
        }
    }
}

/// Parse a raw path id into a [`NoteId`].
///
/// Anything that is not a UUID is reported as [`StoreError::MalformedId`].
pub fn parse_note_id(raw: &str) -> StoreResult<NoteId> {
    raw.parse()
        .map_err(|_| StoreError::MalformedId(raw.to_string()))
}
