//! Core data types for the notes API.
//!
//! A note is a piece of text content with an importance flag and a
//! server-stamped creation date. The types here are shared by the store
//! (which persists them) and the server (which serializes them).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Assigned by the store when the note is created and never changed
/// afterwards. Rendered as a canonical hyphenated UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// A persisted note.
///
/// Every persisted note has an id and a date; both are set by the server
/// and cannot be changed by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub important: bool,
    pub date: DateTime<Utc>,
}

/// Client-supplied fields for creating a note.
///
/// Both fields are optional on the wire. A missing `content` is rejected by
/// the store's schema validation, not here; a missing `important` defaults
/// to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub important: Option<bool>,
}

impl NoteDraft {
    /// Draft with the given content and no importance flag.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            important: None,
        }
    }

    /// Set the importance flag.
    #[must_use]
    pub fn important(mut self, important: bool) -> Self {
        self.important = Some(important);
        self
    }
}

/// Client-supplied fields for updating a note.
///
/// Absent fields are left unchanged. `id` and `date` are not part of the
/// update surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub important: Option<bool>,
}

impl NoteUpdate {
    /// Apply the present fields to `note` in place.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(important) = self.important {
            note.important = important;
        }
    }
}
