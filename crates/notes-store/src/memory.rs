//! In-process note store.
//!
//! Used by the test suites and by the `memory` backend for local runs. It
//! enforces the same id parsing and schema validation as the Postgres store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use notes_core::{Note, NoteDraft, NoteUpdate};

use crate::error::StoreResult;
use crate::gateway::NoteGateway;
use crate::models::{parse_note_id, NewNote};

/// Note store held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteGateway for MemoryNoteStore {
    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Note>> {
        let id = parse_note_id(id)?;
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn insert(&self, draft: NoteDraft) -> StoreResult<Note> {
        let note: Note = NewNote::from_draft(draft, Utc::now())?.into();
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn update_by_id(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>> {
        let id = parse_note_id(id)?;
        let mut notes = self.notes.write().await;

        Ok(notes.iter_mut().find(|n| n.id == id).map(|note| {
            update.apply_to(note);
            note.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let id = parse_note_id(id)?;
        let mut notes = self.notes.write().await;

        match notes.iter().position(|n| n.id == id) {
            Some(index) => {
                notes.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use notes_core::NoteId;

    #[tokio::test]
    async fn test_insert_assigns_id_and_date() {
        let store = MemoryNoteStore::new();
        let before = Utc::now();

        let note = store.insert(NoteDraft::new("a").important(true)).await.unwrap();

        assert_eq!(note.content, "a");
        assert!(note.important);
        assert!(note.date >= before);
        assert_eq!(store.find_all().await.unwrap(), vec![note]);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = MemoryNoteStore::new();
        for content in ["first", "second", "third"] {
            store.insert(NoteDraft::new(content)).await.unwrap();
        }

        let contents: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.content)
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_insert_without_content_stores_nothing() {
        let store = MemoryNoteStore::new();
        let err = store.insert(NoteDraft::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryNoteStore::new();
        let result = store
            .update_by_id(&NoteId::new().to_string(), NoteUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let store = MemoryNoteStore::new();
        let note = store.insert(NoteDraft::new("before")).await.unwrap();

        let updated = store
            .update_by_id(
                &note.id.to_string(),
                NoteUpdate {
                    content: None,
                    important: Some(true),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.content, "before");
        assert!(updated.important);
        assert_eq!(updated.date, note.date);
        assert_eq!(store.find_by_id(&note.id.to_string()).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = MemoryNoteStore::new();
        let note = store.insert(NoteDraft::new("gone")).await.unwrap();
        let id = note.id.to_string();

        assert!(store.delete_by_id(&id).await.unwrap());
        assert!(!store.delete_by_id(&id).await.unwrap());
        assert!(store.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_ids_rejected_everywhere() {
        let store = MemoryNoteStore::new();

        assert!(matches!(store.find_by_id("123").await, Err(StoreError::MalformedId(_))));
        assert!(matches!(
            store.update_by_id("123", NoteUpdate::default()).await,
            Err(StoreError::MalformedId(_))
        ));
        assert!(matches!(store.delete_by_id("123").await, Err(StoreError::MalformedId(_))));
    }
}
