//! notes-core: domain types for the notes API
//!
//! This crate provides the note resource types shared by the storage layer
//! and the HTTP server:
//! - [`NoteId`] identifiers
//! - [`Note`] as persisted and served
//! - [`NoteDraft`] and [`NoteUpdate`] as received from clients

pub mod types;

pub use types::{Note, NoteDraft, NoteId, NoteUpdate};
