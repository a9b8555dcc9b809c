//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteGateway;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// It holds no mutable data of its own; all note state lives behind the
/// gateway.
#[derive(Clone)]
pub struct AppState {
    /// Note persistence gateway.
    notes: Arc<dyn NoteGateway>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(notes: Arc<dyn NoteGateway>, config: ServerConfig) -> Self {
        Self {
            notes,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the note gateway.
    pub fn notes(&self) -> &dyn NoteGateway {
        self.notes.as_ref()
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("notes", &self.notes)
            .field("config", &self.config)
            .finish()
    }
}
