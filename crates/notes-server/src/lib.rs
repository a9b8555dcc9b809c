//! notes-server: HTTP API server for notes
//!
//! This crate provides:
//! - REST endpoints for creating, listing, reading, updating and deleting notes
//! - Request logging of method, path and body
//! - Translation of store errors into JSON error responses
//! - Static asset serving for unmatched GET requests
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_server::{app::build_app, config::ServerConfig, state::AppState};
//! use notes_store::MemoryNoteStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(Arc::new(MemoryNoteStore::new()), config);
//! let app = build_app(state)?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::build_app;
pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
