//! Shared helpers for router-level tests.
//!
//! The app is built exactly as `main` builds it, over an in-memory store.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use notes_server::{AppState, ServerConfig, StoreBackend, build_app};
use notes_store::MemoryNoteStore;

/// Build the full app over a fresh in-memory store.
///
/// `static_dir` defaults to a path that does not exist, so unmatched GETs
/// fall straight through to the unknown-endpoint response.
pub fn build_test_app(static_dir: Option<&Path>) -> Router {
    let config = ServerConfig {
        store_backend: StoreBackend::Memory,
        static_dir: static_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| "/nonexistent/notes-static".into()),
        ..ServerConfig::default()
    };

    let state = AppState::new(Arc::new(MemoryNoteStore::new()), config);
    build_app(state).expect("test config is valid")
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Send a raw JSON-typed body, for payloads `send` cannot express.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a note and return its JSON.
pub async fn create_note(app: &Router, body: Value) -> Value {
    let response = send(app, Method::POST, "/api/notes", Some(body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
