//! Unmatched requests: static assets, then the unknown-endpoint response.

use std::path::Path;

use axum::{Json, Router, handler::HandlerWithoutStateExt, http::StatusCode};
use tower_http::services::ServeDir;

use crate::error::ErrorResponse;
use crate::state::AppState;

/// Body of the 404 returned for any unmatched method or path.
pub const UNKNOWN_ENDPOINT: &str = "unknown endpoint";

/// 404 `{"error": "unknown endpoint"}`.
pub async fn unknown_endpoint() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(UNKNOWN_ENDPOINT)))
}

/// Route everything `router` does not match.
///
/// A known path with an unsupported method gets the unknown-endpoint
/// response. Any other request is tried against files under `static_dir`;
/// a miss, or a method other than GET and HEAD, falls through to the
/// unknown-endpoint response too.
pub fn attach(router: Router<AppState>, static_dir: &Path) -> Router<AppState> {
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(unknown_endpoint.into_service());

    router
        .method_not_allowed_fallback(unknown_endpoint)
        .fallback_service(static_files)
}
